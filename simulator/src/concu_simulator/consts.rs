use log::LevelFilter;

pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

pub const CONNECTION_STRING_ENV: &str = "EVENT_HUBS_CONNECTION_STRING";
pub const EVENT_HUB_NAME_ENV: &str = "EVENT_HUB_NAME";

pub const DEFAULT_NUM_EVENTS: usize = 50;
pub const DEFAULT_DELAY_MS: u64 = 200;
