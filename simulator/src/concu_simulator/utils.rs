use std::time::Duration;

pub struct SimulationConfig {
    pub num_events: usize,
    pub send_delay: Duration,
    pub connection_string: String,
    pub event_hub_name: String,
}
