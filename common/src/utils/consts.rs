pub const MIN_VENDOR_ID: u32 = 1;
pub const MAX_VENDOR_ID: u32 = 20;

pub const MIN_TRIP_DISTANCE: f64 = 0.2;
pub const MAX_TRIP_DISTANCE: f64 = 15.0;

pub const MIN_PASSENGER_COUNT: u32 = 1;
pub const MAX_PASSENGER_COUNT: u32 = 6;

// 1 = credit card, 2 = cash
pub const PAYMENT_TYPES: [&str; 2] = ["1", "2"];
