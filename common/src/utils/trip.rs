use rand::Rng;
use serde::{Deserialize, Serialize};

use super::consts::{
    MAX_PASSENGER_COUNT, MAX_TRIP_DISTANCE, MAX_VENDOR_ID, MIN_PASSENGER_COUNT, MIN_TRIP_DISTANCE,
    MIN_VENDOR_ID, PAYMENT_TYPES,
};

/// A simulated taxi trip. Every field travels as a string, matching
/// what the downstream pipeline expects.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripEvent {
    #[serde(rename = "vendorID")]
    pub vendor_id: String,
    #[serde(rename = "tripDistance")]
    pub trip_distance: String,
    #[serde(rename = "passengerCount")]
    pub passenger_count: String,
    #[serde(rename = "paymentType")]
    pub payment_type: String,
}

impl TripEvent {
    /// Draws every field from its allowed range
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();

        Self {
            vendor_id: format!("V{:03}", rng.gen_range(MIN_VENDOR_ID..=MAX_VENDOR_ID)),
            trip_distance: format!("{:.2}", rng.gen_range(MIN_TRIP_DISTANCE..=MAX_TRIP_DISTANCE)),
            passenger_count: rng
                .gen_range(MIN_PASSENGER_COUNT..=MAX_PASSENGER_COUNT)
                .to_string(),
            payment_type: PAYMENT_TYPES[rng.gen_range(0..PAYMENT_TYPES.len())].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn random_vendor_id_has_fixed_width() {
        let vendor_pattern = Regex::new(r"^V(\d{3})$").expect("Invalid regex");

        for _ in 0..100 {
            let trip = TripEvent::random();

            let captures = vendor_pattern
                .captures(&trip.vendor_id)
                .unwrap_or_else(|| panic!("Bad vendor id: {}", trip.vendor_id));

            let vendor_number: u32 = captures[1].parse().expect("Vendor id is not a number");
            assert!((MIN_VENDOR_ID..=MAX_VENDOR_ID).contains(&vendor_number));
        }
    }

    #[test]
    fn random_trip_distance_is_in_range() {
        let distance_pattern = Regex::new(r"^\d+\.\d{2}$").expect("Invalid regex");

        for _ in 0..100 {
            let trip = TripEvent::random();

            assert!(
                distance_pattern.is_match(&trip.trip_distance),
                "Bad trip distance: {}",
                trip.trip_distance
            );

            let distance: f64 = trip
                .trip_distance
                .parse()
                .expect("Trip distance is not a number");
            assert!((MIN_TRIP_DISTANCE..=MAX_TRIP_DISTANCE).contains(&distance));
        }
    }

    #[test]
    fn random_passenger_count_is_in_range() {
        for _ in 0..100 {
            let trip = TripEvent::random();

            let count: u32 = trip
                .passenger_count
                .parse()
                .expect("Passenger count is not a number");
            assert!((MIN_PASSENGER_COUNT..=MAX_PASSENGER_COUNT).contains(&count));
        }
    }

    #[test]
    fn random_payment_type_is_known() {
        for _ in 0..100 {
            let trip = TripEvent::random();

            assert!(PAYMENT_TYPES.contains(&trip.payment_type.as_str()));
        }
    }
}
