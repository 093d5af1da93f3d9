use serde::{Deserialize, Serialize};

use super::trip::TripEvent;

/// Envelope expected by the ingestion pipeline: the trip travels
/// under a single `ContentData` key.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripMessage {
    #[serde(rename = "ContentData")]
    pub content_data: TripEvent,
}

impl TripMessage {
    pub fn random() -> Self {
        Self {
            content_data: TripEvent::random(),
        }
    }
}
