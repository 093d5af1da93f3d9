use std::error::Error;

use azeventhubs::producer::{
    EventHubProducerClient as ProducerClient,
    EventHubProducerClientOptions as ProducerClientOptions, SendEventOptions, TryAddError,
};
use tokio::time::sleep;

use common::utils::json_parser::TripMessage;

use crate::concu_simulator::utils::SimulationConfig;

/// Generates `num_events` random trips and publishes them in batches.
/// A batch is flushed as soon as the client reports it full; whatever
/// remains after the loop is flushed before closing the connection.
/// Any transmission error aborts the run.
#[tokio::main]
pub(crate) async fn send_trips(config: SimulationConfig) -> Result<(), Box<dyn Error>> {
    let mut producer = ProducerClient::new_from_connection_string(
        config.connection_string,
        config.event_hub_name.clone(),
        ProducerClientOptions::default(),
    )
    .await
    .map_err(|e| {
        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
        e.to_string()
    })?;

    log::info!("Connected to event hub '{}'", config.event_hub_name);

    let mut batch = producer.create_batch(Default::default()).await.map_err(|e| {
        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
        e.to_string()
    })?;
    let mut batched_events: usize = 0;

    for i in 0..config.num_events {
        let trip = TripMessage::random();
        let payload = serde_json::to_string(&trip).map_err(|e| {
            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
            e.to_string()
        })?;

        log::debug!("Trip {} of {}: {}", i + 1, config.num_events, payload);

        if let Err(err) = batch.try_add(payload) {
            match err {
                TryAddError::BatchFull(event) => {
                    producer
                        .send_batch(batch, SendEventOptions::new())
                        .await
                        .map_err(|e| {
                            log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
                            e.to_string()
                        })?;

                    log::info!("Sent full batch of {} events", batched_events);

                    batch = producer.create_batch(Default::default()).await.map_err(|e| {
                        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
                        e.to_string()
                    })?;
                    batched_events = 0;

                    if batch.try_add(event).is_err() {
                        return Err("Trip event does not fit in an empty batch".into());
                    }
                }
                TryAddError::Codec { source, .. } => {
                    log::error!("{}:{}, {:?}", std::file!(), std::line!(), source);
                    return Err("Error encoding trip event".into());
                }
            }
        }

        batched_events += 1;

        sleep(config.send_delay).await;
    }

    if batched_events > 0 {
        producer
            .send_batch(batch, SendEventOptions::new())
            .await
            .map_err(|e| {
                log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
                e.to_string()
            })?;

        log::info!("Sent final batch of {} events", batched_events);
    }

    producer.close().await.map_err(|e| {
        log::error!("{}:{}, {}", std::file!(), std::line!(), e.to_string());
        e.to_string()
    })?;

    log::info!(
        "Sent {} trip events to {}",
        config.num_events,
        config.event_hub_name
    );

    Ok(())
}
