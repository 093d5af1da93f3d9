use concu_simulator::input_handler;
use concu_simulator::sender::send_trips;
use std::error::Error;

pub mod concu_simulator;

pub fn run() -> Result<(), Box<dyn Error>> {
    match input_handler::validate_args() {
        Ok(config) => {
            log::info!(
                "Simulating {} trip events towards '{}'",
                config.num_events,
                config.event_hub_name
            );
            send_trips(config)?;
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", error);
            Err(Box::from(error))
        }
    }
}
