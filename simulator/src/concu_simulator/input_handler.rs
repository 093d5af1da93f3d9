use std::env;
use std::time::Duration;

use regex::Regex;

use crate::concu_simulator::consts::{
    CONNECTION_STRING_ENV, DEFAULT_DELAY_MS, DEFAULT_NUM_EVENTS, EVENT_HUB_NAME_ENV,
};
use crate::concu_simulator::utils::SimulationConfig;

/// Validates the command line and the environment.
/// The endpoint settings always come from the environment; the event
/// count and the delay may be overridden on the command line.
pub fn validate_args() -> Result<SimulationConfig, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (num_events, delay_ms) = parse_event_args(&args)?;

    let connection_string = env::var(CONNECTION_STRING_ENV)
        .map_err(|_| format!("Missing {} environment variable.", CONNECTION_STRING_ENV))?;
    let event_hub_name = env::var(EVENT_HUB_NAME_ENV)
        .map_err(|_| format!("Missing {} environment variable.", EVENT_HUB_NAME_ENV))?;

    Ok(SimulationConfig {
        num_events,
        send_delay: Duration::from_millis(delay_ms),
        connection_string,
        event_hub_name,
    })
}

fn parse_event_args(args: &[String]) -> Result<(usize, u64), String> {
    if args.is_empty() {
        return Ok((DEFAULT_NUM_EVENTS, DEFAULT_DELAY_MS));
    }

    let command = args.join(" ");

    let command_pattern =
        Regex::new(r"^events=(\d+)\s+delay_ms=(\d+)$").expect("Invalid regex");

    if let Some(captures) = command_pattern.captures(&command) {
        let num_events: usize = captures[1]
            .parse()
            .map_err(|_| "Invalid events number".to_string())?;
        let delay_ms: u64 = captures[2]
            .parse()
            .map_err(|_| "Invalid delay_ms number".to_string())?;

        if num_events == 0 {
            return Err("events must be greater than zero.".to_string());
        }

        Ok((num_events, delay_ms))
    } else {
        Err("Invalid command format, expected: events=<n> delay_ms=<ms>".to_string())
    }
}
