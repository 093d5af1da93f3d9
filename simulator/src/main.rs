use std::error::Error;

use simulator::concu_simulator::consts::LOG_LEVEL;

fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenv::from_filename(".env");

    env_logger::builder()
        .filter_level(LOG_LEVEL)
        .format_target(false)
        .format_module_path(false)
        .format_timestamp(None)
        .init();

    simulator::run()
}
