pub mod consts;
pub mod input_handler;
pub mod sender;
pub mod utils;
