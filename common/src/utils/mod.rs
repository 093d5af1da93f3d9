pub mod consts;
pub mod json_parser;
pub mod trip;
