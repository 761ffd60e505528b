pub mod error_handler;

pub use error_handler::{catch_panic, json_config, last_resort};
