pub mod logging;

pub use logging::{init_logging, init_logging_to, log_system_info};
