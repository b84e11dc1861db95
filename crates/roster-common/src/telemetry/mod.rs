//! Telemetry and tracing setup

mod tracing_setup;

pub use tracing_setup::{
    open_log_file, try_init_tracing_with_config, TracingConfig, TracingError, LOG_FILE_NAME,
    TIMESTAMP_FORMAT,
};
