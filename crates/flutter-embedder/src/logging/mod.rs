//! Logging utilities.
//!
//! Centralizes `env_logger` initialization behind the `log` facade used by the
//! rest of the crate.

mod init;

pub use init::{LoggingConfig, init_logging};
