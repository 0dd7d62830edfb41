//! # Infra-Common
//!
//! Shared infrastructure for the vmconnect crates.
//!
//! - [`config`]: startup configuration, loaded and validated once
//! - [`logging`]: `tracing` subscriber setup and log contexts
//! - [`errors`]: error type for the two modules above

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{ConnectConfig, InstanceArn};
pub use errors::{Error, Result};
pub use logging::{setup_logging, LogContext, LoggingConfig};
