//! CRAFT command line
//!
//! Library half of the `craft` binary: configuration, logging setup and the
//! commands themselves.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use commands::{DiffArgs, FormatArgs};
pub use config::CraftConfig;
pub use error::{CliError, CliResult, ConfigError};
pub use logging::init_logging;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
