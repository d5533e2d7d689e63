//! Blueprint Utilities
//!
//! Shared plumbing for the blueprint crates: error type, logging setup,
//! layered configuration and the text helpers used to tidy summaries.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod logging;
pub mod string;

pub use self::config::{load_config, load_layered, ConfigFormat};
pub use logging::{basic_config, init_logging, LogLevel, LoggerConfig};
pub use string::{capitalize_first_letter, ensure_period, join_prose, normalize_whitespace, safe_truncate};

/// Result type used throughout blueprint utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}
