//! # Error Types
//!
//! This module defines error types used throughout the genppd library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for genppd operations
#[derive(Debug, Error)]
pub enum GenppdError {
    /// A requested printer is not in the model catalog
    #[error("Driver not found: {0}")]
    PrinterNotFound(String),

    /// The output file for one document could not be created or written
    #[error("Unable to create file \"{}\" - {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The printer declares more distinct resolutions than the safe name
    /// space can represent
    #[error("No free resolution name for {x}x{y}dpi (driver resolution {internal})")]
    ResolutionSpaceExhausted { x: i32, y: i32, internal: String },

    /// Malformed model catalog, locale catalog or config file
    #[error("Database error: {0}")]
    Database(#[from] serde_json::Error),

    /// Malformed driver URI passed to `cat`
    #[error("Bad ppd-name \"{0}\"")]
    InvalidUri(String),

    /// Driver URI built for another release
    #[error("Version mismatch: expected {expected}, got {found}")]
    VersionMismatch { expected: String, found: String },

    /// Invalid generator configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Some documents of a batch were not written
    #[error("{0} document(s) could not be written")]
    BatchIncomplete(usize),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, GenppdError>;
