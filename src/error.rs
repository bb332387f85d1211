//! Error types for board setup.
//!
//! Runtime event handling never fails; only configuration and host
//! bootstrap surface errors.

use thiserror::Error;

/// Result type for board setup operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised while configuring a board
#[derive(Debug, Error)]
pub enum BoardError {
    /// Slot width (item width plus margin) must be strictly positive
    #[error("invalid slot width {width} for {source_field}: must be greater than zero")]
    InvalidSlotWidth { source_field: &'static str, width: f32 },

    /// Configuration text could not be parsed
    #[error("invalid board configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// Column id not present on the board
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Logger bootstrap failed
    #[error("logging setup failed: {message}")]
    Logging { message: String },
}
