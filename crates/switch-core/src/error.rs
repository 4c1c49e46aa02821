//! Switch configuration error types

use thiserror::Error;

/// Errors raised while validating or loading a switch configuration
///
/// Both geometry errors are programming errors of the owning application.
/// A layout that hits one produces no output at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwitchError {
    /// Orientation string is neither "horizontal" nor "vertical"
    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),

    /// Fewer than two positions makes the per-position step divide by zero
    #[error("Switch needs at least 2 positions, got {0}")]
    TooFewPositions(usize),

    /// Serialized config could not be parsed
    #[error("Failed to parse switch config: {0}")]
    Config(String),
}

/// Result type for switch operations
pub type SwitchResult<T> = Result<T, SwitchError>;
