//! Error handling for the gesture-animation engine

use thiserror::Error;

/// Errors that can occur when playing, composing, or exporting gestures
#[derive(Debug, Error)]
pub enum AvatarError {
    /// Rescale duration was zero, negative, or not a finite number
    #[error("Invalid duration: {0} (must be a finite number greater than zero)")]
    InvalidDuration(f32),

    /// Gesture has no time extent and cannot be rescaled
    #[error("Gesture '{0}' has zero length and cannot be rescaled")]
    DegenerateGesture(String),

    /// Export format name is not recognized at all
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Joint name does not belong to the skeleton
    #[error("Unknown joint: {0}")]
    UnknownJoint(String),

    /// Skeleton or animation data broke a structural invariant
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using AvatarError
pub type Result<T> = std::result::Result<T, AvatarError>;
