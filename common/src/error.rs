//! Error types for the security monitor.

use thiserror::Error;

/// Precondition violations detected by the alarm engine or while parsing
/// operator input. Collaborator failures are not wrapped here; they travel
/// unchanged inside `anyhow::Error`.
#[derive(Debug, Error, PartialEq)]
pub enum SecurityError {
    /// The sensor handed to an engine call is not known to the repository.
    #[error("sensor not found: {0}")]
    SensorNotFound(String),

    #[error("unknown status: '{0}'")]
    UnknownStatus(String),

    #[error("unknown sensor type: '{0}'")]
    UnknownSensorType(String),

    /// Confidence thresholds are percentages.
    #[error("invalid confidence threshold {0}, expected a value between 0 and 100")]
    InvalidThreshold(f32),

    #[error("image is empty")]
    EmptyImage,

    /// A previous operation panicked while holding the engine state.
    #[error("engine state poisoned by an earlier panic")]
    StatePoisoned,
}

impl SecurityError {
    pub fn sensor_not_found(sensor: impl std::fmt::Display) -> Self {
        Self::SensorNotFound(sensor.to_string())
    }
}
