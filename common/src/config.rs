use std::path::PathBuf;

use crate::error::SecurityError;

/// Confidence (in percent) the classifier must reach before reporting a cat.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

pub const DEFAULT_STORE_PATH: &str = "catwatch.json";

pub struct Config {
    /// Threshold handed to the image classifier on every `process_image` call.
    pub confidence_threshold: f32,
    /// Location of the JSON snapshot used by the file-backed repository.
    pub store_path: PathBuf,
    /// Quiet level. Anything above zero suppresses headers.
    pub quiet: u8,
}

impl Config {
    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, SecurityError> {
        if !(0.0..=100.0).contains(&threshold) {
            return Err(SecurityError::InvalidThreshold(threshold));
        }
        self.confidence_threshold = threshold;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            quiet: 0,
        }
    }
}
