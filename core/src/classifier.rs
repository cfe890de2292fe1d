//! Stand-in image classifiers for [`catwatch_common::ports::classifier::ImageClassifier`].
//!
//! Neither of these knows what a cat looks like. They exist so the engine can be
//! driven end to end without a real vision model behind the port.

mod brightness;
mod random;

pub use brightness::BrightnessClassifier;
pub use random::RandomClassifier;
