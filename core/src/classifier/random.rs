use std::sync::Mutex;

use catwatch_common::image::Image;
use catwatch_common::ports::classifier::ImageClassifier;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws a random confidence for every frame and reports a cat when it clears
/// the threshold. The image itself is ignored.
pub struct RandomClassifier {
    rng: Mutex<StdRng>,
}

impl RandomClassifier {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Reproducible verdicts for demos and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageClassifier for RandomClassifier {
    fn contains_cat(&self, _image: &Image, confidence_threshold: f32) -> anyhow::Result<bool> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| anyhow::anyhow!("classifier rng poisoned"))?;
        let confidence: f32 = rng.random_range(0.0..100.0);
        Ok(confidence >= confidence_threshold)
    }
}
