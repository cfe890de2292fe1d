use catwatch_common::error::SecurityError;
use catwatch_common::image::Image;
use catwatch_common::ports::classifier::ImageClassifier;

/// Treats the mean brightness of the frame, as a percentage of white, as the
/// confidence that a cat is in view. Deterministic, which makes it handy for
/// scripted runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrightnessClassifier;

impl BrightnessClassifier {
    pub fn confidence(image: &Image) -> Result<f32, SecurityError> {
        if image.is_empty() {
            return Err(SecurityError::EmptyImage);
        }
        let total: u64 = image.pixels.iter().map(|&p| u64::from(p)).sum();
        let mean = total as f64 / image.pixels.len() as f64;
        Ok((mean / 255.0 * 100.0) as f32)
    }
}

impl ImageClassifier for BrightnessClassifier {
    fn contains_cat(&self, image: &Image, confidence_threshold: f32) -> anyhow::Result<bool> {
        Ok(Self::confidence(image)? >= confidence_threshold)
    }
}
