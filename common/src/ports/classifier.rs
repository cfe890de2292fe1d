use crate::image::Image;

/// Decides whether an image contains a cat.
///
/// Calls may be slow. They must not touch alarm state; the engine invokes the
/// classifier without holding its state lock.
pub trait ImageClassifier: Send + Sync {
    /// # Arguments
    /// * `image` - The camera frame to inspect.
    /// * `confidence_threshold` - Minimum confidence, in percent, for a positive answer.
    ///
    /// # Returns
    /// * `Ok(true)` - A cat was found with at least the requested confidence.
    /// * `Ok(false)` - No cat, or not confident enough.
    fn contains_cat(&self, image: &Image, confidence_threshold: f32) -> anyhow::Result<bool>;
}
