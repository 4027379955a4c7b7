//! Audio engine contract - frequency response projection
//!
//! The actual coefficient math lives in the audio engine's render kernel,
//! outside this crate. The bridge only forwards sample points and relays the
//! magnitudes back to the view.

/// Source of filter frequency-response magnitudes
pub trait ResponseCurve: Send + Sync {
    /// Evaluate the response at the given frequencies
    ///
    /// The result must be index-aligned with `frequencies` and of the same
    /// length.
    fn magnitudes(&self, frequencies: &[f32]) -> Vec<f32>;
}
