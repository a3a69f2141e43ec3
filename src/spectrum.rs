//! Magnitude spectrum computation.
//!
//! Thin glue that turns a real-valued audio frame into the magnitude
//! spectrum consumed by [`crate::peaks::spectral_peaks`]: a forward FFT
//! (via rustfft) followed by per-bin complex magnitude. The full `n`-bin
//! transform is returned, so bin `b` maps to `b * sample_rate / n` Hz and
//! the mirrored upper half falls beyond any ceiling at or below the
//! Nyquist frequency.

use crate::error::{Error, Result};
use num_complex::Complex32;
use rustfft::FftPlanner;

/// Compute the forward complex FFT of a real-valued frame.
///
/// Returns all `n` complex bins of the transform. An empty frame yields
/// an empty result.
///
/// # Example
/// ```
/// use crest::spectrum::fft;
///
/// let frame = vec![1.0, 0.0, 0.0, 0.0];
/// let bins = fft(&frame);
/// assert_eq!(bins.len(), 4);
/// ```
pub fn fft(frame: &[f32]) -> Vec<Complex32> {
    if frame.is_empty() {
        return Vec::new();
    }

    let mut buffer: Vec<Complex32> = frame.iter().map(|&x| Complex32::new(x, 0.0)).collect();
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_forward(buffer.len());
    plan.process(&mut buffer);
    buffer
}

/// Per-bin magnitude of a complex spectrum: `sqrt(re^2 + im^2)`.
pub fn magnitude(bins: &[Complex32]) -> Vec<f32> {
    bins.iter().map(|c| c.norm()).collect()
}

/// Compute the magnitude spectrum of a real-valued frame.
///
/// Forward FFT followed by per-bin magnitude; the result has one value
/// per input sample.
///
/// # Errors
/// Returns an error if the frame is empty.
///
/// # Example
/// ```
/// use crest::spectrum::magnitude_spectrum;
/// use crest::synth::tone;
///
/// let frame = tone(440.0, 22050, 0.1);
/// let spectrum = magnitude_spectrum(&frame).unwrap();
/// assert_eq!(spectrum.len(), frame.len());
/// ```
pub fn magnitude_spectrum(frame: &[f32]) -> Result<Vec<f32>> {
    if frame.is_empty() {
        return Err(Error::InvalidSize {
            name: "frame",
            value: 0,
            reason: "must be non-empty",
        });
    }

    let bins = fft(frame);
    Ok(magnitude(&bins))
}

/// Center frequency in Hz of each bin of an `n_bins`-point spectrum.
pub fn bin_frequencies(n_bins: usize, sample_rate: f32) -> Vec<f32> {
    let scale = sample_rate / n_bins as f32;
    (0..n_bins).map(|b| b as f32 * scale).collect()
}
