//! Spectral peak extraction with sub-bin parabolic refinement.
//!
//! Given a magnitude spectrum, [`spectral_peaks`] scans left to right for
//! local maxima and refines each single-bin maximum to a fractional bin
//! position by fitting a parabola through the three samples around it.
//! Flat-topped maxima (plateaus) are reported at their midpoint without
//! refinement. Detected peaks come back as two parallel vectors of
//! frequencies (Hz) and amplitudes, in strictly increasing frequency order.

use crate::error::{Error, Result};
use ndarray::Array2;

/// Configuration for spectral peak extraction.
///
/// # Example
/// ```
/// use crest::peaks::PeakConfig;
///
/// let config = PeakConfig::new()
///     .with_sample_rate(22050.0)
///     .with_max_frequency(4000.0)
///     .with_threshold(0.1);
/// ```
#[derive(Debug, Clone)]
pub struct PeakConfig {
    /// Sample rate of the audio the spectrum was computed from, in Hz
    pub sample_rate: f32,
    /// Peaks above this frequency are discarded and stop the scan
    pub max_frequency: f32,
    /// Minimum amplitude for a bin to qualify as a peak
    pub threshold: f32,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            max_frequency: 5000.0,
            threshold: 0.0,
        }
    }
}

impl PeakConfig {
    /// Create a new configuration with default parameters
    /// (44100 Hz sample rate, 5000 Hz ceiling, zero threshold).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the frequency ceiling in Hz.
    pub fn with_max_frequency(mut self, max_frequency: f32) -> Self {
        self.max_frequency = max_frequency;
        self
    }

    /// Set the minimum peak amplitude.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Phases of the left-to-right peak scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Walking down or across a non-increasing run
    Falling,
    /// Climbing a strictly rising run
    Rising,
    /// Walking across a run of equal values after a climb
    Plateau,
    /// Deciding whether the run that just ended is a peak
    DescendingCheck,
    /// Scan finished
    Done,
}

/// Refine a single-bin maximum by parabolic interpolation.
///
/// Fits a parabola through `(left, mid, right)` centered at integer bin
/// `c_bin` and returns the fractional bin position and amplitude of its
/// vertex. When the three samples are collinear the parabola is degenerate;
/// the peak is then reported at the integer bin with the unrefined
/// amplitude instead of propagating a division by zero.
fn interpolate(left: f32, mid: f32, right: f32, c_bin: usize) -> (f32, f32) {
    let denom = left - 2.0 * mid + right;
    if denom == 0.0 {
        return (c_bin as f32, mid);
    }
    let delta_x = 0.5 * (left - right) / denom;
    let refined_bin = c_bin as f32 + delta_x;
    let refined_amp = mid - 0.25 * (left - right) * delta_x;
    (refined_bin, refined_amp)
}

fn validate(spectrum: &[f32], config: &PeakConfig) -> Result<()> {
    if spectrum.len() < 3 {
        return Err(Error::InvalidSize {
            name: "spectrum",
            value: spectrum.len(),
            reason: "need at least 3 bins",
        });
    }
    if !spectrum.iter().all(|v| v.is_finite()) {
        return Err(Error::NonFiniteSpectrum);
    }
    if !config.sample_rate.is_finite() || config.sample_rate <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "sample_rate",
            value: config.sample_rate.to_string(),
            reason: "must be finite and positive".to_string(),
        });
    }
    if !config.max_frequency.is_finite() || config.max_frequency < 0.0 {
        return Err(Error::InvalidParameter {
            name: "max_frequency",
            value: config.max_frequency.to_string(),
            reason: "must be finite and non-negative".to_string(),
        });
    }
    Ok(())
}

/// Extract spectral peaks from a magnitude spectrum.
///
/// Scans the spectrum once from bin 0 upward and reports every local
/// maximum whose amplitude exceeds `config.threshold`, stopping as soon as
/// a candidate peak lands above `config.max_frequency`. Single-bin maxima
/// are refined to sub-bin precision by parabolic interpolation; plateau
/// maxima are reported at their midpoint bin; a maximum at bin 0 is
/// reported as-is (it has no left neighbor to interpolate against).
///
/// Bin positions map to frequency via `sample_rate / spectrum.len()`, so
/// the spectrum is expected to hold all bins of its source transform.
///
/// # Arguments
/// * `spectrum` - Magnitude spectrum, at least 3 bins, all values finite
/// * `config` - Scan parameters (sample rate, frequency ceiling, threshold)
///
/// # Returns
/// Parallel `(frequencies, amplitudes)` vectors in strictly increasing
/// frequency order.
///
/// # Errors
/// Returns an error if the spectrum is shorter than 3 bins or contains
/// non-finite values, if `sample_rate` is not positive, or if
/// `max_frequency` is negative.
///
/// # Example
/// ```
/// use crest::peaks::{spectral_peaks, PeakConfig};
///
/// let spectrum = vec![0.0, 1.0, 5.0, 1.0, 0.0];
/// let config = PeakConfig::new().with_sample_rate(10.0);
/// let (frequencies, amplitudes) = spectral_peaks(&spectrum, &config).unwrap();
/// assert_eq!(frequencies, vec![4.0]);
/// assert_eq!(amplitudes, vec![5.0]);
/// ```
pub fn spectral_peaks(spectrum: &[f32], config: &PeakConfig) -> Result<(Vec<f32>, Vec<f32>)> {
    validate(spectrum, config)?;

    let n = spectrum.len();
    // Highest bin the scan may treat as a peak candidate; bin n-1 only ever
    // acts as a right neighbor.
    let last_interior = n - 2;
    let scale = config.sample_rate / n as f32;

    let mut frequencies = Vec::new();
    let mut amplitudes = Vec::new();

    // A maximum at bin 0 has no left neighbor, so it is recorded without
    // refinement before the scan proper.
    if spectrum[0] > spectrum[1] && spectrum[0] > config.threshold {
        frequencies.push(0.0);
        amplitudes.push(spectrum[0]);
    }

    let mut state = ScanState::Falling;
    let mut i = 0usize;
    // First bin of the current plateau (equals i for a single-bin maximum).
    let mut start = 0usize;
    // Whether the current candidate was reached by an actual climb. A run
    // that only fell into the tail of the spectrum is not a peak.
    let mut rose = false;

    while state != ScanState::Done {
        match state {
            ScanState::Falling => {
                if i < last_interior && spectrum[i] >= spectrum[i + 1] {
                    i += 1;
                } else {
                    rose = false;
                    state = ScanState::Rising;
                }
            }
            ScanState::Rising => {
                if i < last_interior && spectrum[i] < spectrum[i + 1] {
                    i += 1;
                    rose = true;
                } else {
                    start = i;
                    state = ScanState::Plateau;
                }
            }
            ScanState::Plateau => {
                if i < last_interior && spectrum[i] == spectrum[i + 1] {
                    i += 1;
                } else {
                    state = ScanState::DescendingCheck;
                }
            }
            ScanState::DescendingCheck => {
                if rose && spectrum[i + 1] < spectrum[i] && spectrum[i] > config.threshold {
                    if i != start {
                        // Flat top: report the plateau midpoint, unrefined.
                        let freq = (start + i) as f32 * 0.5 * scale;
                        if freq > config.max_frequency {
                            state = ScanState::Done;
                            continue;
                        }
                        frequencies.push(freq);
                        amplitudes.push(spectrum[start]);
                    } else if i < last_interior {
                        let (bin, amp) =
                            interpolate(spectrum[i - 1], spectrum[i], spectrum[i + 1], i);
                        let freq = bin * scale;
                        if freq > config.max_frequency {
                            state = ScanState::Done;
                            continue;
                        }
                        frequencies.push(freq);
                        amplitudes.push(amp);
                    }
                    // A single-bin maximum sitting exactly at the last
                    // interior bin is handled by the trailing check below.
                }

                if i >= last_interior {
                    // Trailing check: a maximum at the last interior bin,
                    // flanked on both sides, still counts as a peak.
                    if i == last_interior
                        && spectrum[i - 1] < spectrum[i]
                        && spectrum[i + 1] < spectrum[i]
                        && spectrum[i] > config.threshold
                    {
                        let (bin, amp) =
                            interpolate(spectrum[i - 1], spectrum[i], spectrum[i + 1], i);
                        let freq = bin * scale;
                        if freq <= config.max_frequency {
                            frequencies.push(freq);
                            amplitudes.push(amp);
                        }
                    }
                    state = ScanState::Done;
                } else {
                    state = ScanState::Falling;
                }
            }
            ScanState::Done => unreachable!("loop exits before entering Done"),
        }
    }

    Ok((frequencies, amplitudes))
}

/// Extract spectral peaks from every frame of a magnitude spectrogram.
///
/// Applies [`spectral_peaks`] to each column of a `(bins x frames)`
/// spectrogram with the same configuration.
///
/// # Arguments
/// * `spectrogram` - Magnitude spectrogram, one spectrum per column
/// * `config` - Scan parameters applied to every frame
///
/// # Returns
/// One `(frequencies, amplitudes)` pair per frame, in frame order.
///
/// # Errors
/// Returns an error if any frame fails [`spectral_peaks`] validation.
pub fn spectral_peaks_frames(
    spectrogram: &Array2<f32>,
    config: &PeakConfig,
) -> Result<Vec<(Vec<f32>, Vec<f32>)>> {
    let n_frames = spectrogram.shape()[1];
    let mut results = Vec::with_capacity(n_frames);

    for frame in 0..n_frames {
        let column: Vec<f32> = spectrogram.column(frame).to_vec();
        results.push(spectral_peaks(&column, config)?);
    }

    Ok(results)
}
