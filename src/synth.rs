//! Synthetic test signals.
//!
//! Small generators used to exercise the analysis pipeline without any
//! audio file I/O.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a pure sine tone.
///
/// # Example
/// ```
/// use crest::synth::tone;
///
/// let signal = tone(440.0, 22050, 0.5);
/// assert_eq!(signal.len(), 11025);
/// ```
pub fn tone(frequency: f32, sample_rate: u32, duration: f32) -> Vec<f32> {
    let n_samples = (duration * sample_rate as f32) as usize;
    let angular_freq = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;
    (0..n_samples)
        .map(|i| (angular_freq * i as f32).sin())
        .collect()
}

/// Generate a linear chirp sweeping from `f0` to `f1` Hz.
///
/// The phase is accumulated sample by sample from the instantaneous
/// frequency, so the sweep stays continuous at every step.
///
/// # Example
/// ```
/// use crest::synth::chirp;
///
/// let signal = chirp(100.0, 200.0, 8000, 0.5);
/// assert_eq!(signal.len(), 4000);
/// ```
pub fn chirp(f0: f32, f1: f32, sample_rate: u32, duration: f32) -> Vec<f32> {
    let n_samples = (duration * sample_rate as f32) as usize;
    let dt = 1.0 / sample_rate as f32;
    let sweep_rate = (f1 - f0) / duration;

    let mut signal = Vec::with_capacity(n_samples);
    let mut phase = 0.0f32;
    for i in 0..n_samples {
        signal.push(phase.sin());
        let instantaneous = f0 + sweep_rate * (i as f32 * dt);
        phase += 2.0 * std::f32::consts::PI * instantaneous * dt;
    }
    signal
}

/// Generate a weighted sum of sine partials.
///
/// Each entry of `partials` is a `(frequency, amplitude)` pair; the
/// partials are mixed into a single mono buffer.
///
/// # Example
/// ```
/// use crest::synth::mixture;
///
/// let signal = mixture(&[(440.0, 1.0), (880.0, 0.5)], 22050, 0.1);
/// assert_eq!(signal.len(), 2205);
/// ```
pub fn mixture(partials: &[(f32, f32)], sample_rate: u32, duration: f32) -> Vec<f32> {
    let n_samples = (duration * sample_rate as f32) as usize;
    let mut signal = vec![0.0f32; n_samples];

    for &(frequency, amplitude) in partials {
        let angular_freq = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;
        for (i, sample) in signal.iter_mut().enumerate() {
            *sample += amplitude * (angular_freq * i as f32).sin();
        }
    }

    signal
}

/// Generate deterministic white noise in `[-1, 1]` from a fixed seed.
pub fn noise(n_samples: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_samples).map(|_| rng.random_range(-1.0..1.0)).collect()
}
