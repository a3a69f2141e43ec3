//! Spectral peak extraction for audio analysis.
//!
//! Crest takes a magnitude spectrum and produces a sparse list of spectral
//! peaks, each refined to sub-bin frequency resolution by parabolic
//! interpolation. The peak list is the usual input to tonal-analysis
//! stages such as harmonic pitch class profiles, which consume
//! `(frequencies, amplitudes)` pairs rather than raw spectra.
//!
//! # Quick Start
//!
//! ```rust
//! use crest::peaks::{spectral_peaks, PeakConfig};
//! use crest::spectrum::magnitude_spectrum;
//! use crest::synth::mixture;
//!
//! // 0.1 s of two partials at a 20480 Hz sample rate (2048 samples).
//! let frame = mixture(&[(440.0, 1.0), (1320.0, 0.5)], 20480, 0.1);
//! let spectrum = magnitude_spectrum(&frame).unwrap();
//!
//! let config = PeakConfig::new()
//!     .with_sample_rate(20480.0)
//!     .with_threshold(1.0);
//! let (frequencies, _amplitudes) = spectral_peaks(&spectrum, &config).unwrap();
//!
//! assert_eq!(frequencies.len(), 2);
//! assert!((frequencies[0] - 440.0).abs() < 1.0);
//! assert!((frequencies[1] - 1320.0).abs() < 1.0);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`peaks`] | Peak extraction with sub-bin parabolic refinement |
//! | [`spectrum`] | FFT and magnitude spectrum glue feeding the extractor |
//! | [`synth`] | Synthetic test signals (`tone`, `chirp`, `mixture`, `noise`) |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum covers invalid
//! parameters, undersized inputs, and non-finite spectrum data. The
//! extractor itself is a pure function: it never retries, logs, or keeps
//! state across calls.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]` — no unsafe Rust anywhere.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod peaks;
pub mod spectrum;
pub mod synth;

pub use peaks::{spectral_peaks, spectral_peaks_frames, PeakConfig};
