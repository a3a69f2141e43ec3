//! Peak Extraction Example
//!
//! Builds a three-partial mixture, computes its magnitude spectrum, and
//! extracts spectral peaks with sub-bin refinement.
//!
//! Run with: `RUST_LOG=info cargo run --example peak_extraction`

use crest::peaks::{spectral_peaks, PeakConfig};
use crest::spectrum::magnitude_spectrum;
use crest::synth::mixture;
use log::info;

fn main() -> crest::Result<()> {
    env_logger::init();
    info!("Peak Extraction Example");

    // 2048 samples at 20480 Hz: bin spacing is exactly 10 Hz.
    let sample_rate = 20480u32;
    let partials = [(440.0, 1.0), (1320.0, 0.6), (2640.0, 0.3)];

    info!("Synthesizing mixture:");
    for (freq, amp) in &partials {
        info!("  - {:.1} Hz at amplitude {:.2}", freq, amp);
    }
    let frame = mixture(&partials, sample_rate, 0.1);
    info!("Generated {} samples", frame.len());

    let spectrum = magnitude_spectrum(&frame)?;
    info!("Magnitude spectrum: {} bins", spectrum.len());

    let config = PeakConfig::new()
        .with_sample_rate(sample_rate as f32)
        .with_max_frequency(5000.0)
        .with_threshold(1.0);
    let (frequencies, amplitudes) = spectral_peaks(&spectrum, &config)?;

    info!("Detected {} peaks:", frequencies.len());
    for (freq, amp) in frequencies.iter().zip(&amplitudes) {
        info!("  {:8.2} Hz  amplitude {:8.2}", freq, amp);
    }

    Ok(())
}
