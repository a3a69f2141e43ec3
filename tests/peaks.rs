use crest::peaks::{spectral_peaks, spectral_peaks_frames, PeakConfig};
use crest::Error;
use ndarray::Array2;

#[test]
fn single_dominant_peak_is_interpolated() {
    // Symmetric neighbors around bin 2: delta_x = 0, so the refined peak
    // sits exactly on the bin center.
    let spectrum = vec![0.0, 1.0, 5.0, 1.0, 0.0];
    let config = PeakConfig::new().with_sample_rate(10.0);

    let (freqs, amps) = spectral_peaks(&spectrum, &config).unwrap();
    assert_eq!(freqs, vec![4.0]);
    assert_eq!(amps, vec![5.0]);
}

#[test]
fn plateau_peak_at_midpoint_without_interpolation() {
    // Plateau spans bins 1-3; midpoint bin 2, amplitude taken as-is.
    let spectrum = vec![0.0, 3.0, 3.0, 3.0, 0.0];
    let config = PeakConfig::new().with_sample_rate(5.0);

    let (freqs, amps) = spectral_peaks(&spectrum, &config).unwrap();
    assert_eq!(freqs, vec![2.0]);
    assert_eq!(amps, vec![3.0]);
}

#[test]
fn boundary_peak_at_bin_zero() {
    let spectrum = vec![5.0, 1.0, 0.0];
    let config = PeakConfig::new().with_sample_rate(44100.0);

    let (freqs, amps) = spectral_peaks(&spectrum, &config).unwrap();
    assert_eq!(freqs[0], 0.0);
    assert_eq!(amps[0], 5.0);
}

#[test]
fn boundary_peak_respects_threshold() {
    let spectrum = vec![5.0, 1.0, 0.0];
    let config = PeakConfig::new().with_threshold(5.0);

    let (freqs, _) = spectral_peaks(&spectrum, &config).unwrap();
    assert!(freqs.is_empty());
}

#[test]
fn scan_stops_at_max_frequency() {
    // Two qualifying peaks at bins 2 and 6 (8 Hz and 24 Hz with scale 4);
    // the ceiling sits between them, so only the first survives.
    let spectrum = vec![0.0, 1.0, 5.0, 1.0, 0.0, 1.0, 5.0, 1.0, 0.0];
    let config = PeakConfig::new()
        .with_sample_rate(36.0)
        .with_max_frequency(16.0);

    let (freqs, amps) = spectral_peaks(&spectrum, &config).unwrap();
    assert_eq!(freqs, vec![8.0]);
    assert_eq!(amps, vec![5.0]);
}

#[test]
fn flat_spectrum_yields_no_peaks() {
    let spectrum = vec![1.0; 32];
    let config = PeakConfig::new();

    let (freqs, amps) = spectral_peaks(&spectrum, &config).unwrap();
    assert!(freqs.is_empty());
    assert!(amps.is_empty());
}

#[test]
fn collinear_spectrum_yields_no_peaks() {
    // Strictly monotone data has no local maximum at all.
    let spectrum: Vec<f32> = (0..16).map(|i| i as f32).collect();
    let config = PeakConfig::new();

    let (freqs, _) = spectral_peaks(&spectrum, &config).unwrap();
    assert!(freqs.is_empty());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let spectrum: Vec<f32> = crest::synth::noise(256, 7).iter().map(|x| x.abs()).collect();
    let config = PeakConfig::new().with_sample_rate(512.0).with_max_frequency(256.0);

    let first = spectral_peaks(&spectrum, &config).unwrap();
    let second = spectral_peaks(&spectrum, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn frequencies_strictly_increase() {
    let spectrum: Vec<f32> = crest::synth::noise(512, 3).iter().map(|x| x.abs()).collect();
    let config = PeakConfig::new()
        .with_sample_rate(1024.0)
        .with_max_frequency(512.0);

    let (freqs, _) = spectral_peaks(&spectrum, &config).unwrap();
    assert!(!freqs.is_empty());
    for pair in freqs.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
    }
}

#[test]
fn no_amplitude_at_or_below_threshold() {
    let spectrum: Vec<f32> = crest::synth::noise(512, 11).iter().map(|x| x.abs()).collect();
    let threshold = 0.5;
    let config = PeakConfig::new()
        .with_sample_rate(1024.0)
        .with_max_frequency(512.0)
        .with_threshold(threshold);

    let (_, amps) = spectral_peaks(&spectrum, &config).unwrap();
    assert!(!amps.is_empty());
    for &a in &amps {
        assert!(a > threshold);
    }
}

#[test]
fn no_frequency_above_max_frequency() {
    let spectrum: Vec<f32> = crest::synth::noise(512, 19).iter().map(|x| x.abs()).collect();
    let config = PeakConfig::new()
        .with_sample_rate(1024.0)
        .with_max_frequency(100.0);

    let (freqs, _) = spectral_peaks(&spectrum, &config).unwrap();
    for &f in &freqs {
        assert!(f <= 100.0);
    }
}

#[test]
fn short_spectrum_is_rejected() {
    let config = PeakConfig::new();
    let result = spectral_peaks(&[1.0, 2.0], &config);
    assert!(matches!(result, Err(Error::InvalidSize { .. })));
}

#[test]
fn non_finite_spectrum_is_rejected() {
    let config = PeakConfig::new();
    let result = spectral_peaks(&[0.0, f32::NAN, 0.0], &config);
    assert!(matches!(result, Err(Error::NonFiniteSpectrum)));
}

#[test]
fn invalid_sample_rate_is_rejected() {
    let spectrum = vec![0.0, 1.0, 0.0];
    let config = PeakConfig::new().with_sample_rate(0.0);
    let result = spectral_peaks(&spectrum, &config);
    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
}

#[test]
fn negative_max_frequency_is_rejected() {
    let spectrum = vec![0.0, 1.0, 0.0];
    let config = PeakConfig::new().with_max_frequency(-1.0);
    let result = spectral_peaks(&spectrum, &config);
    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
}

#[test]
fn frames_match_single_frame_results() {
    let col_a = vec![0.0, 1.0, 5.0, 1.0, 0.0];
    let col_b = vec![0.0, 3.0, 3.0, 3.0, 0.0];

    let mut spectrogram = Array2::<f32>::zeros((5, 2));
    for bin in 0..5 {
        spectrogram[(bin, 0)] = col_a[bin];
        spectrogram[(bin, 1)] = col_b[bin];
    }

    let config = PeakConfig::new().with_sample_rate(10.0);
    let per_frame = spectral_peaks_frames(&spectrogram, &config).unwrap();

    assert_eq!(per_frame.len(), 2);
    assert_eq!(per_frame[0], spectral_peaks(&col_a, &config).unwrap());
    assert_eq!(per_frame[1], spectral_peaks(&col_b, &config).unwrap());
}

#[test]
fn frames_propagate_validation_errors() {
    let spectrogram = Array2::<f32>::zeros((2, 3));
    let config = PeakConfig::new();
    let result = spectral_peaks_frames(&spectrogram, &config);
    assert!(matches!(result, Err(Error::InvalidSize { .. })));
}
