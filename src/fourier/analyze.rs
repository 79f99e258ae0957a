use crate::fourier::complex::Complex;
use crate::fourier::fft::{TransformError, forward_transform};

/// Computes the magnitude spectrum of a real-valued sample sequence.
///
/// The samples are promoted to complex numbers with zero imaginary part,
/// transformed, and reduced to per-bin magnitudes. The power-of-two length
/// precondition of the transform applies.
pub fn analyze_frequency(samples: &[f64]) -> Result<Vec<f64>, TransformError> {
    let complex_signal: Vec<Complex> = samples.iter().map(|&s| Complex::from_real(s)).collect();
    let spectrum = forward_transform(&complex_signal)?;
    Ok(spectrum.iter().map(|c| c.magnitude()).collect())
}

/// Returns the index of the strongest bin among the positive frequencies
/// (bins 0..=N/2), or `None` for an empty spectrum.
pub fn dominant_bin(magnitudes: &[f64]) -> Option<usize> {
    if magnitudes.is_empty() {
        return None;
    }
    let half = magnitudes.len() / 2;
    let mut best_bin = 0;
    let mut best_magnitude = magnitudes[0];
    for (bin, &magnitude) in magnitudes.iter().enumerate().take(half + 1) {
        if magnitude > best_magnitude {
            best_magnitude = magnitude;
            best_bin = bin;
        }
    }
    Some(best_bin)
}
