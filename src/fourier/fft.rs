use std::f64::consts::PI;

use thiserror::Error;

use crate::fourier::complex::Complex;

/// Errors the transform functions can return.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The input length is zero or not a power of two.
    #[error("input size must be a nonzero power of two, got {len}")]
    InvalidInputSize { len: usize },
}

/// Computes the forward discrete Fourier transform of `signal` using the
/// recursive radix-2 Cooley-Tukey algorithm (decimation in time).
///
/// The input length must be a nonzero power of two; the check runs at every
/// recursion level. The input is never mutated and the output is a freshly
/// allocated vector of the same length. O(n log n) time.
pub fn forward_transform(signal: &[Complex]) -> Result<Vec<Complex>, TransformError> {
    let n = signal.len();

    // Zero length is rejected explicitly: 0 & (0 - 1) == 0 would otherwise
    // slip through the power-of-two check below.
    if n == 0 || n & (n - 1) != 0 {
        return Err(TransformError::InvalidInputSize { len: n });
    }

    // Base case: a length-1 sequence is its own transform.
    if n == 1 {
        return Ok(signal.to_vec());
    }

    // Split into even- and odd-indexed elements, preserving relative order.
    let even: Vec<Complex> = signal.iter().step_by(2).copied().collect();
    let odd: Vec<Complex> = signal.iter().skip(1).step_by(2).copied().collect();

    let even_transformed = forward_transform(&even)?;
    let odd_transformed = forward_transform(&odd)?;

    // Butterfly merge of the two half-length transforms.
    let mut output = vec![Complex::new(0.0, 0.0); n];
    for k in 0..n / 2 {
        let angle = -2.0 * PI * k as f64 / n as f64;
        let twiddle = Complex::from_polar(1.0, angle);
        let term = odd_transformed[k].multiply(twiddle);
        output[k] = even_transformed[k].add(term);
        output[k + n / 2] = even_transformed[k].subtract(term);
    }

    Ok(output)
}

/// Computes the inverse discrete Fourier transform of `spectrum`.
///
/// Uses the conjugation trick: conjugate, forward transform, conjugate
/// again, then scale each element by 1/N. The length precondition of
/// `forward_transform` applies unchanged.
pub fn inverse_transform(spectrum: &[Complex]) -> Result<Vec<Complex>, TransformError> {
    let n = spectrum.len();
    let conjugated: Vec<Complex> = spectrum.iter().map(|c| c.conjugate()).collect();
    let transformed = forward_transform(&conjugated)?;
    Ok(transformed
        .iter()
        .map(|c| c.conjugate().divide(n as f64))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex, b: Complex, tolerance: f64) {
        assert!(
            (a.re - b.re).abs() < tolerance && (a.im - b.im).abs() < tolerance,
            "expected {:?} to be within {} of {:?}",
            a,
            tolerance,
            b
        );
    }

    #[test]
    fn test_base_case_returns_input_unchanged() {
        let signal = [Complex::new(2.5, -1.25)];
        let result = forward_transform(&signal).unwrap();
        assert_eq!(result, vec![signal[0]]);
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        for len in [0usize, 3, 5, 6, 7] {
            let signal = vec![Complex::new(1.0, 0.0); len];
            assert_eq!(
                forward_transform(&signal),
                Err(TransformError::InvalidInputSize { len }),
                "length {} should be rejected",
                len
            );
        }
    }

    #[test]
    fn test_power_of_two_sizes_accepted() {
        for len in [1usize, 2, 4, 8, 16] {
            let signal = vec![Complex::new(1.0, 0.0); len];
            let result = forward_transform(&signal).unwrap();
            assert_eq!(result.len(), len);
        }
    }

    #[test]
    fn test_inverse_rejects_invalid_sizes() {
        let spectrum = vec![Complex::new(1.0, 0.0); 6];
        assert_eq!(
            inverse_transform(&spectrum),
            Err(TransformError::InvalidInputSize { len: 6 })
        );
        assert_eq!(
            inverse_transform(&[]),
            Err(TransformError::InvalidInputSize { len: 0 })
        );
    }

    #[test]
    fn test_length_preserved() {
        let signal: Vec<Complex> = (0..16).map(|i| Complex::from_real(i as f64)).collect();
        let spectrum = forward_transform(&signal).unwrap();
        assert_eq!(spectrum.len(), signal.len());
        let restored = inverse_transform(&spectrum).unwrap();
        assert_eq!(restored.len(), signal.len());
    }

    #[test]
    fn test_round_trip_recovers_signal() {
        let signal: Vec<Complex> = (0..8)
            .map(|i| Complex::new((i as f64 * 0.37).sin(), (i as f64 * 0.91).cos()))
            .collect();
        let restored = inverse_transform(&forward_transform(&signal).unwrap()).unwrap();
        for (original, recovered) in signal.iter().zip(restored.iter()) {
            assert_close(*recovered, *original, 1e-9);
        }
    }

    #[test]
    fn test_dc_signal_spectrum() {
        // A constant signal concentrates all energy in bin 0.
        let signal = vec![Complex::from_real(1.0); 4];
        let spectrum = forward_transform(&signal).unwrap();
        assert_close(spectrum[0], Complex::new(4.0, 0.0), 1e-12);
        for bin in &spectrum[1..] {
            assert!(bin.magnitude() < 1e-12);
        }
    }

    #[test]
    fn test_forward_transform_is_linear() {
        let a: Vec<Complex> = (0..8).map(|i| Complex::from_real((i as f64).sin())).collect();
        let b: Vec<Complex> = (0..8).map(|i| Complex::new(0.5 * i as f64, -0.25)).collect();
        let sum: Vec<Complex> = a.iter().zip(b.iter()).map(|(x, y)| x.add(*y)).collect();

        let spectrum_sum = forward_transform(&sum).unwrap();
        let spectrum_a = forward_transform(&a).unwrap();
        let spectrum_b = forward_transform(&b).unwrap();
        for k in 0..8 {
            assert_close(spectrum_sum[k], spectrum_a[k].add(spectrum_b[k]), 1e-9);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let signal = vec![Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)];
        let before = signal.clone();
        let _ = forward_transform(&signal).unwrap();
        assert_eq!(signal, before);
    }
}
