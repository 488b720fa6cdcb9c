//! FFT Engine — fixed-size in-place radix-2 complex transform
//!
//! A table-driven Cooley-Tukey FFT built once for a given power-of-two size
//! and reused across arbitrarily many transforms. Construction precomputes
//! the bit-reversal permutation and both twiddle tables; the transform
//! itself allocates nothing and needs no working memory beyond the caller's
//! sample array, which is what lets it run in the hot path of a streaming
//! pipeline.
//!
//! Unlike the stream blocks, the engine is not buffer-connected: the caller
//! owns a full block of `n` samples and hands it in directly.
//!
//! ## Normalization
//!
//! Every output sample is scaled by `1/n` in **both** directions, so a
//! forward/inverse pair attenuates by `1/n²`. This differs from the common
//! inverse-only convention; downstream consumers are calibrated against it,
//! so it must not be changed.
//!
//! ## Example
//!
//! ```rust
//! use iqflow::fft::{Direction, FftEngine};
//! use num_complex::Complex;
//!
//! let engine = FftEngine::<f64>::new(8).unwrap();
//! let mut data = vec![Complex::new(0.0, 0.0); 8];
//! data[0] = Complex::new(1.0, 0.0); // unit impulse
//! engine.process_inplace(&mut data, Direction::Forward);
//! // Flat spectrum at 1/n per bin.
//! for bin in &data {
//!     assert!((bin.re - 0.125).abs() < 1e-12);
//!     assert!(bin.im.abs() < 1e-12);
//! }
//! ```

use std::fmt;

use num_complex::Complex;
use num_traits::{Float, FloatConst};

use crate::types::{DspError, DspResult};

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Fixed-size FFT engine with precomputed tables.
///
/// Immutable after construction; holds no per-call state.
pub struct FftEngine<T> {
    n: usize,
    logn: u32,
    bitrev: Vec<usize>,
    omega: Vec<Complex<T>>,
    omega_inv: Vec<Complex<T>>,
}

impl<T> fmt::Debug for FftEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftEngine").field("n", &self.n).finish()
    }
}

impl<T: Float + FloatConst> FftEngine<T> {
    /// Build an engine for transforms of length `n`.
    ///
    /// `n` must be a power of two; anything else (including 0) is rejected.
    pub fn new(n: usize) -> DspResult<Self> {
        if n == 0 || !n.is_power_of_two() {
            return Err(DspError::NonPowerOfTwoFft(n));
        }
        let logn = n.trailing_zeros();

        let bitrev = (0..n)
            .map(|i| {
                let mut r = 0usize;
                for b in 0..logn {
                    r = (r << 1) | ((i >> b) & 1);
                }
                r
            })
            .collect();

        let mut omega = Vec::with_capacity(n);
        let mut omega_inv = Vec::with_capacity(n);
        let two = T::one() + T::one();
        for k in 0..n {
            let a = two * T::PI() * T::from(k).unwrap() / T::from(n).unwrap();
            let w = Complex::new(a.cos(), a.sin());
            omega.push(w);
            omega_inv.push(w.conj());
        }

        tracing::debug!(n, "built FFT engine");
        Ok(Self { n, logn, bitrev, omega, omega_inv })
    }

    /// Transform length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Transform `data` in place.
    ///
    /// `data.len()` must equal the engine size.
    pub fn process_inplace(&self, data: &mut [Complex<T>], direction: Direction) {
        assert_eq!(data.len(), self.n, "FFT input length mismatch");

        // Bit-reversal permutation. Swapping only when bitrev[i] < i touches
        // each pair exactly once.
        for i in 0..self.n {
            let r = self.bitrev[i];
            if r < i {
                data.swap(i, r);
            }
        }

        let om = match direction {
            Direction::Forward => &self.omega,
            Direction::Inverse => &self.omega_inv,
        };

        // Danielson-Lanczos stages. Stage s combines pairs of half-groups of
        // size 2^s, with twiddle stride 2^(logn-1-s) into the table.
        for s in 0..self.logn {
            let half = 1usize << s;
            let stride = 1usize << (self.logn - 1 - s);
            for j in 0..stride {
                let p = j * half * 2;
                let q = p + half;
                for k in 0..half {
                    let w = om[k * stride];
                    let x = w * data[q + k];
                    data[q + k] = data[p + k] - x;
                    data[p + k] = data[p + k] + x;
                }
            }
        }

        // Both directions scale by 1/n. A forward/inverse pair therefore
        // comes back attenuated by 1/n²; callers are written against this.
        let invn = T::one() / T::from(self.n).unwrap();
        for v in data.iter_mut() {
            *v = *v * invn;
        }
    }

    /// Forward transform, in place.
    pub fn forward(&self, data: &mut [Complex<T>]) {
        self.process_inplace(data, Direction::Forward);
    }

    /// Inverse transform, in place.
    pub fn inverse(&self, data: &mut [Complex<T>]) {
        self.process_inplace(data, Direction::Inverse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert!(matches!(
            FftEngine::<f64>::new(0),
            Err(DspError::NonPowerOfTwoFft(0))
        ));
        assert!(FftEngine::<f64>::new(12).is_err());
        assert!(FftEngine::<f64>::new(1000).is_err());
        assert!(FftEngine::<f64>::new(1024).is_ok());
        assert!(FftEngine::<f64>::new(1).is_ok());
    }

    #[test]
    fn impulse_gives_flat_spectrum_at_one_over_n() {
        for logn in 1..=6 {
            let n = 1usize << logn;
            let engine = FftEngine::<f64>::new(n).unwrap();
            let mut data = vec![Complex::new(0.0, 0.0); n];
            data[0] = Complex::new(1.0, 0.0);
            engine.forward(&mut data);
            for bin in &data {
                assert!(close(*bin, Complex::new(1.0 / n as f64, 0.0)), "n={}", n);
            }
        }
    }

    #[test]
    fn constant_input_concentrates_in_bin_zero() {
        let n = 16;
        let engine = FftEngine::<f64>::new(n).unwrap();
        let mut data = vec![Complex::new(1.0, 0.0); n];
        engine.forward(&mut data);
        // Sum of n ones, scaled by 1/n.
        assert!(close(data[0], Complex::new(1.0, 0.0)));
        for bin in &data[1..] {
            assert!(close(*bin, Complex::new(0.0, 0.0)));
        }
    }

    #[test]
    fn round_trip_attenuates_by_n_squared() {
        let n = 64;
        let engine = FftEngine::<f64>::new(n).unwrap();
        let original: Vec<Complex<f64>> = (0..n)
            .map(|i| {
                let t = i as f64 * 0.37;
                Complex::new(t.sin() + 0.25, (t * 1.7).cos())
            })
            .collect();
        let mut data = original.clone();
        engine.forward(&mut data);
        engine.inverse(&mut data);
        let k = 1.0 / (n as f64 * n as f64);
        for (got, want) in data.iter().zip(&original) {
            assert!(close(*got, *want * k));
        }
    }

    #[test]
    fn transform_is_linear() {
        let n = 32;
        let engine = FftEngine::<f64>::new(n).unwrap();
        let a: Vec<Complex<f64>> =
            (0..n).map(|i| Complex::new(i as f64, -(i as f64) * 0.5)).collect();
        let b: Vec<Complex<f64>> =
            (0..n).map(|i| Complex::new((i as f64 * 0.9).sin(), 1.0)).collect();

        let mut sum: Vec<Complex<f64>> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
        engine.forward(&mut sum);

        let mut fa = a.clone();
        let mut fb = b.clone();
        engine.forward(&mut fa);
        engine.forward(&mut fb);
        for i in 0..n {
            assert!(close(sum[i], fa[i] + fb[i]));
        }
    }

    #[test]
    fn engine_is_reusable_across_calls() {
        let n = 8;
        let engine = FftEngine::<f64>::new(n).unwrap();
        let mut first = vec![Complex::new(1.0, 0.0); n];
        let mut second = vec![Complex::new(1.0, 0.0); n];
        engine.forward(&mut first);
        engine.forward(&mut second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn wrong_length_panics() {
        let engine = FftEngine::<f64>::new(8).unwrap();
        let mut data = vec![Complex::new(0.0, 0.0); 4];
        engine.forward(&mut data);
    }

    #[test]
    fn size_one_is_identity_times_one() {
        let engine = FftEngine::<f64>::new(1).unwrap();
        let mut data = vec![Complex::new(3.0, -2.0)];
        engine.forward(&mut data);
        assert!(close(data[0], Complex::new(3.0, -2.0)));
    }
}
