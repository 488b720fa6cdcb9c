//! Core types for streaming DSP blocks
//!
//! Samples flowing between blocks are either real scalars or complex I/Q
//! pairs. Complex arithmetic comes from `num_complex`; this module only pins
//! the precision used across the crate and defines the (small) error surface.
//!
//! ## Understanding I/Q Samples
//!
//! A complex sample `(re, im)` carries one point of a baseband signal:
//! the real part is the in-phase component, the imaginary part the
//! quadrature component. Both amplitude and phase of the carrier are
//! recoverable from the pair, which is why every block in this crate that
//! touches RF data works on `Complex` values.

use num_complex::Complex;

/// A real-valued sample.
pub type Sample = f64;

/// A complex I/Q sample at the crate's default precision.
pub type IQSample = Complex<f64>;

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur when constructing DSP blocks.
///
/// Steady-state `step` operations never fail: insufficient data or space is
/// backpressure, not an error, and the block simply processes zero elements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DspError {
    #[error("FFT size must be a power of two, got {0}")]
    NonPowerOfTwoFft(usize),
}
