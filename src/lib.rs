//! # iqflow — Streaming DSP building blocks
//!
//! Core computational blocks for a real-time radio pipeline: a format/scale
//! converter for complex samples, a fixed-size in-place FFT engine, a stream
//! adder, a complex Gaussian noise source, and a boxcar moving-average
//! filter.
//!
//! ## Overview
//!
//! A pipeline is a directed graph of blocks connected by single-producer/
//! single-consumer [stream buffers](stream). An external driver loop calls
//! each block's [`step`](block::Block::step) repeatedly; every call is
//! non-blocking and processes exactly as much as current buffer occupancy
//! allows, possibly nothing. Backpressure is expressed entirely through the
//! readable/writable capacity queries, never by waiting. Everything runs on
//! one thread, cooperatively.
//!
//! The FFT engine is the one exception to the buffer discipline: it is
//! called directly with a caller-owned block of samples, and exists to be
//! built once and invoked at high rate with zero per-call allocation.
//!
//! ## Signal Flow
//!
//! ```text
//!  ┌─────────┐   u8 I/Q    ┌───────────┐   f64 I/Q   ┌───────┐
//!  │ source  ├────────────▶│ converter ├────────────▶│       │
//!  └─────────┘             └───────────┘             │ adder ├──▶ ...
//!  ┌─────────┐          f64 I/Q (AWGN)               │       │
//!  │  noise  ├───────────────────────────────────────▶       │
//!  └─────────┘                                       └───────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use iqflow::prelude::*;
//!
//! // Noise source feeding a 4-tap boxcar smoother.
//! let (noise_tx, noise_rx) = StreamBuffer::new(256, "noise");
//! let (smooth_tx, smooth_rx) = StreamBuffer::new(256, "smooth");
//!
//! let mut source = WhiteNoiseSource::new(noise_tx, 1.0, 42);
//! let mut filter = BoxcarFilter::<IQSample>::new(noise_rx, smooth_tx, 4);
//!
//! // One scheduler pass.
//! source.step();
//! filter.step();
//! assert!(smooth_rx.readable() > 0);
//! ```

pub mod adder;
pub mod block;
pub mod boxcar;
pub mod converter;
pub mod fft;
pub mod noise;
pub mod stream;
pub mod types;

pub mod prelude {
    pub use crate::adder::Adder;
    pub use crate::block::Block;
    pub use crate::boxcar::BoxcarFilter;
    pub use crate::converter::{ConverterConfig, IqConverter};
    pub use crate::fft::{Direction, FftEngine};
    pub use crate::noise::WhiteNoiseSource;
    pub use crate::stream::{StreamBuffer, StreamReader, StreamWriter};
    pub use crate::types::{DspError, DspResult, IQSample, Sample};
}
