//! Boxcar Low-Pass Filter — fixed-window moving average block
//!
//! Smooths a stream with an unweighted window of width `w`: output `i` is
//! the mean of the `w` input samples starting at offset `i` from the read
//! cursor. Works on real and complex streams alike.
//!
//! The window looks *ahead* of the read cursor, not behind it, so the block
//! refuses to emit until a full window is visible and it advances the read
//! cursor only by the number of outputs produced. The trailing `w` samples
//! stay in the buffer as the lookback for the next step. Downstream
//! alignment is calibrated against this forward window; do not convert it to
//! the causal form without checking consumers.
//!
//! ## Example
//!
//! ```rust
//! use iqflow::boxcar::BoxcarFilter;
//! use iqflow::stream::StreamBuffer;
//! use iqflow::block::Block;
//!
//! let (mut tx, rx) = StreamBuffer::<f64>::new(16, "raw");
//! let (out_tx, out_rx) = StreamBuffer::<f64>::new(16, "smooth");
//! tx.write_view()[..6].copy_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! tx.written(6);
//!
//! let mut filt = BoxcarFilter::new(rx, out_tx, 3);
//! filt.step();
//! assert_eq!(&out_rx.read_view()[..], &[2.0, 3.0, 4.0]);
//! ```

use std::ops::{Add, Mul};

use crate::block::Block;
use crate::stream::{StreamReader, StreamWriter};

/// Moving-average smoother with a forward-looking window.
pub struct BoxcarFilter<T> {
    input: StreamReader<T>,
    output: StreamWriter<T>,
    window: usize,
}

impl<T> BoxcarFilter<T>
where
    T: Copy + Default + Add<Output = T> + Mul<f64, Output = T>,
{
    /// Create a filter with the given window width. Width is clamped to at
    /// least 1 and fixed for the lifetime of the block.
    pub fn new(input: StreamReader<T>, output: StreamWriter<T>, window: usize) -> Self {
        Self {
            input,
            output,
            window: window.max(1),
        }
    }

    /// Window width.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl<T> Block for BoxcarFilter<T>
where
    T: Copy + Default + Add<Output = T> + Mul<f64, Output = T>,
{
    fn step(&mut self) {
        let readable = self.input.readable();
        // A full window ahead of the read cursor is a hard precondition.
        if readable < self.window {
            return;
        }
        let count = (readable - self.window).min(self.output.writable());
        if count == 0 {
            return;
        }
        let w = self.window;
        let k = 1.0 / w as f64;
        {
            let src = self.input.read_view();
            let mut dst = self.output.write_view();
            for i in 0..count {
                let mut acc = T::default();
                for x in &src[i..i + w] {
                    acc = acc + *x;
                }
                dst[i] = acc * k;
            }
        }
        // Advance by the output count only; the trailing window stays
        // visible for the next step.
        self.input.read(count);
        self.output.written(count);
    }

    fn name(&self) -> &str {
        "boxcar"
    }
}
