//! Stream Adder — element-wise sum of two synchronized streams
//!
//! Consumes its two inputs in lock-step: every step processes
//! `min(writable, readable1, readable2)` elements and advances all three
//! cursors by exactly that count, so sample-index alignment between the
//! inputs is preserved forever. If either input is empty or the output is
//! full, the step produces nothing and the scheduler retries later.
//!
//! Works on any sample type with `+`, so the same block sums real streams
//! and complex streams.
//!
//! ## Example
//!
//! ```rust
//! use iqflow::adder::Adder;
//! use iqflow::stream::StreamBuffer;
//! use iqflow::block::Block;
//!
//! let (mut a_tx, a_rx) = StreamBuffer::<f64>::new(8, "a");
//! let (mut b_tx, b_rx) = StreamBuffer::<f64>::new(8, "b");
//! let (sum_tx, sum_rx) = StreamBuffer::<f64>::new(8, "sum");
//!
//! a_tx.write_view()[..3].copy_from_slice(&[1.0, 2.0, 3.0]);
//! a_tx.written(3);
//! b_tx.write_view()[..2].copy_from_slice(&[10.0, 20.0]);
//! b_tx.written(2);
//!
//! let mut adder = Adder::new(a_rx, b_rx, sum_tx);
//! adder.step();
//!
//! // Only two pairs were available; the third element of `a` waits.
//! assert_eq!(&sum_rx.read_view()[..], &[11.0, 22.0]);
//! ```

use std::ops::Add;

use crate::block::Block;
use crate::stream::{StreamReader, StreamWriter};

/// Lock-step element-wise adder over two input streams.
pub struct Adder<T> {
    in1: StreamReader<T>,
    in2: StreamReader<T>,
    output: StreamWriter<T>,
}

impl<T> Adder<T>
where
    T: Copy + Default + Add<Output = T>,
{
    pub fn new(in1: StreamReader<T>, in2: StreamReader<T>, output: StreamWriter<T>) -> Self {
        Self { in1, in2, output }
    }
}

impl<T> Block for Adder<T>
where
    T: Copy + Default + Add<Output = T>,
{
    fn step(&mut self) {
        let count = self
            .output
            .writable()
            .min(self.in1.readable())
            .min(self.in2.readable());
        if count == 0 {
            return;
        }
        {
            let a = self.in1.read_view();
            let b = self.in2.read_view();
            let mut out = self.output.write_view();
            for i in 0..count {
                out[i] = a[i] + b[i];
            }
        }
        self.in1.read(count);
        self.in2.read(count);
        self.output.written(count);
    }

    fn name(&self) -> &str {
        "adder"
    }
}
