//! Format/Scale Converter — complex stream representation changes
//!
//! Remaps complex samples between numeric representations with an affine
//! map applied independently to the real and imaginary components:
//!
//! ```text
//! out = zero_out + (in - zero_in) * gain_num / gain_den
//! ```
//!
//! The classic use is hardware interfacing: unsigned 8-bit ADC codes
//! centered at 128 become floating-point amplitudes centered at 0. The gain
//! is a rational pair rather than a single factor so integer output types
//! keep precision (multiply happens before divide).
//!
//! ## Example
//!
//! ```rust
//! use iqflow::converter::{ConverterConfig, IqConverter};
//! use iqflow::stream::StreamBuffer;
//! use iqflow::block::Block;
//! use num_complex::Complex;
//!
//! let (mut adc_tx, adc_rx) = StreamBuffer::<Complex<u8>>::new(16, "adc");
//! let (bb_tx, bb_rx) = StreamBuffer::<Complex<f64>>::new(16, "baseband");
//!
//! adc_tx.write_view()[0] = Complex::new(192u8, 64u8);
//! adc_tx.written(1);
//!
//! let cfg = ConverterConfig { zero_in: 128.0, zero_out: 0.0, gain_num: 1.0, gain_den: 128.0 };
//! let mut conv = IqConverter::new(adc_rx, bb_tx, cfg);
//! conv.step();
//!
//! let out = bb_rx.read_view()[0];
//! assert!((out.re - 0.5).abs() < 1e-12);
//! assert!((out.im + 0.5).abs() < 1e-12);
//! ```

use num_complex::Complex;
use num_traits::{AsPrimitive, Num};
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::stream::{StreamReader, StreamWriter};

/// Affine remapping parameters, all in the output scalar domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig<T> {
    /// Zero offset of the input representation.
    pub zero_in: T,
    /// Zero offset of the output representation.
    pub zero_out: T,
    /// Gain numerator.
    pub gain_num: T,
    /// Gain denominator.
    pub gain_den: T,
}

/// Elementwise converter between two complex sample representations.
pub struct IqConverter<Tin, Tout> {
    input: StreamReader<Complex<Tin>>,
    output: StreamWriter<Complex<Tout>>,
    config: ConverterConfig<Tout>,
}

impl<Tin, Tout> IqConverter<Tin, Tout>
where
    Tin: Copy + Default + AsPrimitive<Tout>,
    Tout: Copy + Default + Num + 'static,
{
    /// Create a converter between the two connected buffers. The config is
    /// fixed for the lifetime of the block.
    pub fn new(
        input: StreamReader<Complex<Tin>>,
        output: StreamWriter<Complex<Tout>>,
        config: ConverterConfig<Tout>,
    ) -> Self {
        Self { input, output, config }
    }

    /// Current configuration.
    pub fn config(&self) -> &ConverterConfig<Tout> {
        &self.config
    }
}

impl<Tin, Tout> Block for IqConverter<Tin, Tout>
where
    Tin: Copy + Default + AsPrimitive<Tout>,
    Tout: Copy + Default + Num + 'static,
{
    fn step(&mut self) {
        let count = self.input.readable().min(self.output.writable());
        if count == 0 {
            return;
        }
        let cfg = self.config;
        let remap =
            |x: Tin| cfg.zero_out + (x.as_() - cfg.zero_in) * cfg.gain_num / cfg.gain_den;
        {
            let src = self.input.read_view();
            let mut dst = self.output.write_view();
            for i in 0..count {
                dst[i] = Complex::new(remap(src[i].re), remap(src[i].im));
            }
        }
        self.input.read(count);
        self.output.written(count);
    }

    fn name(&self) -> &str {
        "converter"
    }
}
