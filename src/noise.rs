//! White Gaussian Noise Source — complex AWGN generator block
//!
//! Produces a stream of complex samples whose real and imaginary parts are
//! independent zero-mean Gaussian variables with a configurable standard
//! deviation. This is the additive-white-Gaussian-noise term of a channel
//! simulation: sum it with a clean signal to set the SNR of a test link.
//!
//! Each step fills however much space the output buffer currently has; the
//! generator itself is unbounded. The standard deviation may be changed at
//! any time between steps and takes effect on the next sample.
//!
//! Deviates come from the Marsaglia polar method: draw `(x, y)` uniform in
//! the unit square, reject pairs outside the open unit disc (or at the
//! origin), then one accepted pair yields the two components of one output
//! sample. The uniform source is a self-contained xoshiro256** generator,
//! deterministic per seed.
//!
//! ## Example
//!
//! ```rust
//! use iqflow::noise::WhiteNoiseSource;
//! use iqflow::stream::StreamBuffer;
//! use iqflow::block::Block;
//!
//! let (tx, rx) = StreamBuffer::new(1024, "noise");
//! let mut src = WhiteNoiseSource::new(tx, 0.5, 42);
//! src.step();
//! assert_eq!(rx.readable(), 1024);
//! ```

use crate::block::Block;
use crate::stream::StreamWriter;
use crate::types::IQSample;

/// xoshiro256** PRNG state.
struct Xoshiro256 {
    s: [u64; 4],
}

impl Xoshiro256 {
    fn seeded(seed: u64) -> Self {
        let mut s = [0u64; 4];
        s[0] = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        s[1] = s[0].wrapping_mul(6364136223846793005).wrapping_add(1);
        s[2] = s[1].wrapping_mul(6364136223846793005).wrapping_add(1);
        s[3] = s[2].wrapping_mul(6364136223846793005).wrapping_add(1);
        Self { s }
    }

    /// Uniform random [0, 1).
    fn next_uniform(&mut self) -> f64 {
        let s = &mut self.s;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
        (result >> 11) as f64 / (1u64 << 53) as f64
    }

    /// One complex Gaussian sample via the polar (Marsaglia) transform.
    /// The rejection loop accepts a bit over 78% of draws; degenerate draws
    /// are simply redrawn and never surface.
    fn next_gaussian_pair(&mut self, stddev: f64) -> IQSample {
        loop {
            let x = 2.0 * self.next_uniform() - 1.0;
            let y = 2.0 * self.next_uniform() - 1.0;
            let r2 = x * x + y * y;
            if r2 == 0.0 || r2 >= 1.0 {
                continue;
            }
            let k = (-2.0 * r2.ln() / r2).sqrt() * stddev;
            return IQSample::new(k * x, k * y);
        }
    }
}

/// Complex white Gaussian noise generator block.
pub struct WhiteNoiseSource {
    output: StreamWriter<IQSample>,
    stddev: f64,
    rng: Xoshiro256,
}

impl WhiteNoiseSource {
    /// Create a source writing into `output` with the given standard
    /// deviation and PRNG seed.
    pub fn new(output: StreamWriter<IQSample>, stddev: f64, seed: u64) -> Self {
        Self {
            output,
            stddev,
            rng: Xoshiro256::seeded(seed),
        }
    }

    /// Set the standard deviation; applies from the next generated sample.
    pub fn set_stddev(&mut self, stddev: f64) {
        self.stddev = stddev.max(0.0);
    }

    /// Current standard deviation.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

impl Block for WhiteNoiseSource {
    fn step(&mut self) {
        let count = self.output.writable();
        if count == 0 {
            return;
        }
        let stddev = self.stddev;
        let rng = &mut self.rng;
        {
            let mut view = self.output.write_view();
            for slot in view[..count].iter_mut() {
                *slot = rng.next_gaussian_pair(stddev);
            }
        }
        self.output.written(count);
    }

    fn name(&self) -> &str {
        "noise"
    }
}
