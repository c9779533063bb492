//! Unitary FFT of arbitrary length.
//!
//! Power-of-two lengths run through an iterative radix-2 kernel. Every other length,
//! primes included, is decomposed recursively by its lowest odd factor until the
//! sub-lengths are powers of two (or 1).
//!
//! Both directions scale by `1/sqrt(N)`, so `ifft(fft(x)) == x` up to rounding and
//! the energy of the signal is the same in both domains. The forward transform uses
//! the kernel `exp(+2 pi i jk / N)`, the inverse `exp(-2 pi i jk / N)`.
//!
//! All transforms work in place on a [`ComplexBuffer`] and hand the same buffer back,
//! so calls chain:
//!
//! ```
//! use mixradix::ComplexBuffer;
//!
//! let mut signal = ComplexBuffer::from_reals(&[1.0f64, 1.0, 1.0, 1.0]);
//! let spectrum = signal.fft().to_magnitude_phase();
//! assert!((spectrum[0].magnitude - 2.0).abs() < 1e-12);
//! ```

use log::trace;

pub use crate::buffer::{ComplexBuffer, MagnitudePhase, RealImag};
pub use crate::error::{FftError, FftResult};
pub use crate::float::FftFloat;
pub use crate::options::{BitReverseAlgorithm, Options};
pub use crate::planner::{Direction, Strategy};

pub mod algorithms;
mod buffer;
mod error;
mod float;
pub mod options;
mod parallel;
pub mod planner;
mod twiddles;
#[cfg(feature = "complex-nums")]
mod utils;

/// Transforms `buffer` in place, picking radix-2 or mixed radix from its length.
///
/// The mixed-radix path calls back into this function for each of its sub-sequences.
pub fn transform<'a, T: FftFloat>(
    buffer: &'a mut ComplexBuffer<T>,
    direction: Direction,
    opts: &Options,
) -> &'a mut ComplexBuffer<T> {
    let strategy = Strategy::for_len(buffer.len());
    trace!(
        "transform: len={} direction={direction:?} strategy={strategy:?}",
        buffer.len()
    );

    match strategy {
        Strategy::Radix2 => {
            let (reals, imags) = buffer.parts_mut();
            algorithms::radix2::process(reals, imags, direction, opts);
        }
        Strategy::MixedRadix { factor } => {
            algorithms::mixed_radix::process(buffer, factor, direction, opts);
        }
    }
    buffer
}

/// Forward FFT with options guessed from the length
pub fn fft<T: FftFloat>(buffer: &mut ComplexBuffer<T>) -> &mut ComplexBuffer<T> {
    let opts = Options::guess_options(buffer.len());
    transform(buffer, Direction::Forward, &opts)
}

/// Inverse FFT with options guessed from the length
pub fn ifft<T: FftFloat>(buffer: &mut ComplexBuffer<T>) -> &mut ComplexBuffer<T> {
    let opts = Options::guess_options(buffer.len());
    transform(buffer, Direction::Reverse, &opts)
}

impl<T: FftFloat> ComplexBuffer<T> {
    /// Forward FFT in place
    pub fn fft(&mut self) -> &mut Self {
        fft(self)
    }

    /// Inverse FFT in place
    pub fn ifft(&mut self) -> &mut Self {
        ifft(self)
    }

    pub fn fft_with_opts(&mut self, opts: &Options) -> &mut Self {
        transform(self, Direction::Forward, opts)
    }

    pub fn ifft_with_opts(&mut self, opts: &Options) -> &mut Self {
        transform(self, Direction::Reverse, opts)
    }

    /// Applies a frequency-domain filter and returns the filtered signal.
    ///
    /// The buffer is transformed forward, `filter(&mut real, &mut imag, bin, len)` runs on
    /// every bin, and the result is transformed back.
    pub fn frequency_map<F>(&mut self, filter: F) -> &mut Self
    where
        F: FnMut(&mut T, &mut T, usize, usize),
    {
        let opts = Options::guess_options(self.len());
        self.frequency_map_with_opts(&opts, filter)
    }

    pub fn frequency_map_with_opts<F>(&mut self, opts: &Options, filter: F) -> &mut Self
    where
        F: FnMut(&mut T, &mut T, usize, usize),
    {
        self.fft_with_opts(opts)
            .map_each(filter)
            .ifft_with_opts(opts)
    }
}
