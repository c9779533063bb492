//! The planner decides, per length, which algorithm a transform runs with.
//! Powers of two go through the iterative radix-2 kernel; every other length is
//! split by its lowest odd factor and handled by the recursive mixed-radix
//! decomposition, which consults the planner again for each sub-length.
use crate::float::FftFloat;

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Twiddle factors rotate by `+theta`
    Forward = 1,
    /// Twiddle factors rotate by `-theta`
    Reverse = -1,
}

impl Direction {
    /// `1` for forward, `-1` for reverse
    #[inline]
    pub fn sign<T: FftFloat>(self) -> T {
        match self {
            Direction::Forward => T::one(),
            Direction::Reverse => -T::one(),
        }
    }

    /// The direction that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Algorithm chosen for one transform call
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Iterative bit-reversal + butterfly passes, length is a power of two (or 0)
    Radix2,
    /// Split into `factor` interleaved sub-sequences of length `len / factor`
    MixedRadix {
        /// Radix used at this level
        factor: usize,
    },
}

impl Strategy {
    /// Picks the strategy for a buffer of `len` samples
    pub fn for_len(len: usize) -> Self {
        if len <= 1 || len.is_power_of_two() {
            Strategy::Radix2
        } else {
            Strategy::MixedRadix {
                factor: lowest_odd_factor(len),
            }
        }
    }
}

/// Smallest odd factor `>= 3` of `n`, or `n` itself when there is none.
///
/// Only consulted for lengths that are not powers of two, so the fallback
/// covers primes and `2^k * prime` style lengths whose odd part is prime.
pub fn lowest_odd_factor(n: usize) -> usize {
    let mut factor = 3;
    while factor <= n / factor {
        if n % factor == 0 {
            return factor;
        }
        factor += 2;
    }
    n
}

/// Radices the recursive decomposition walks through for `len`, outermost
/// first. A trailing power-of-two sub-length is reported as one entry.
pub fn decomposition(len: usize) -> Vec<usize> {
    let mut radices = Vec::new();
    let mut remaining = len;
    while let Strategy::MixedRadix { factor } = Strategy::for_len(remaining) {
        radices.push(factor);
        remaining /= factor;
    }
    if remaining > 1 {
        radices.push(remaining);
    }
    radices
}
