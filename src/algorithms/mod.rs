//! FFT Algorithm Implementations
//!
//! ## Available Algorithms
//!
//! - **Radix-2**: iterative Decimation-in-Time for power-of-two lengths. The input is
//!   permuted into bit-reversed order, then `log2(N)` butterfly passes produce the
//!   spectrum in natural order.
//!
//! - **Mixed radix**: recursive decomposition by the lowest odd factor, for every
//!   other length. Sub-transforms go back through [`crate::transform`], so they use
//!   radix-2 as soon as the sub-length is a power of two.
//!
//! Both algorithms work in place and scale by `1/sqrt(N)`.

pub mod bit_reverse;
pub mod mixed_radix;
pub mod radix2;
