//! Utility functions to move between interleaved [`Complex`] slices and split real/imaginary parts

use bytemuck::{cast_slice, Pod};
use num_complex::Complex;

use crate::buffer::ComplexBuffer;
use crate::float::FftFloat;

/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])` for any length
fn deinterleave<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
    input.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Separates a slice of [`Complex`] into its real and imaginary parts
pub(crate) fn deinterleave_complex<T: Pod>(signal: &[Complex<T>]) -> (Vec<T>, Vec<T>) {
    let complex_t: &[T] = cast_slice(signal);
    deinterleave(complex_t)
}

/// Combines separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
pub(crate) fn combine_re_im<T: Copy>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    debug_assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}

impl<T: FftFloat + Pod> ComplexBuffer<T> {
    /// Copies an interleaved complex signal into split storage
    pub fn from_complex(signal: &[Complex<T>]) -> Self {
        let (reals, imags) = deinterleave_complex(signal);
        Self::from_split_unchecked(reals, imags)
    }

    /// Interleaved copy of the signal
    pub fn to_complex(&self) -> Vec<Complex<T>> {
        combine_re_im(self.reals(), self.imags())
    }
}
