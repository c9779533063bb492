//! Split-format complex signal storage.
//!
//! Real and imaginary components live in two separate vectors of equal
//! length, which is the layout every kernel in this crate operates on.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FftError, FftResult};
use crate::float::FftFloat;

/// One complex sample as a `{real, imag}` record
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RealImag<T> {
    pub real: T,
    pub imag: T,
}

/// One complex sample in polar form. `phase` is in degrees, in `(-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagnitudePhase<T> {
    pub magnitude: T,
    pub phase: T,
}

/// A complex signal of fixed length, stored as separate real and imaginary parts.
///
/// Both parts always have the same length: the vectors are never handed out,
/// only slices of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexBuffer<T> {
    reals: Vec<T>,
    imags: Vec<T>,
}

impl<T: FftFloat> ComplexBuffer<T> {
    /// Zero-initialized buffer of `len` samples
    pub fn new(len: usize) -> Self {
        Self {
            reals: vec![T::zero(); len],
            imags: vec![T::zero(); len],
        }
    }

    /// Real-valued signal, imaginary part zeroed
    pub fn from_reals(reals: &[T]) -> Self {
        Self {
            reals: reals.to_vec(),
            imags: vec![T::zero(); reals.len()],
        }
    }

    /// Takes ownership of both parts.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if `reals.len() != imags.len()`
    pub fn from_parts(reals: Vec<T>, imags: Vec<T>) -> FftResult<Self> {
        if reals.len() != imags.len() {
            return Err(FftError::LengthMismatch {
                reals: reals.len(),
                imags: imags.len(),
            });
        }
        Ok(Self { reals, imags })
    }

    /// Caller guarantees both parts have the same length
    #[cfg(feature = "complex-nums")]
    pub(crate) fn from_split_unchecked(reals: Vec<T>, imags: Vec<T>) -> Self {
        debug_assert_eq!(reals.len(), imags.len());
        Self { reals, imags }
    }

    /// Builds a buffer from `{real, imag}` records
    pub fn from_real_imag(samples: &[RealImag<T>]) -> Self {
        let (reals, imags) = samples.iter().map(|z| (z.real, z.imag)).unzip();
        Self { reals, imags }
    }

    pub fn len(&self) -> usize {
        self.reals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reals.is_empty()
    }

    pub fn reals(&self) -> &[T] {
        &self.reals
    }

    pub fn imags(&self) -> &[T] {
        &self.imags
    }

    /// Mutable access to both parts at once, for the kernels
    pub fn parts_mut(&mut self) -> (&mut [T], &mut [T]) {
        (&mut self.reals, &mut self.imags)
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.reals, self.imags)
    }

    /// Calls `visitor(real, imag, index, len)` for every sample in ascending order
    pub fn visit_each<F>(&self, mut visitor: F)
    where
        F: FnMut(T, T, usize, usize),
    {
        let n = self.len();
        self.reals
            .iter()
            .zip(self.imags.iter())
            .enumerate()
            .for_each(|(i, (z_re, z_im))| visitor(*z_re, *z_im, i, n));
    }

    /// In-place mapper: `mapper(&mut real, &mut imag, index, len)` for every sample in
    /// ascending order. Returns the buffer so calls can be chained.
    pub fn map_each<F>(&mut self, mut mapper: F) -> &mut Self
    where
        F: FnMut(&mut T, &mut T, usize, usize),
    {
        let n = self.len();
        self.reals
            .iter_mut()
            .zip(self.imags.iter_mut())
            .enumerate()
            .for_each(|(i, (z_re, z_im))| mapper(z_re, z_im, i, n));
        self
    }

    /// Complex conjugate as a new buffer; `self` is left untouched
    #[must_use]
    pub fn conjugate(&self) -> Self {
        let mut conjugated = self.clone();
        conjugated.map_each(|_, z_im, _, _| *z_im = -*z_im);
        conjugated
    }

    /// Magnitude and phase (degrees, quadrant-aware) of every sample
    pub fn to_magnitude_phase(&self) -> Vec<MagnitudePhase<T>> {
        let mut out = Vec::with_capacity(self.len());
        self.visit_each(|z_re, z_im, _, _| {
            out.push(MagnitudePhase {
                magnitude: z_re.hypot(z_im),
                phase: z_im.atan2(z_re).to_degrees(),
            });
        });
        out
    }

    pub fn to_real_imag(&self) -> Vec<RealImag<T>> {
        self.reals
            .iter()
            .zip(self.imags.iter())
            .map(|(z_re, z_im)| RealImag {
                real: *z_re,
                imag: *z_im,
            })
            .collect()
    }

    /// Sum of squared magnitudes
    pub fn energy(&self) -> T {
        self.reals
            .iter()
            .zip(self.imags.iter())
            .fold(T::zero(), |acc, (z_re, z_im)| {
                acc + *z_re * *z_re + *z_im * *z_im
            })
    }
}

impl<T: FftFloat> From<Vec<T>> for ComplexBuffer<T> {
    fn from(reals: Vec<T>) -> Self {
        let imags = vec![T::zero(); reals.len()];
        Self { reals, imags }
    }
}

impl<T: FftFloat> fmt::Display for ComplexBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (z_re, z_im)) in self.reals.iter().zip(self.imags.iter()).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({z_re:.2}, {z_im:.2})")?;
        }
        f.write_str("]")
    }
}
