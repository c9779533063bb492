//! Floating point types the transforms are generic over

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Sample type accepted by [`ComplexBuffer`](crate::ComplexBuffer).
///
/// Implemented for `f32` and `f64`.
pub trait FftFloat: Float + FloatConst + Debug + Display + Default + Send + Sync + 'static {
    /// Lossy conversion of a length or index into the sample type
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_fft_float_for {
    ($precision:ty) => {
        impl FftFloat for $precision {
            #[inline]
            fn from_usize(n: usize) -> Self {
                n as $precision
            }
        }
    };
}

impl_fft_float_for!(f32);
impl_fft_float_for!(f64);
