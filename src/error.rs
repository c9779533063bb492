//! Errors surfaced by buffer construction and the transform kernels

use thiserror::Error;

/// Result alias used throughout the crate
pub type FftResult<T> = Result<T, FftError>;

/// Precondition violations detected before any computation starts.
///
/// Numeric issues (`NaN`, `inf`) are never reported here, they propagate
/// through the arithmetic like any other IEEE value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FftError {
    /// The real and imaginary parts of a signal have different lengths
    #[error("length mismatch: {reals} real components vs {imags} imaginary components")]
    LengthMismatch { reals: usize, imags: usize },
    /// The radix-2 kernel only accepts power-of-two lengths
    #[error("radix-2 transform requires a power-of-two length, got {len}")]
    NotPowerOfTwo { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_lengths() {
        let err = FftError::LengthMismatch { reals: 4, imags: 3 };
        assert_eq!(
            err.to_string(),
            "length mismatch: 4 real components vs 3 imaginary components"
        );

        let err = FftError::NotPowerOfTwo { len: 6 };
        assert!(err.to_string().contains("got 6"));
    }
}
