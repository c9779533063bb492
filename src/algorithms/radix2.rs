//! Iterative radix-2 Decimation-in-Time FFT
//!
//! 1. Reorder the input into bit-reversed order
//! 2. Run `log2(N)` butterfly passes, block width `1, 2, 4, ..., N/2`
//!
//! Every butterfly scales both of its outputs by `1/sqrt(2)`, so after all passes
//! the signal is scaled by `1/sqrt(N)`. Forward and reverse transforms therefore
//! share the same normalization and only differ in the sign of the rotation.
use crate::algorithms::bit_reverse::bit_reverse_permutation;
use crate::error::{FftError, FftResult};
use crate::float::FftFloat;
use crate::options::Options;
use crate::planner::Direction;
use crate::twiddles::Twiddles;

/// Radix-2 FFT over split real/imaginary parts, in place.
///
/// Lengths 0 and 1 are left as they are.
///
/// # Errors
///
/// [`FftError::LengthMismatch`] if the parts differ in length,
/// [`FftError::NotPowerOfTwo`] if the length is not a power of two.
pub fn fft<T: FftFloat>(
    reals: &mut [T],
    imags: &mut [T],
    direction: Direction,
    opts: &Options,
) -> FftResult<()> {
    if reals.len() != imags.len() {
        return Err(FftError::LengthMismatch {
            reals: reals.len(),
            imags: imags.len(),
        });
    }

    let n = reals.len();
    if n > 1 && !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo { len: n });
    }

    process(reals, imags, direction, opts);
    Ok(())
}

/// The kernel behind [`fft`], for callers that already know the length is valid
pub(crate) fn process<T: FftFloat>(
    reals: &mut [T],
    imags: &mut [T],
    direction: Direction,
    opts: &Options,
) {
    let n = reals.len();
    debug_assert_eq!(n, imags.len());
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());

    bit_reverse_permutation(reals, imags, opts.bit_reverse);

    let mut width = 1;
    while width < n {
        butterfly_pass(reals, imags, width, direction);
        width <<= 1;
    }
}

/// One pass of scaled butterflies over blocks of `2 * width` samples.
///
/// Within a block, sample `j` pairs with sample `j + width`, and the right-hand
/// sample is rotated by the `j`-th power of `exp(+-i pi / width)` first.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
fn butterfly_pass<T: FftFloat>(
    reals: &mut [T],
    imags: &mut [T],
    width: usize,
    direction: Direction,
) {
    let chunk_size = width << 1;
    let scale = T::FRAC_1_SQRT_2();
    let rotation = Twiddles::<T>::for_butterfly_width(width, direction);

    reals
        .chunks_exact_mut(chunk_size)
        .zip(imags.chunks_exact_mut(chunk_size))
        .for_each(|(reals_chunk, imags_chunk)| {
            let (reals_s0, reals_s1) = reals_chunk.split_at_mut(width);
            let (imags_s0, imags_s1) = imags_chunk.split_at_mut(width);

            reals_s0
                .iter_mut()
                .zip(imags_s0.iter_mut())
                .zip(reals_s1.iter_mut())
                .zip(imags_s1.iter_mut())
                .zip(rotation)
                .for_each(|((((l_re, l_im), r_re), r_im), (w_re, w_im))| {
                    let left_re = *l_re;
                    let left_im = *l_im;
                    let right_re = w_re * *r_re - w_im * *r_im;
                    let right_im = w_im * *r_re + w_re * *r_im;

                    *l_re = scale * (left_re + right_re);
                    *l_im = scale * (left_im + right_im);
                    *r_re = scale * (left_re - right_re);
                    *r_im = scale * (left_im - right_im);
                });
        });
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, gen_random_signal, naive_dft};

    use super::*;

    #[test]
    fn rejects_non_power_of_two() {
        let mut reals = vec![0.0f64; 6];
        let mut imags = vec![0.0f64; 6];
        let err = fft(&mut reals, &mut imags, Direction::Forward, &Options::default()).unwrap_err();
        assert_eq!(err, FftError::NotPowerOfTwo { len: 6 });
    }

    #[test]
    fn rejects_mismatched_parts() {
        let mut reals = vec![0.0f64; 4];
        let mut imags = vec![0.0f64; 2];
        let err = fft(&mut reals, &mut imags, Direction::Forward, &Options::default()).unwrap_err();
        assert_eq!(err, FftError::LengthMismatch { reals: 4, imags: 2 });
    }

    #[test]
    fn trivial_lengths_are_identity() {
        let mut reals: Vec<f64> = vec![];
        let mut imags: Vec<f64> = vec![];
        fft(&mut reals, &mut imags, Direction::Forward, &Options::default()).unwrap();
        assert!(reals.is_empty());

        let mut reals = vec![3.5f64];
        let mut imags = vec![-1.0f64];
        fft(&mut reals, &mut imags, Direction::Reverse, &Options::default()).unwrap();
        assert_eq!((reals[0], imags[0]), (3.5, -1.0));
    }

    #[test]
    fn two_point_butterfly() {
        let mut reals = vec![1.0f64, 3.0];
        let mut imags = vec![0.0f64, 0.0];
        fft(&mut reals, &mut imags, Direction::Forward, &Options::default()).unwrap();
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_float_closeness(reals[0], 4.0 * s, 1e-12);
        assert_float_closeness(reals[1], -2.0 * s, 1e-12);
        assert_float_closeness(imags[0], 0.0, 1e-12);
        assert_float_closeness(imags[1], 0.0, 1e-12);
    }

    #[test]
    fn matches_naive_dft() {
        for log_n in 1..11 {
            let n = 1 << log_n;
            for direction in [Direction::Forward, Direction::Reverse] {
                let mut reals = vec![0.0f64; n];
                let mut imags = vec![0.0f64; n];
                gen_random_signal(&mut reals, &mut imags);
                let (expected_re, expected_im) =
                    naive_dft(&reals, &imags, direction == Direction::Reverse);

                fft(&mut reals, &mut imags, direction, &Options::default()).unwrap();

                for i in 0..n {
                    assert_float_closeness(reals[i], expected_re[i], 1e-9);
                    assert_float_closeness(imags[i], expected_im[i], 1e-9);
                }
            }
        }
    }

    #[test]
    fn bit_reverse_algorithm_does_not_change_result() {
        let n = 256;
        let mut reals = vec![0.0f32; n];
        let mut imags = vec![0.0f32; n];
        gen_random_signal(&mut reals, &mut imags);
        let (mut ordered_re, mut ordered_im) = (reals.clone(), imags.clone());

        fft(&mut reals, &mut imags, Direction::Forward, &Options::default()).unwrap();
        let opts = Options::default().with_bit_reverse(crate::BitReverseAlgorithm::Ordered);
        fft(&mut ordered_re, &mut ordered_im, Direction::Forward, &opts).unwrap();

        assert_eq!(reals, ordered_re);
        assert_eq!(imags, ordered_im);
    }
}
