//! Recursive mixed-radix Cooley-Tukey FFT for lengths that are not powers of two.
//!
//! A length-`N` signal is split by its lowest odd factor `p` into `p` interleaved
//! sub-sequences of length `m = N / p`. Each sub-sequence is transformed through the
//! dispatcher (so power-of-two sub-lengths land on the radix-2 kernel), then every
//! output bin `k` sums the `p` sub-spectra at `k mod m`, weighted by the twiddle
//! `exp(+-2 pi i * phase * k / N)`. The result is scaled by `1/sqrt(p)`, which together
//! with the `1/sqrt(m)` of the sub-transforms keeps the whole transform unitary.
//!
//! Cost is `O(N * sum(p_i))` over the radices used at each level, `O(N^2)` for a prime `N`.
use log::trace;

use crate::buffer::ComplexBuffer;
use crate::float::FftFloat;
use crate::options::Options;
use crate::parallel::map_maybe_in_parallel;
use crate::planner::{lowest_odd_factor, Direction};
use crate::transform;
use crate::twiddles::Twiddles;

/// Mixed-radix FFT of `buffer`, in place. Any length is accepted.
pub fn fft<T: FftFloat>(buffer: &mut ComplexBuffer<T>, direction: Direction, opts: &Options) {
    if buffer.len() <= 1 {
        return;
    }
    let factor = lowest_odd_factor(buffer.len());
    process(buffer, factor, direction, opts);
}

/// One decomposition level with radix `factor`, which must divide the length
pub(crate) fn process<T: FftFloat>(
    buffer: &mut ComplexBuffer<T>,
    factor: usize,
    direction: Direction,
    opts: &Options,
) {
    let n = buffer.len();
    debug_assert!(factor > 0 && n % factor == 0);
    let sub_len = n / factor;
    trace!("mixed-radix level: len={n} radix={factor} sub_len={sub_len}");

    let mut output = ComplexBuffer::new(n);

    if opts.multithreaded {
        let input = &*buffer;
        let sub_spectra = map_maybe_in_parallel(true, factor, |phase| {
            let mut sub = ComplexBuffer::new(sub_len);
            sub_spectrum(input, &mut sub, phase, factor, direction, opts);
            sub
        });
        for (phase, sub) in sub_spectra.iter().enumerate() {
            accumulate_phase(&mut output, sub, phase, direction);
        }
    } else {
        let mut sub = ComplexBuffer::new(sub_len);
        for phase in 0..factor {
            sub_spectrum(buffer, &mut sub, phase, factor, direction, opts);
            accumulate_phase(&mut output, &sub, phase, direction);
        }
    }

    let normalisation = T::one() / T::from_usize(factor).sqrt();
    let (reals, imags) = buffer.parts_mut();
    reals
        .iter_mut()
        .zip(imags.iter_mut())
        .zip(output.reals().iter().zip(output.imags().iter()))
        .for_each(|((z_re, z_im), (out_re, out_im))| {
            *z_re = normalisation * *out_re;
            *z_im = normalisation * *out_im;
        });
}

/// Gathers samples `phase, phase + stride, phase + 2 * stride, ...` of `input` into `sub`
/// and transforms them, unless there is only one
fn sub_spectrum<T: FftFloat>(
    input: &ComplexBuffer<T>,
    sub: &mut ComplexBuffer<T>,
    phase: usize,
    stride: usize,
    direction: Direction,
    opts: &Options,
) {
    let (sub_re, sub_im) = sub.parts_mut();
    sub_re
        .iter_mut()
        .zip(sub_im.iter_mut())
        .zip(
            input
                .reals()
                .iter()
                .zip(input.imags().iter())
                .skip(phase)
                .step_by(stride),
        )
        .for_each(|((s_re, s_im), (z_re, z_im))| {
            *s_re = *z_re;
            *s_im = *z_im;
        });

    if sub.len() > 1 {
        transform(sub, direction, opts);
    }
}

/// `output[k] += w^k * sub[k mod m]` for every bin `k`, `w = exp(+-2 pi i * phase / N)`
fn accumulate_phase<T: FftFloat>(
    output: &mut ComplexBuffer<T>,
    sub: &ComplexBuffer<T>,
    phase: usize,
    direction: Direction,
) {
    let n = output.len();
    let rotation = Twiddles::<T>::for_phase(phase, n, direction);
    let (out_re, out_im) = output.parts_mut();

    out_re
        .iter_mut()
        .zip(out_im.iter_mut())
        .zip(sub.reals().iter().zip(sub.imags().iter()).cycle())
        .zip(rotation)
        .for_each(|(((o_re, o_im), (s_re, s_im)), (f_r, f_i))| {
            *o_re = *o_re + f_r * *s_re - f_i * *s_im;
            *o_im = *o_im + f_r * *s_im + f_i * *s_re;
        });
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, gen_random_signal, naive_dft};

    use super::*;

    fn random_buffer(n: usize) -> ComplexBuffer<f64> {
        let mut reals = vec![0.0; n];
        let mut imags = vec![0.0; n];
        gen_random_signal(&mut reals, &mut imags);
        ComplexBuffer::from_parts(reals, imags).unwrap()
    }

    #[test]
    fn matches_naive_dft_for_composite_and_prime_lengths() {
        for n in [3, 5, 6, 7, 9, 10, 12, 15, 17, 21, 24, 45, 63, 97, 100] {
            for direction in [Direction::Forward, Direction::Reverse] {
                let mut buffer = random_buffer(n);
                let (expected_re, expected_im) = naive_dft(
                    buffer.reals(),
                    buffer.imags(),
                    direction == Direction::Reverse,
                );

                fft(&mut buffer, direction, &Options::default());

                for i in 0..n {
                    assert_float_closeness(buffer.reals()[i], expected_re[i], 1e-9);
                    assert_float_closeness(buffer.imags()[i], expected_im[i], 1e-9);
                }
            }
        }
    }

    #[test]
    fn length_one_is_identity() {
        let mut buffer = ComplexBuffer::from_parts(vec![2.0f64], vec![-3.0]).unwrap();
        fft(&mut buffer, Direction::Forward, &Options::default());
        assert_eq!(buffer.reals(), &[2.0]);
        assert_eq!(buffer.imags(), &[-3.0]);
    }

    #[test]
    fn multithreaded_matches_sequential() {
        for n in [15, 45, 96, 105] {
            let mut sequential = random_buffer(n);
            let mut threaded = sequential.clone();

            fft(&mut sequential, Direction::Forward, &Options::default());
            fft(
                &mut threaded,
                Direction::Forward,
                &Options::default().with_multithreaded(true),
            );

            assert_eq!(sequential, threaded);
        }
    }

    #[test]
    fn three_point_impulse_is_flat() {
        let mut buffer = ComplexBuffer::from_reals(&[1.0f64, 0.0, 0.0]);
        fft(&mut buffer, Direction::Forward, &Options::default());
        let expected = 1.0 / 3.0f64.sqrt();
        for i in 0..3 {
            assert_float_closeness(buffer.reals()[i], expected, 1e-12);
            assert_float_closeness(buffer.imags()[i], 0.0, 1e-12);
        }
    }
}
