pub extern crate rustfft;

// export rustfft to mixradix
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Textbook `O(N^2)` DFT, scaled by `1/sqrt(N)`, evaluated in `f64`.
///
/// The kernel is `exp(+2 pi i jk / N)` when `inverse` is false and
/// `exp(-2 pi i jk / N)` when it is true.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn naive_dft<T: Float>(reals: &[T], imags: &[T], inverse: bool) -> (Vec<T>, Vec<T>) {
    assert_eq!(reals.len(), imags.len());

    let n = reals.len();
    let sign = if inverse { -1.0 } else { 1.0 };
    let scale = 1.0 / (n as f64).sqrt();
    let mut out_re = Vec::with_capacity(n);
    let mut out_im = Vec::with_capacity(n);

    for k in 0..n {
        let (mut acc_re, mut acc_im) = (0.0f64, 0.0f64);
        for (j, (z_re, z_im)) in reals.iter().zip(imags.iter()).enumerate() {
            // reduce jk mod n first to keep the angle small
            let angle = sign * 2.0 * std::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
            let (w_im, w_re) = angle.sin_cos();
            let z_re = z_re.to_f64().unwrap();
            let z_im = z_im.to_f64().unwrap();
            acc_re += w_re * z_re - w_im * z_im;
            acc_im += w_re * z_im + w_im * z_re;
        }
        out_re.push(T::from(acc_re * scale).unwrap());
        out_im.push(T::from(acc_im * scale).unwrap());
    }

    (out_re, out_im)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 12;
        let mut reals: Vec<_> = vec![0.0; big_n];
        let mut imags: Vec<_> = vec![0.0; big_n];

        gen_random_signal::<f64>(&mut reals, &mut imags);

        assert!(reals
            .iter()
            .chain(imags.iter())
            .all(|z| (-1.0..1.0).contains(z)));
    }

    #[test]
    fn naive_dft_of_impulse_is_flat() {
        let (re, im) = naive_dft(&[1.0f64, 0.0, 0.0, 0.0], &[0.0; 4], false);
        for (z_re, z_im) in re.iter().zip(im.iter()) {
            assert_float_closeness(*z_re, 0.5, 1e-12);
            assert_float_closeness(*z_im, 0.0, 1e-12);
        }
    }

    #[test]
    fn naive_dft_forward_sign() {
        // delayed impulse: X_k = exp(+2 pi i k / 4) / 2
        let (re, _) = naive_dft(&[0.0f64, 1.0, 0.0, 0.0], &[0.0; 4], false);
        assert_float_closeness(re[2], -0.5, 1e-12);
        let (_, im) = naive_dft(&[0.0f64, 1.0, 0.0, 0.0], &[0.0; 4], false);
        assert_float_closeness(im[1], 0.5, 1e-12);
    }
}
