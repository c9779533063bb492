//! Bit-reversal permutation for the radix-2 kernel.
//!
//! Index `i` of a length-`n` signal (`n` a power of two) trades places with the
//! index whose low `log2(n)` bits are those of `i` read backwards.
use crate::options::BitReverseAlgorithm;

/// Reverses the low `log2(n)` bits of `index`. `n` must be a power of two.
#[inline]
pub fn bit_reverse_index(index: usize, n: usize) -> usize {
    debug_assert!(n.is_power_of_two());
    let log_n = n.ilog2();
    if log_n == 0 {
        return index;
    }
    index.reverse_bits() >> (usize::BITS - log_n)
}

/// Permutes both parts of a signal into bit-reversed order, in place.
///
/// Both slices must have the same power-of-two length.
pub fn bit_reverse_permutation<T>(
    reals: &mut [T],
    imags: &mut [T],
    algorithm: BitReverseAlgorithm,
) {
    debug_assert_eq!(reals.len(), imags.len());
    match algorithm {
        BitReverseAlgorithm::Tracked => bit_rev_tracked(reals, imags),
        BitReverseAlgorithm::Ordered => bit_rev_ordered(reals, imags),
    }
}

/// Visits every index and swaps it with its partner unless an earlier index already did
fn bit_rev_tracked<T>(reals: &mut [T], imags: &mut [T]) {
    let n = reals.len();
    if n <= 2 {
        return;
    }
    let mut flipped = vec![false; n];

    for i in 0..n {
        if flipped[i] {
            continue;
        }
        let r_i = bit_reverse_index(i, n);
        reals.swap(i, r_i);
        imags.swap(i, r_i);
        flipped[r_i] = true;
    }
}

fn bit_rev_ordered<T>(reals: &mut [T], imags: &mut [T]) {
    let n = reals.len();
    if n <= 2 {
        return;
    }

    for i in 1..n - 1 {
        let r_i = bit_reverse_index(i, n);
        if i < r_i {
            reals.swap(i, r_i);
            imags.swap(i, r_i);
        }
    }
}
