/// Options to tune the transforms for a given input size.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size.
///
/// Options are threaded through every level of the mixed-radix recursion, so the same choice
/// applies to the top-level buffer and to all of its sub-sequences.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// How the radix-2 kernel reorders its input
    pub bit_reverse: BitReverseAlgorithm,
    /// Run the independent sub-transforms of a mixed-radix level on the rayon pool.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    pub multithreaded: bool,
}

/// Lengths from which the visited-set bookkeeping of [`BitReverseAlgorithm::Tracked`] is
/// no longer worth its allocation
const ORDERED_BIT_REVERSE_THRESHOLD: usize = 1 << 16;

/// Non-power-of-two lengths from which splitting sub-transforms across threads pays off
const MULTITHREADED_THRESHOLD: usize = 1 << 14;

impl Options {
    /// Picks options for an input of `input_size` samples
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        if input_size >= ORDERED_BIT_REVERSE_THRESHOLD {
            options.bit_reverse = BitReverseAlgorithm::Ordered;
        }
        if input_size >= MULTITHREADED_THRESHOLD && !input_size.is_power_of_two() {
            options.multithreaded = true;
        }
        options
    }

    #[must_use]
    pub fn with_bit_reverse(mut self, bit_reverse: BitReverseAlgorithm) -> Self {
        self.bit_reverse = bit_reverse;
        self
    }

    #[must_use]
    pub fn with_multithreaded(mut self, multithreaded: bool) -> Self {
        self.multithreaded = multithreaded;
        self
    }
}

/// The algorithm to use for bit reversal.
/// Both produce the same permutation, they differ only in bookkeeping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitReverseAlgorithm {
    #[default]
    /// Walks every index and records each swapped partner in a visited set,
    /// so a pair is never swapped back
    Tracked,
    /// Swaps a pair only from its smaller index, no extra memory
    Ordered,
}
