use crate::float::FftFloat;
use crate::planner::Direction;

/// Running unit rotation `(f_r, f_i)`, advanced by one complex multiplication
/// with a fixed delta per step instead of calling `sin`/`cos` per factor.
///
/// The accumulated error grows linearly with the number of steps, which stays
/// far below single precision tolerance for the lengths a single pass covers.
#[derive(Clone, Copy)]
pub(crate) struct Twiddles<T> {
    st: T,
    ct: T,
    w_re_prev: T,
    w_im_prev: T,
}

impl<T: FftFloat> Twiddles<T> {
    /// Rotation starting at `1 + 0i` and stepping by `theta` radians,
    /// counter-clockwise for [`Direction::Forward`] and clockwise for [`Direction::Reverse`].
    pub fn new(theta: T, direction: Direction) -> Self {
        let (st, ct) = theta.sin_cos();
        Self {
            st: direction.sign::<T>() * st,
            ct,
            w_re_prev: T::one(),
            w_im_prev: T::zero(),
        }
    }

    /// Step of `pi / width`, used by the radix-2 butterfly pass over blocks of `2 * width`
    pub fn for_butterfly_width(width: usize, direction: Direction) -> Self {
        Self::new(T::PI() / T::from_usize(width), direction)
    }

    /// Step of `2 pi * phase / len`, used when folding one mixed-radix phase back in
    pub fn for_phase(phase: usize, len: usize, direction: Direction) -> Self {
        let two = T::one() + T::one();
        Self::new(
            two * T::PI() * T::from_usize(phase) / T::from_usize(len),
            direction,
        )
    }

    /// Current rotation, without advancing
    #[inline]
    pub fn current(&self) -> (T, T) {
        (self.w_re_prev, self.w_im_prev)
    }

    /// Multiplies the running rotation by the delta
    #[inline]
    pub fn advance(&mut self) {
        let temp = self.w_re_prev;
        self.w_re_prev = temp * self.ct - self.w_im_prev * self.st;
        self.w_im_prev = temp * self.st + self.w_im_prev * self.ct;
    }
}

impl<T: FftFloat> Iterator for Twiddles<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let w = self.current();
        self.advance();
        Some(w)
    }
}
