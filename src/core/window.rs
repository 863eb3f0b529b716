//! Fixed-width windows around sequence positions.

use omics::coordinate::position::Number;

/// The margins of a fragment window.
///
/// The window at position `p` spans `[p - left, p + right)`, so every fragment
/// is exactly `left + right` characters wide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Window {
    /// The number of characters before the position.
    left: Number,

    /// The number of characters from the position onward.
    right: Number,
}

impl Window {
    /// Creates a new [`Window`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::Window;
    ///
    /// let window = Window::new(2, 3);
    /// assert_eq!(window.left(), 2);
    /// assert_eq!(window.right(), 3);
    /// assert_eq!(window.width(), Some(5));
    /// ```
    pub fn new(left: Number, right: Number) -> Self {
        Self { left, right }
    }

    /// Gets the left margin.
    pub fn left(&self) -> Number {
        self.left
    }

    /// Gets the right margin.
    pub fn right(&self) -> Number {
        self.right
    }

    /// Gets the width of every fragment cut with this window.
    ///
    /// Returns [`None`] when the width doesn't fit in a [`Number`]. No
    /// position passes the bounds check for such a window.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::Window;
    ///
    /// assert_eq!(Window::new(10, 10).width(), Some(20));
    /// assert_eq!(Window::new(0, 0).width(), Some(0));
    /// assert_eq!(Window::new(u64::MAX, 1).width(), None);
    /// ```
    pub fn width(&self) -> Option<Number> {
        self.left.checked_add(self.right)
    }

    /// Whether a position passes the bounds check for a sequence of length
    /// `len`.
    ///
    /// A position passes when `pos + left < len` and `pos - right >= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::Window;
    ///
    /// let window = Window::new(0, 2);
    /// assert!(window.in_bounds(4, 36));
    /// assert!(!window.in_bounds(1, 36));
    /// assert!(!window.in_bounds(36, 36));
    /// ```
    pub fn in_bounds(&self, pos: Number, len: Number) -> bool {
        pos.checked_add(self.left).is_some_and(|end| end < len) && pos >= self.right
    }

    /// Cuts the fragment at `pos` out of `sequence`.
    ///
    /// Returns [`None`] when the position fails the bounds check or when the
    /// full-width fragment can't be taken from the sequence. Fragments are
    /// never truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::Window;
    ///
    /// let sequence = "TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT";
    ///
    /// assert_eq!(Window::new(0, 2).fragment(sequence, 4), Some("GT"));
    /// assert_eq!(Window::new(2, 3).fragment(sequence, 4), Some("TTGTC"));
    /// assert_eq!(Window::new(2, 3).fragment(sequence, 1), None);
    /// ```
    pub fn fragment<'a>(&self, sequence: &'a str, pos: Number) -> Option<&'a str> {
        let len = sequence.len() as Number;

        if !self.in_bounds(pos, len) {
            return None;
        }

        let start = pos.checked_sub(self.left)?;
        let end = pos.checked_add(self.right)?;

        if end > len {
            return None;
        }

        sequence.get(start as usize..end as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENCE: &str = "TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT";

    #[test]
    fn it_uses_the_left_margin_against_the_sequence_end() {
        let window = Window::new(3, 0);
        let len = SEQUENCE.len() as Number;

        assert!(window.in_bounds(32, len));
        assert!(!window.in_bounds(33, len));
    }

    #[test]
    fn it_uses_the_right_margin_against_the_sequence_start() {
        let window = Window::new(0, 3);
        let len = SEQUENCE.len() as Number;

        assert!(!window.in_bounds(2, len));
        assert!(window.in_bounds(3, len));
    }

    #[test]
    fn it_cuts_full_width_fragments() {
        let window = Window::new(2, 3);

        for pos in 0..SEQUENCE.len() as Number {
            if let Some(fragment) = window.fragment(SEQUENCE, pos) {
                let pos = pos as usize;
                assert_eq!(fragment.len(), 5);
                assert_eq!(fragment, &SEQUENCE[pos - 2..pos + 3]);
            }
        }
    }

    #[test]
    fn it_drops_fragments_that_would_start_before_the_sequence() {
        // Passes the bounds check (4 - 1 >= 0) but would start at -1.
        let window = Window::new(5, 1);
        assert!(window.in_bounds(4, SEQUENCE.len() as Number));
        assert_eq!(window.fragment(SEQUENCE, 4), None);
    }

    #[test]
    fn it_drops_fragments_that_would_run_past_the_sequence() {
        // Passes the bounds check (34 + 1 < 36) but would end at 39.
        let window = Window::new(1, 5);
        assert!(window.in_bounds(34, SEQUENCE.len() as Number));
        assert_eq!(window.fragment(SEQUENCE, 34), None);
    }

    #[test]
    fn it_cuts_empty_fragments_for_an_empty_window() {
        let window = Window::new(0, 0);
        assert_eq!(window.width(), Some(0));
        assert_eq!(window.fragment(SEQUENCE, 10), Some(""));
    }

    #[test]
    fn it_rejects_every_position_when_the_width_overflows() {
        let len = SEQUENCE.len() as Number;

        for window in [Window::new(Number::MAX, 1), Window::new(1, Number::MAX)] {
            assert_eq!(window.width(), None);
            assert!((0..len).all(|pos| !window.in_bounds(pos, len)));
            assert!((0..len).all(|pos| window.fragment(SEQUENCE, pos).is_none()));
        }
    }

    #[test]
    fn it_never_splits_a_multibyte_character() {
        let window = Window::new(1, 1);
        assert_eq!(window.fragment("AéGTA", 3), None);
        assert_eq!(window.fragment("AéGTA", 4), Some("GT"));
    }
}
