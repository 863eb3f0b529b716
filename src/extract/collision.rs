//! Filtering candidate sites against the true splice sites.

use std::collections::HashSet;

use omics::coordinate::position::Number;
use rust_lapper as lapper;

use crate::core::SitePosition;
use crate::core::Window;

/// How close a false fragment may come to a true one.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OverlapPolicy {
    /// A candidate is rejected when either edge of its window falls within
    /// `[t - left, t + right]` for some true position `t`.
    #[default]
    Strict,

    /// A candidate is rejected only when it sits exactly on a true position.
    Permissive,
}

impl From<bool> for OverlapPolicy {
    /// Converts an "overlap allowed" flag into a policy.
    fn from(overlap: bool) -> Self {
        match overlap {
            true => OverlapPolicy::Permissive,
            false => OverlapPolicy::Strict,
        }
    }
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlapPolicy::Strict => write!(f, "strict"),
            OverlapPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

/// The lookup structure for the true positions.
#[derive(Debug)]
enum Index {
    /// The closed true windows, shifted right by the left margin so that none
    /// of them start below zero. Each interval carries its true position.
    Strict {
        /// The shifted true windows.
        lapper: lapper::Lapper<Number, Number>,

        /// The width of the window.
        width: Number,
    },

    /// The window is too wide to represent, so every true window covers
    /// every candidate. Holds whether there are any true positions at all.
    Saturated(bool),

    /// The true positions themselves.
    Permissive(HashSet<Number>),
}

/// Decides whether candidate positions make acceptable false fragments.
///
/// # Examples
///
/// ```
/// use splicefrag::core::SitePosition;
/// use splicefrag::core::Window;
/// use splicefrag::extract::collision::CollisionFilter;
/// use splicefrag::extract::collision::OverlapPolicy;
///
/// let window = Window::new(2, 3);
/// let true_positions = [SitePosition::At(16)];
///
/// let strict = CollisionFilter::new(&true_positions, window, OverlapPolicy::Strict);
/// assert!(!strict.accepts(18, 36));
/// assert!(strict.accepts(31, 36));
///
/// let permissive = CollisionFilter::new(&true_positions, window, OverlapPolicy::Permissive);
/// assert!(permissive.accepts(18, 36));
/// assert!(!permissive.accepts(16, 36));
/// ```
#[derive(Debug)]
pub struct CollisionFilter {
    /// The fragment window.
    window: Window,

    /// The true position lookup.
    index: Index,
}

impl CollisionFilter {
    /// Creates a new [`CollisionFilter`] over a set of true positions.
    ///
    /// A true position [before the start](SitePosition::BeforeStart) of the
    /// sequence sits at `-1`, so under the strict policy its window
    /// `[-1 - left, right - 1]` still rejects candidates near the start.
    pub fn new(true_positions: &[SitePosition], window: Window, policy: OverlapPolicy) -> Self {
        let index = match policy {
            OverlapPolicy::Strict => Self::strict(true_positions, window),
            OverlapPolicy::Permissive => Index::Permissive(
                true_positions
                    .iter()
                    .filter_map(|position| position.offset())
                    .collect(),
            ),
        };

        Self { window, index }
    }

    /// Builds the strict lookup.
    fn strict(true_positions: &[SitePosition], window: Window) -> Index {
        let (width, span) = match window.width().and_then(|w| Some((w, w.checked_add(1)?))) {
            Some(spans) => spans,
            None => return Index::Saturated(!true_positions.is_empty()),
        };

        let intervals = true_positions
            .iter()
            .filter_map(|position| match *position {
                SitePosition::At(position) => Some(lapper::Interval {
                    start: position,
                    stop: position.saturating_add(span),
                    val: position,
                }),
                // Shifted by the left margin, the window of `-1` is
                // `[-1, width]`, and candidate edges never fall below zero.
                SitePosition::BeforeStart if width > 0 => Some(lapper::Interval {
                    start: 0,
                    stop: width,
                    val: 0,
                }),
                SitePosition::BeforeStart => None,
            })
            .collect::<Vec<_>>();

        Index::Strict {
            lapper: lapper::Lapper::new(intervals),
            width,
        }
    }

    /// Whether a candidate at `pos` collides with any true position.
    ///
    /// Under the strict policy, the two edges of the candidate's window
    /// (`pos - left` and `pos + right`) are tested against every closed true
    /// window `[t - left, t + right]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::SitePosition;
    /// use splicefrag::core::Window;
    /// use splicefrag::extract::collision::CollisionFilter;
    /// use splicefrag::extract::collision::OverlapPolicy;
    ///
    /// let filter = CollisionFilter::new(
    ///     &[SitePosition::At(10)],
    ///     Window::new(1, 2),
    ///     OverlapPolicy::Strict,
    /// );
    ///
    /// // The true window is [9, 12].
    /// assert!(filter.collides(7)); // right edge 9
    /// assert!(filter.collides(13)); // left edge 12
    /// assert!(!filter.collides(6)); // edges 5 and 8
    /// assert!(!filter.collides(14)); // edges 13 and 16
    /// ```
    pub fn collides(&self, pos: Number) -> bool {
        match &self.index {
            Index::Strict { lapper, width } => {
                // Shifted by the left margin, the candidate's edges become
                // `pos` and `pos + left + right`.
                let left_edge = pos;
                let right_edge = pos.saturating_add(*width);

                [left_edge, right_edge].into_iter().any(|edge| {
                    lapper
                        .find(edge, edge.saturating_add(1))
                        .next()
                        .is_some()
                })
            }
            Index::Saturated(any) => *any,
            Index::Permissive(positions) => positions.contains(&pos),
        }
    }

    /// Whether a candidate at `pos` passes both the bounds check for a
    /// sequence of length `len` and the collision check.
    pub fn accepts(&self, pos: Number, len: Number) -> bool {
        self.window.in_bounds(pos, len) && !self.collides(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(positions: &[Number]) -> Vec<SitePosition> {
        positions.iter().copied().map(SitePosition::At).collect()
    }

    /// The edge test, written out literally over signed integers.
    fn collides_literally(true_positions: &[i64], a: i64, b: i64, pos: i64) -> bool {
        true_positions.iter().any(|&t| {
            (t - a <= pos - a && pos - a <= t + b) || (t - a <= pos + b && pos + b <= t + b)
        })
    }

    #[test]
    fn it_agrees_with_the_literal_edge_test() {
        let true_positions = [
            SitePosition::BeforeStart,
            SitePosition::At(4),
            SitePosition::At(17),
            SitePosition::At(27),
            SitePosition::At(40),
        ];
        let signed = [-1, 4, 17, 27, 40];

        for a in 0..6 {
            for b in 0..6 {
                let window = Window::new(a, b);
                let filter = CollisionFilter::new(&true_positions, window, OverlapPolicy::Strict);

                for pos in 0..60 {
                    assert_eq!(
                        filter.collides(pos),
                        collides_literally(&signed, a as i64, b as i64, pos as i64),
                        "a = {a}, b = {b}, pos = {pos}"
                    );
                }
            }
        }
    }

    #[test]
    fn it_rejects_candidates_near_an_acceptor_before_the_start() {
        // The true window of `-1` is [-3, 1].
        let filter = CollisionFilter::new(
            &[SitePosition::BeforeStart],
            Window::new(2, 2),
            OverlapPolicy::Strict,
        );

        assert!(!filter.accepts(2, 10));
        assert!(filter.accepts(4, 10));
        assert!(filter.accepts(6, 10));

        let filter = CollisionFilter::new(
            &[SitePosition::BeforeStart],
            Window::new(2, 2),
            OverlapPolicy::Permissive,
        );
        assert!(filter.accepts(2, 10));
    }

    #[test]
    fn it_treats_window_edges_as_inclusive() {
        let filter = CollisionFilter::new(&at(&[10]), Window::new(0, 0), OverlapPolicy::Strict);
        assert!(filter.collides(10));
        assert!(!filter.collides(9));
        assert!(!filter.collides(11));
    }

    #[test]
    fn it_only_rejects_exact_matches_when_permissive() {
        let filter =
            CollisionFilter::new(&at(&[10, 20]), Window::new(5, 5), OverlapPolicy::Permissive);

        assert!(filter.collides(10));
        assert!(filter.collides(20));
        assert!(!filter.collides(11));
        assert!(!filter.collides(19));
    }

    #[test]
    fn it_never_collides_without_true_positions() {
        for policy in [OverlapPolicy::Strict, OverlapPolicy::Permissive] {
            let filter = CollisionFilter::new(&[], Window::new(3, 3), policy);
            assert!((0..20).all(|pos| !filter.collides(pos)));
        }
    }

    #[test]
    fn it_handles_windows_too_wide_to_represent() {
        for window in [Window::new(Number::MAX, 1), Window::new(1, Number::MAX)] {
            let filter = CollisionFilter::new(&at(&[10]), window, OverlapPolicy::Strict);
            assert!(filter.collides(0));
            assert!(filter.collides(30));
            assert!(!filter.accepts(30, 36));

            let filter = CollisionFilter::new(&[], window, OverlapPolicy::Strict);
            assert!(!filter.collides(30));
            assert!(!filter.accepts(30, 36));
        }
    }

    #[test]
    fn it_rejects_out_of_bounds_candidates_under_either_policy() {
        for policy in [OverlapPolicy::Strict, OverlapPolicy::Permissive] {
            let filter = CollisionFilter::new(&[], Window::new(2, 3), policy);

            assert!(!filter.accepts(2, 36));
            assert!(filter.accepts(3, 36));
            assert!(filter.accepts(33, 36));
            assert!(!filter.accepts(34, 36));
        }
    }

    #[test]
    fn it_converts_the_overlap_flag() {
        assert_eq!(OverlapPolicy::from(false), OverlapPolicy::Strict);
        assert_eq!(OverlapPolicy::from(true), OverlapPolicy::Permissive);
        assert_eq!(OverlapPolicy::default(), OverlapPolicy::Strict);
    }
}
