//! Pairwise relationships between quartets.
//!
//! Two independent predicates are defined over quartets `q1 = (i, j, i+1, j-1)` and
//! `q2 = (k, l, k+1, l-1)`:
//!
//! - **Stacked** (directional): the outer pair of `q2` sits immediately inside the inner
//!   pair of `q1`, i.e. `k == (i + 1) + 1` and `l == (j - 1) - 1`.
//! - **Crossing** (symmetric): the outer pairs interleave without nesting,
//!   `i < k < j < l` or `k < i < l < j`. Inner positions are never examined.

use super::models::quartet::Quartet;

/// `true` iff `q2` is stacked directly under `q1`.
#[inline]
pub fn is_stacked(q1: &Quartet, q2: &Quartet) -> bool {
    let (inner_i, inner_j) = q1.inner();
    inner_i + 1 == q2.i && inner_j == q2.j + 1
}

/// `true` iff either quartet is stacked directly under the other.
#[inline]
pub fn are_stacked(q1: &Quartet, q2: &Quartet) -> bool {
    is_stacked(q1, q2) || is_stacked(q2, q1)
}

#[inline]
pub fn is_crossing(q1: &Quartet, q2: &Quartet) -> bool {
    let (i, j) = q1.outer();
    let (k, l) = q2.outer();
    (i < k && k < j && j < l) || (k < i && i < l && l < j)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Relation {
    pub stacked: bool,
    pub crossing: bool,
}

impl Relation {
    pub fn is_independent(&self) -> bool {
        !self.stacked && !self.crossing
    }
}

/// Classifies an unordered pair of quartets; stacking is checked in both orders.
pub fn classify(q1: &Quartet, q2: &Quartet) -> Relation {
    Relation {
        stacked: are_stacked(q1, q2),
        crossing: is_crossing(q1, q2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(i: usize, j: usize) -> Quartet {
        Quartet::new(i, j)
    }

    #[test]
    fn stacked_detects_quartet_directly_inside_inner_pair() {
        assert!(is_stacked(&q(0, 11), &q(2, 9)));
    }

    #[test]
    fn stacked_is_directional() {
        assert!(is_stacked(&q(0, 11), &q(2, 9)));
        assert!(!is_stacked(&q(2, 9), &q(0, 11)));
        assert!(are_stacked(&q(2, 9), &q(0, 11)));
    }

    #[test]
    fn overlapping_quartets_sharing_a_pair_are_not_stacked() {
        assert!(!are_stacked(&q(0, 9), &q(1, 8)));
    }

    #[test]
    fn quartets_with_a_gap_are_not_stacked() {
        assert!(!are_stacked(&q(0, 14), &q(3, 11)));
        assert!(!are_stacked(&q(0, 11), &q(2, 8)));
    }

    #[test]
    fn crossing_detects_interleaved_outer_pairs() {
        assert!(is_crossing(&q(0, 7), &q(1, 8)));
        assert!(is_crossing(&q(1, 8), &q(0, 7)));
    }

    #[test]
    fn nested_quartets_do_not_cross() {
        assert!(!is_crossing(&q(0, 20), &q(5, 12)));
        assert!(!is_crossing(&q(5, 12), &q(0, 20)));
    }

    #[test]
    fn disjoint_quartets_do_not_cross() {
        assert!(!is_crossing(&q(0, 5), &q(6, 11)));
        assert!(!is_crossing(&q(6, 11), &q(0, 5)));
    }

    #[test]
    fn identical_quartets_do_not_cross() {
        assert!(!is_crossing(&q(3, 9), &q(3, 9)));
    }

    #[test]
    fn quartets_sharing_an_endpoint_do_not_cross() {
        assert!(!is_crossing(&q(0, 9), &q(0, 7)));
        assert!(!is_crossing(&q(0, 9), &q(4, 9)));
        assert!(!is_crossing(&q(0, 5), &q(5, 10)));
    }

    #[test]
    fn crossing_is_symmetric_over_a_grid_of_quartets() {
        let quartets: Vec<_> = (0..8)
            .flat_map(|i| (i + 4..14).map(move |j| q(i, j)))
            .collect();
        for a in &quartets {
            for b in &quartets {
                assert_eq!(is_crossing(a, b), is_crossing(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn stacked_quartets_never_cross() {
        let quartets: Vec<_> = (0..10)
            .flat_map(|i| (i + 4..20).map(move |j| q(i, j)))
            .collect();
        for a in &quartets {
            for b in &quartets {
                if is_stacked(a, b) {
                    assert!(!is_crossing(a, b), "{a} stacked on {b} but crossing");
                }
            }
        }
    }

    #[test]
    fn classify_reports_both_predicates() {
        assert_eq!(
            classify(&q(2, 9), &q(0, 11)),
            Relation {
                stacked: true,
                crossing: false
            }
        );
        let crossing = classify(&q(0, 7), &q(1, 8));
        assert!(crossing.crossing && !crossing.stacked);
        assert!(classify(&q(0, 5), &q(6, 11)).is_independent());
    }
}
