use std::fmt;

/// Two adjacent stacked base pairs: the outer pair `(i, j)` and the inner pair
/// `(i + 1, j - 1)`.
///
/// Only `i` and `j` are stored; the inner positions are always derived, so a quartet
/// can never hold an inner pair that is not directly stacked on its outer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quartet {
    pub i: usize,
    pub j: usize,
}

impl Quartet {
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(i + 1 < j, "quartet requires i + 1 < j, got ({i}, {j})");
        Self { i, j }
    }

    /// Builds a quartet from a raw `(i, j, k, l)` tuple, returning `None` unless
    /// `k == i + 1` and `l == j - 1` with the inner pair still ordered.
    pub fn from_positions([i, j, k, l]: [usize; 4]) -> Option<Self> {
        if j < 2 || i + 1 >= j - 1 || k != i + 1 || l != j - 1 {
            return None;
        }
        Some(Self { i, j })
    }

    #[inline]
    pub fn outer(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    #[inline]
    pub fn inner(&self) -> (usize, usize) {
        (self.i + 1, self.j - 1)
    }

    #[inline]
    pub fn positions(&self) -> [usize; 4] {
        [self.i, self.j, self.i + 1, self.j - 1]
    }

    /// Identifier safe for LP files and solver back ends, e.g. `q_0_9_1_8`.
    pub fn variable_name(&self) -> String {
        let [i, j, k, l] = self.positions();
        format!("q_{i}_{j}_{k}_{l}")
    }
}

impl fmt::Display for Quartet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j, k, l] = self.positions();
        write!(f, "({i}, {j}, {k}, {l})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_derive_inner_pair_from_outer_pair() {
        let q = Quartet::new(2, 11);
        assert_eq!(q.outer(), (2, 11));
        assert_eq!(q.inner(), (3, 10));
        assert_eq!(q.positions(), [2, 11, 3, 10]);
    }

    #[test]
    fn display_renders_literal_tuple() {
        assert_eq!(Quartet::new(0, 9).to_string(), "(0, 9, 1, 8)");
    }

    #[test]
    fn variable_name_is_underscore_separated() {
        assert_eq!(Quartet::new(0, 9).variable_name(), "q_0_9_1_8");
    }

    #[test]
    fn from_positions_accepts_well_formed_tuple() {
        assert_eq!(
            Quartet::from_positions([0, 9, 1, 8]),
            Some(Quartet::new(0, 9))
        );
    }

    #[test]
    fn from_positions_rejects_tuples_that_are_not_stacked_pairs() {
        assert_eq!(Quartet::from_positions([2, 7, 3, 5]), None);
        assert_eq!(Quartet::from_positions([2, 7, 4, 6]), None);
        assert_eq!(Quartet::from_positions([0, 1, 1, 0]), None);
        assert_eq!(Quartet::from_positions([0, 2, 1, 1]), None);
        assert_eq!(Quartet::from_positions([0, 0, 1, 0]), None);
    }

    #[test]
    fn ordering_is_by_i_then_j() {
        let mut quartets = vec![Quartet::new(1, 8), Quartet::new(0, 9), Quartet::new(0, 7)];
        quartets.sort();
        assert_eq!(
            quartets,
            vec![Quartet::new(0, 7), Quartet::new(0, 9), Quartet::new(1, 8)]
        );
    }
}
