//! Pairwise-coverage fitness.
//!
//! For every row and every pair of columns `i > j`, the evaluator counts the
//! ordered value pair `(row[i], row[j])` in an `F × F` matrix, where `F` is
//! the alphabet size of the factor model. The score is
//!
//! ```text
//! fitness = #{cells with count > 0} - #{cells with count > 1}
//! ```
//!
//! The first term rewards breadth of coverage; the second penalises pairs
//! that several rows cover, pushing the search to spread coverage across
//! rows. Cost is `O(rows × factors²)` plus `O(F²)` for the matrix scan.

use super::types::{Fitness, TestCase};
use crate::factor::FactorModel;

/// Evaluator bound to one factor model's alphabet size.
///
/// Holds no mutable state, so one instance is shared by every evaluation
/// task. Each call allocates its own matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairwiseFitness {
    total: usize,
}

/// Cell counts behind a fitness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairCounts {
    /// Cells with a count above zero.
    pub covered: u64,
    /// Cells with a count above one.
    pub repeated: u64,
}

impl PairCounts {
    pub fn fitness(&self) -> Fitness {
        self.covered - self.repeated
    }
}

impl PairwiseFitness {
    pub fn new(model: &FactorModel) -> Self {
        Self::with_total(model.total())
    }

    /// Evaluator for an explicit alphabet size.
    pub fn with_total(total: usize) -> Self {
        Self { total }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Fitness of a set of rows.
    pub fn evaluate(&self, rows: &[TestCase]) -> Fitness {
        self.pair_counts(rows).fitness()
    }

    /// Builds the pair matrix and returns its covered/repeated cell counts.
    ///
    /// # Panics
    /// Panics if a row holds a value outside `0..total`.
    pub fn pair_counts(&self, rows: &[TestCase]) -> PairCounts {
        let f = self.total;
        let mut matrix = vec![0u32; f * f];

        for row in rows {
            for i in 0..row.len() {
                let base = row[i] * f;
                for &other in &row[..i] {
                    matrix[base + other] += 1;
                }
            }
        }

        matrix.iter().fold(PairCounts::default(), |mut acc, &count| {
            if count > 0 {
                acc.covered += 1;
            }
            if count > 1 {
                acc.repeated += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::build_factor_infos;
    use proptest::prelude::*;

    fn evaluator() -> PairwiseFitness {
        // A = {0, 1}, B = {2, 3}, C = {4, 5}
        PairwiseFitness::new(&FactorModel::from_infos(build_factor_infos(3, 2)))
    }

    #[test]
    fn test_single_row() {
        let e = evaluator();
        // pairs (2,0), (4,0), (4,2)
        assert_eq!(e.evaluate(&[vec![0, 2, 4]]), 3);
    }

    #[test]
    fn test_duplicate_rows_cancel_out() {
        let e = evaluator();
        let counts = e.pair_counts(&[vec![0, 2, 4], vec![0, 2, 4]]);
        assert_eq!(counts, PairCounts { covered: 3, repeated: 3 });
        assert_eq!(counts.fitness(), 0);
    }

    #[test]
    fn test_partial_overlap() {
        let e = evaluator();
        // second row shares (2,0) with the first
        let counts = e.pair_counts(&[vec![0, 2, 4], vec![0, 2, 5]]);
        assert_eq!(counts.covered, 5);
        assert_eq!(counts.repeated, 1);
        assert_eq!(e.evaluate(&[vec![0, 2, 4], vec![0, 2, 5]]), 4);
    }

    #[test]
    fn test_disjoint_rows_add_up() {
        let e = evaluator();
        assert_eq!(e.evaluate(&[vec![0, 2, 4], vec![1, 3, 5]]), 6);
    }

    #[test]
    fn test_full_pairwise_suite_scores_every_cross_pair() {
        // Two binary factors: the 4-row full product covers all 4 pairs once.
        let e = PairwiseFitness::new(&FactorModel::from_infos(build_factor_infos(2, 2)));
        let rows = vec![vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3]];
        assert_eq!(e.evaluate(&rows), 4);
    }

    #[test]
    fn test_empty_rows() {
        let e = evaluator();
        assert_eq!(e.evaluate(&[]), 0);
        assert_eq!(e.evaluate(&[vec![0]]), 0);
    }

    #[test]
    fn test_adding_new_pairs_never_lowers_fitness() {
        let e = evaluator();
        let base = vec![vec![0, 2, 4]];
        let mut extended = base.clone();
        extended.push(vec![1, 3, 5]);
        assert!(e.evaluate(&extended) >= e.evaluate(&base));
    }

    proptest! {
        #[test]
        fn prop_fitness_bounded_by_pairs_seen(
            rows in proptest::collection::vec(
                (0usize..2, 2usize..4, 4usize..6).prop_map(|(a, b, c)| vec![a, b, c]),
                0..20,
            )
        ) {
            let e = evaluator();
            let counts = e.pair_counts(&rows);
            prop_assert!(counts.repeated <= counts.covered);
            prop_assert!(counts.covered <= 12);
            prop_assert!(e.evaluate(&rows) <= (rows.len() * 3) as u64);
        }
    }
}
