//! Pairwise coverage report for a finished suite.
//!
//! Unlike the fitness score, the report only counts pairs of values from two
//! *different* factors and does not penalise repeats: it answers "how many
//! of the required level pairs does this suite exercise?".

use crate::factor::FactorModel;
use crate::ga::TestCase;

/// Covered versus required cross-factor level pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageReport {
    pub covered: usize,
    pub total: usize,
}

impl CoverageReport {
    /// Fraction of required pairs covered; 1.0 when nothing is required.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.covered as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.covered == self.total
    }
}

/// Computes the cross-factor pair coverage of `rows`.
///
/// Values outside their column's factor range are ignored.
pub fn pair_coverage(model: &FactorModel, rows: &[TestCase]) -> CoverageReport {
    let infos = model.infos();
    let f = model.total();

    let mut total = 0;
    for (i, a) in infos.iter().enumerate() {
        for b in &infos[i + 1..] {
            total += a.range() * b.range();
        }
    }

    let mut seen = vec![false; f * f];
    let mut covered = 0;
    for row in rows {
        for i in 0..row.len().min(infos.len()) {
            if !infos[i].contains(row[i]) {
                continue;
            }
            for j in (i + 1)..row.len().min(infos.len()) {
                if !infos[j].contains(row[j]) {
                    continue;
                }
                let cell = &mut seen[row[i] * f + row[j]];
                if !*cell {
                    *cell = true;
                    covered += 1;
                }
            }
        }
    }

    CoverageReport { covered, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::build_factor_infos;

    #[test]
    fn test_full_product_is_complete() {
        let model = FactorModel::from_infos(build_factor_infos(2, 2));
        let rows = vec![vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3]];
        let report = pair_coverage(&model, &rows);
        assert_eq!(report, CoverageReport { covered: 4, total: 4 });
        assert!(report.is_complete());
        assert!((report.ratio() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_repeats_are_not_counted_twice() {
        let model = FactorModel::from_infos(build_factor_infos(3, 2));
        let rows = vec![vec![0, 2, 4], vec![0, 2, 4], vec![0, 2, 5]];
        let report = pair_coverage(&model, &rows);
        // (0,2) (0,4) (2,4) (0,5) (2,5)
        assert_eq!(report.covered, 5);
        assert_eq!(report.total, 12);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_known_orthogonal_array() {
        // L4(2^3): every pair of columns sees every level combination once
        let model = FactorModel::from_infos(build_factor_infos(3, 2));
        let rows = vec![
            vec![0, 2, 4],
            vec![0, 3, 5],
            vec![1, 2, 5],
            vec![1, 3, 4],
        ];
        assert!(pair_coverage(&model, &rows).is_complete());
    }

    #[test]
    fn test_out_of_range_values_ignored() {
        let model = FactorModel::from_infos(build_factor_infos(2, 2));
        let report = pair_coverage(&model, &[vec![2, 0]]);
        assert_eq!(report.covered, 0);
    }

    #[test]
    fn test_single_factor_requires_nothing() {
        let model = FactorModel::from_infos(build_factor_infos(1, 3));
        let report = pair_coverage(&model, &[vec![1]]);
        assert_eq!(report.total, 0);
        assert!((report.ratio() - 1.0).abs() < 1e-12);
    }
}
