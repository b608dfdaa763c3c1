//! Crossover and mutation operators over test-suite chromosomes.
//!
//! Both operators take their inputs by reference and return a fresh
//! [`Chromosome`]; parents are never modified.
//!
//! # Crossover Operators
//!
//! - [`SinglePointCrossover`]: one cut index shared by every row
//!
//! # Mutation Operators
//!
//! - [`PerGeneMutation`]: resample each cell independently with a fixed
//!   probability

use super::types::Chromosome;
use crate::factor::FactorModel;
use rand::Rng;

// ============================================================================
// Traits
// ============================================================================

/// Recombines two parents into one child.
pub trait CrossoverStrategy: Send + Sync {
    fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Chromosome;
}

/// Perturbs a copy of a chromosome.
pub trait MutationStrategy: Send + Sync {
    /// Returns a mutated copy of `chromosome`. `rate` is the per-gene
    /// mutation probability from the run configuration.
    fn mutate<R: Rng + ?Sized>(
        &self,
        chromosome: &Chromosome,
        model: &FactorModel,
        rate: f64,
        rng: &mut R,
    ) -> Chromosome;
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Draws one cut index `c` uniformly from `0..row_count`. In every row, the
/// child takes parent2's value at column positions `< c` and parent1's value
/// everywhere else. The cut is sized by the number of rows but compared
/// against column positions, so once `c` reaches the factor count the child
/// is a copy of parent2.
///
/// # Complexity
/// O(rows × factors)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinglePointCrossover;

impl CrossoverStrategy for SinglePointCrossover {
    fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Chromosome {
        let row_count = parent1.rows().len();
        if row_count == 0 {
            return Chromosome::new(Vec::new());
        }
        let cut = rng.random_range(0..row_count);

        let rows = parent1
            .rows()
            .iter()
            .zip(parent2.rows())
            .map(|(r1, r2)| {
                r1.iter()
                    .zip(r2)
                    .enumerate()
                    .map(|(i, (&a, &b))| if i < cut { b } else { a })
                    .collect()
            })
            .collect();
        Chromosome::new(rows)
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Per-gene mutation: every cell is independently replaced, with probability
/// `rate`, by a fresh uniform draw from its column's factor.
///
/// A replacement may draw the value the cell already had.
///
/// # Complexity
/// O(rows × factors)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerGeneMutation;

impl MutationStrategy for PerGeneMutation {
    fn mutate<R: Rng + ?Sized>(
        &self,
        chromosome: &Chromosome,
        model: &FactorModel,
        rate: f64,
        rng: &mut R,
    ) -> Chromosome {
        let mut child = Chromosome::new(chromosome.rows().to_vec());
        let infos = model.infos();
        for row in child.rows_mut() {
            for (value, info) in row.iter_mut().zip(infos) {
                if rng.random::<f64>() < rate {
                    *value = info.generate(rng);
                }
            }
        }
        child
    }
}

// ============================================================================
// Tests
// ============================================================================
