//! Parent selection strategies.
//!
//! A [`SelectionStrategy`] is prepared once per generation from the sorted
//! population and yields a [`Selector`]. The selector snapshots the fitness
//! values it needs, so it is `Send + Sync` and is shared by every
//! reproduction task; each task passes in its own RNG.
//!
//! All strategies assume **maximisation** (higher fitness = better).
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::types::{Chromosome, Fitness};
use crate::error::{Error, Result};
use rand::Rng;

/// Draws parent indices from a prepared population.
pub trait Selector: Send + Sync {
    /// Returns the index of the selected chromosome.
    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> usize;
}

/// Builds a [`Selector`] for one generation.
pub trait SelectionStrategy: Send + Sync {
    type Selector: Selector;

    /// Prepares a selector over `population`.
    ///
    /// # Errors
    /// Strategies may reject populations they cannot sample from, e.g.
    /// roulette with zero total fitness.
    fn make_selector(&self, population: &[Chromosome]) -> Result<Self::Selector>;
}

/// Fitness-proportionate (roulette wheel) selection.
///
/// # Complexity
/// O(n) to prepare, O(n) per selection (linear scan)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roulette;

/// Prepared roulette wheel.
#[derive(Debug, Clone)]
pub struct RouletteSelector {
    fitnesses: Vec<Fitness>,
    total: Fitness,
}

impl SelectionStrategy for Roulette {
    type Selector = RouletteSelector;

    fn make_selector(&self, population: &[Chromosome]) -> Result<RouletteSelector> {
        let fitnesses: Vec<Fitness> = population.iter().map(Chromosome::fitness).collect();
        let total: Fitness = fitnesses.iter().sum();
        if total == 0 {
            return Err(Error::NonPositiveFitness);
        }
        Ok(RouletteSelector { fitnesses, total })
    }
}

impl Selector for RouletteSelector {
    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let mut r = rng.random_range(1..=self.total);
        for (i, &f) in self.fitnesses.iter().enumerate() {
            if r <= f {
                return i;
            }
            r -= f;
        }
        // unreachable while total == sum(fitnesses)
        0
    }
}

/// Tournament selection: sample `size` chromosomes with replacement and keep
/// the fittest; ties go to the first one drawn.
///
/// # Complexity
/// O(size) per selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tournament {
    pub size: usize,
}

impl Tournament {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self { size: 10 }
    }
}

/// Prepared tournament.
#[derive(Debug, Clone)]
pub struct TournamentSelector {
    fitnesses: Vec<Fitness>,
    size: usize,
}

impl SelectionStrategy for Tournament {
    type Selector = TournamentSelector;

    fn make_selector(&self, population: &[Chromosome]) -> Result<TournamentSelector> {
        if population.is_empty() {
            return Err(Error::InvalidConfig(
                "cannot select from an empty population".into(),
            ));
        }
        Ok(TournamentSelector {
            fitnesses: population.iter().map(Chromosome::fitness).collect(),
            size: self.size.max(1),
        })
    }
}

impl Selector for TournamentSelector {
    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let n = self.fitnesses.len();
        let mut best = rng.random_range(0..n);
        for _ in 1..self.size {
            let idx = rng.random_range(0..n);
            if self.fitnesses[idx] > self.fitnesses[best] {
                best = idx;
            }
        }
        best
    }
}
