//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the search:
//! initialization → evaluation → (elitism | selection → crossover → mutation
//! | fresh chromosome) → evaluation → repeat for a fixed number of
//! generations.

use super::config::GaConfig;
use super::fitness::PairwiseFitness;
use super::operators::{CrossoverStrategy, MutationStrategy, PerGeneMutation, SinglePointCrossover};
use super::selection::{Roulette, SelectionStrategy, Selector};
use super::types::{Chromosome, Fitness, GenerationStats, Population, TestCase};
use crate::error::Result;
use crate::factor::FactorModel;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome of the final population.
    pub best: Chromosome,

    /// Same as `best.fitness()`.
    pub best_fitness: Fitness,

    /// Number of generations executed (always `max_generations`).
    pub generations: usize,

    /// Seed the run used; pass it back through [`GaConfig::with_seed`] to
    /// reproduce the run.
    pub seed: u64,

    /// Best fitness of the initial population followed by the best fitness
    /// after each generation.
    pub fitness_history: Vec<Fitness>,

    /// Statistics of the final population.
    pub final_stats: GenerationStats,
}

impl GaResult {
    /// Rows of the best suite.
    pub fn rows(&self) -> &[TestCase] {
        self.best.rows()
    }

    pub fn into_rows(self) -> Vec<TestCase> {
        self.best.into_rows()
    }
}

/// Executes the GA evolutionary loop.
///
/// The three genetic operators are type parameters so that any
/// [`SelectionStrategy`], [`CrossoverStrategy`] and [`MutationStrategy`]
/// can be plugged in. [`GaRunner::new`] uses roulette selection,
/// single-point crossover and per-gene mutation.
///
/// # Usage
///
/// ```
/// use pairwise_ga::factor::{build_factor_infos, FactorModel};
/// use pairwise_ga::ga::{GaConfig, GaRunner, Tournament};
///
/// let model = FactorModel::from_infos(build_factor_infos(3, 2));
/// let config = GaConfig::default()
///     .with_max_generations(20)
///     .with_seed(42);
///
/// let result = GaRunner::new()
///     .with_selection(Tournament::default())
///     .run(&model, &config)
///     .unwrap();
/// assert_eq!(result.rows().len(), config.test_case_size);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GaRunner<S = Roulette, C = SinglePointCrossover, M = PerGeneMutation> {
    selection: S,
    crossover: C,
    mutation: M,
}

impl GaRunner {
    /// Runner with the default operators.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, C, M> GaRunner<S, C, M>
where
    S: SelectionStrategy,
    C: CrossoverStrategy,
    M: MutationStrategy,
{
    /// Runner with explicit operators.
    pub fn with_operators(selection: S, crossover: C, mutation: M) -> Self {
        Self {
            selection,
            crossover,
            mutation,
        }
    }

    /// Replaces the selection strategy.
    pub fn with_selection<S2: SelectionStrategy>(self, selection: S2) -> GaRunner<S2, C, M> {
        GaRunner {
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
        }
    }

    /// Replaces the crossover strategy.
    pub fn with_crossover<C2: CrossoverStrategy>(self, crossover: C2) -> GaRunner<S, C2, M> {
        GaRunner {
            selection: self.selection,
            crossover,
            mutation: self.mutation,
        }
    }

    /// Replaces the mutation strategy.
    pub fn with_mutation<M2: MutationStrategy>(self, mutation: M2) -> GaRunner<S, C, M2> {
        GaRunner {
            selection: self.selection,
            crossover: self.crossover,
            mutation,
        }
    }

    /// Runs the search for exactly `config.max_generations` generations.
    ///
    /// # Errors
    /// - [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    ///   `config` fails [`GaConfig::validate`]
    /// - [`Error::NoFactors`](crate::Error::NoFactors) /
    ///   [`Error::EmptyFactor`](crate::Error::EmptyFactor) if `model` fails
    ///   [`FactorModel::validate`]
    /// - any error of the selection strategy, e.g.
    ///   [`Error::NonPositiveFitness`](crate::Error::NonPositiveFitness) for
    ///   roulette over a population that covers no pair at all
    pub fn run(&self, model: &FactorModel, config: &GaConfig) -> Result<GaResult> {
        config.validate()?;
        model.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let fitness = PairwiseFitness::new(model);

        debug!(
            "starting run: {} factors, alphabet {}, population {}, {} rows, {} generations, seed {}",
            model.len(),
            fitness.total(),
            config.population_size,
            config.test_case_size,
            config.max_generations,
            seed
        );

        // 1. Initialize and evaluate
        let mut population = Population::generate(
            model,
            config.population_size,
            config.test_case_size,
            &mut rng,
        );
        population.evaluate(&fitness, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(population.best().fitness());

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            population = self.next_generation(&population, model, config, &mut rng)?;
            population.evaluate(&fitness, config.parallel);
            fitness_history.push(population.best().fitness());

            if reports_at(gen, config.print_step) {
                let stats = population.stats(gen);
                info!(
                    "generation {}: fitness avg {:.2}, max {}, min {}",
                    stats.generation, stats.mean, stats.best, stats.worst
                );
            }
        }

        let final_stats = population.stats(config.max_generations);
        let best = population.best().clone();
        info!(
            "finished {} generations, best fitness {}",
            config.max_generations,
            best.fitness()
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            seed,
            fitness_history,
            final_stats,
        })
    }

    /// Builds the next (unevaluated) population from a sorted one.
    ///
    /// Slot `i` is an elite copy for `i < elite_size`, a fresh random
    /// chromosome for the last slot, and a mutated crossover child
    /// otherwise. Every slot gets its own RNG seeded from `rng`, so the
    /// outcome does not depend on thread scheduling.
    fn next_generation(
        &self,
        current: &Population,
        model: &FactorModel,
        config: &GaConfig,
        rng: &mut StdRng,
    ) -> Result<Population> {
        let parents = current.as_slice();
        let selector = self.selection.make_selector(parents)?;
        let size = parents.len();
        let seeds: Vec<u64> = (0..size).map(|_| rng.random()).collect();

        let breed = |(slot, seed): (usize, u64)| -> Chromosome {
            let mut rng = StdRng::seed_from_u64(seed);
            if slot + 1 >= size {
                Chromosome::random(model, config.test_case_size, &mut rng)
            } else if slot < config.elite_size {
                parents[slot].clone()
            } else {
                let p1 = &parents[selector.select(&mut rng)];
                let p2 = &parents[selector.select(&mut rng)];
                let child = self.crossover.crossover(p1, p2, &mut rng);
                self.mutation
                    .mutate(&child, model, config.mutation_rate, &mut rng)
            }
        };

        let chromosomes: Vec<Chromosome> = if config.parallel {
            seeds.into_par_iter().enumerate().map(breed).collect()
        } else {
            seeds.into_iter().enumerate().map(breed).collect()
        };

        Ok(Population::from_chromosomes(chromosomes))
    }
}

/// Whether generation `gen` (0-based) logs population statistics.
fn reports_at(gen: usize, print_step: usize) -> bool {
    print_step > 0 && gen % print_step == 0
}

// ============================================================================
// Tests
// ============================================================================
