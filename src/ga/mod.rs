//! Genetic Algorithm engine for pairwise test-suite generation.
//!
//! A chromosome is a whole candidate test suite. The engine evolves a
//! fixed-size population of suites towards maximal pairwise coverage.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, elites, mutation rate, ...)
//! - [`GaRunner`]: Executes the evolutionary loop, generic over its operators
//! - [`GaResult`]: Best suite found plus run statistics
//! - [`PairwiseFitness`]: The pairwise-coverage score
//!
//! # Operator Traits
//!
//! - [`SelectionStrategy`] / [`Selector`]: [`Roulette`], [`Tournament`]
//! - [`CrossoverStrategy`]: [`SinglePointCrossover`]
//! - [`MutationStrategy`]: [`PerGeneMutation`]
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Shiba, Tsuchiya & Kikuno (2004), "Using Artificial Life Techniques to
//!   Generate Test Cases for Combinatorial Testing"

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{PairCounts, PairwiseFitness};
pub use operators::{CrossoverStrategy, MutationStrategy, PerGeneMutation, SinglePointCrossover};
pub use runner::{GaResult, GaRunner};
pub use selection::{
    Roulette, RouletteSelector, SelectionStrategy, Selector, Tournament, TournamentSelector,
};
pub use types::{Chromosome, Fitness, GenerationStats, Population, TestCase};
