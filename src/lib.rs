//! Pairwise-coverage test suite generation with a genetic algorithm.
//!
//! Given a set of parameters (factors), each with a finite list of levels,
//! the crate searches for a small suite of test rows that jointly covers as
//! many distinct level pairs as possible:
//!
//! - [`factor`]: parsing of `Name: level, level, ...` definitions and the
//!   integer encoding of levels
//! - [`ga`]: the genetic algorithm itself: chromosomes, the pairwise
//!   fitness, pluggable selection/crossover/mutation and the parallel
//!   evolutionary loop
//! - [`coverage`]: cross-factor coverage report for a finished suite
//!
//! # Example
//!
//! ```
//! use pairwise_ga::factor::{parse_factor_definitions, FactorModel};
//! use pairwise_ga::ga::{GaConfig, GaRunner};
//!
//! let defs = parse_factor_definitions("A: A1, A2\nB: B1, B2, B3\n")?;
//! let model = FactorModel::from_definitions(&defs);
//! let config = GaConfig::default().with_max_generations(50).with_seed(1);
//!
//! let result = GaRunner::new().run(&model, &config)?;
//! for row in result.rows() {
//!     assert!(model.decode(row).is_some());
//! }
//! # Ok::<(), pairwise_ga::Error>(())
//! ```

pub mod coverage;
mod error;
pub mod factor;
pub mod ga;

pub use error::{Error, Result};
