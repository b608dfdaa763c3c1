//! Error type shared by the parser, the factor model and the GA engine.

use thiserror::Error;

/// Errors raised while reading factor definitions or starting a run.
///
/// Input errors come from the definition text; configuration errors are
/// caller contract violations detected before (or, for fitness collapse,
/// during) the evolutionary loop. Nothing here is retryable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read factor definitions: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `Name: level, level, ...`, missing `:`")]
    MissingSeparator { line: usize },

    #[error("line {line}: factor name is empty")]
    EmptyName { line: usize },

    #[error("line {line}: factor `{name}` is defined more than once")]
    DuplicateFactor { line: usize, name: String },

    #[error("invalid GA configuration: {0}")]
    InvalidConfig(String),

    #[error("factor model has no factors")]
    NoFactors,

    #[error("factor {index} has no levels (range [{min}, {max}))")]
    EmptyFactor { index: usize, min: usize, max: usize },

    #[error("total population fitness is zero; roulette selection needs positive fitness")]
    NonPositiveFitness,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
