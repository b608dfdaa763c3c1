//! GA configuration.
//!
//! [`GaConfig`] holds every numeric parameter of the evolutionary loop.
//! The defaults are the classic settings: population 50, 15 elites,
//! mutation probability 0.01, 15 rows per suite, 20 000 generations and a
//! statistics line every 100 generations.

use crate::error::{Error, Result};

/// Configuration for a pairwise test-suite search.
///
/// # Defaults
///
/// ```
/// use pairwise_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.elite_size, 15);
/// assert_eq!(config.max_generations, 20_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use pairwise_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_elite_size(10)
///     .with_test_case_size(12)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of chromosomes in the population. Fixed for the whole run.
    pub population_size: usize,

    /// Number of top chromosomes copied unchanged into the next generation.
    ///
    /// Must be smaller than `population_size`: the last slot is always a
    /// freshly generated chromosome.
    pub elite_size: usize,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of rows (test cases) in every candidate suite.
    pub test_case_size: usize,

    /// Number of generations to run. There is no early stop.
    pub max_generations: usize,

    /// Log population statistics every `print_step` generations.
    ///
    /// 0 disables periodic statistics.
    pub print_step: usize,

    /// Whether to evaluate and reproduce in parallel using rayon.
    ///
    /// Results for a given seed are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            elite_size: 15,
            mutation_rate: 0.01,
            test_case_size: 15,
            max_generations: 20_000,
            print_step: 100,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of rows per suite.
    pub fn with_test_case_size(mut self, n: usize) -> Self {
        self.test_case_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the statistics interval (0 to disable).
    pub fn with_print_step(mut self, step: usize) -> Self {
        self.print_step = step;
        self
    }

    /// Enables or disables parallel evaluation and reproduction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`Error::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.elite_size >= self.population_size {
            return Err(Error::InvalidConfig(
                "elite_size must be smaller than population_size".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfig(
                "mutation_rate must be within [0, 1]".into(),
            ));
        }
        if self.test_case_size == 0 {
            return Err(Error::InvalidConfig(
                "test_case_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(Error::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.elite_size, 15);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert_eq!(config.test_case_size, 15);
        assert_eq!(config.max_generations, 20_000);
        assert_eq!(config.print_step, 100);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_elite_size(4)
            .with_mutation_rate(0.05)
            .with_test_case_size(8)
            .with_max_generations(300)
            .with_print_step(0)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.elite_size, 4);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.test_case_size, 8);
        assert_eq!(config.max_generations, 300);
        assert_eq!(config.print_step, 0);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert!((GaConfig::default().with_mutation_rate(2.0).mutation_rate - 1.0).abs() < 1e-12);
        assert!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate.abs() < 1e-12);
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1).with_elite_size(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_elite_fills_population() {
        let config = GaConfig::default().with_population_size(10).with_elite_size(10);
        assert!(config.validate().is_err());
        let config = GaConfig::default().with_population_size(10).with_elite_size(9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unclamped_rate() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_rows_and_generations() {
        assert!(GaConfig::default().with_test_case_size(0).validate().is_err());
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial_config() {
        let config: GaConfig =
            serde_json::from_str(r#"{ "population_size": 30, "seed": 9 }"#).unwrap();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.elite_size, 15);
    }
}
