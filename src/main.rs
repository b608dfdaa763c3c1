//! pairwise-ga CLI: generate a pairwise test suite from a factor file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use pairwise_ga::coverage::pair_coverage;
use pairwise_ga::factor::{read_factor_definitions, FactorModel};
use pairwise_ga::ga::{GaConfig, GaResult, GaRunner, Tournament};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectionKind {
    Roulette,
    Tournament,
}

/// Generate a pairwise-coverage test suite with a genetic algorithm.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Factor definition file, one `Name: level, level, ...` per line.
    file: PathBuf,

    /// Number of candidate suites per generation.
    #[arg(long, default_value_t = 50)]
    population_size: usize,

    /// Number of best suites carried over unchanged.
    #[arg(long, default_value_t = 15)]
    elite_size: usize,

    /// Per-gene mutation probability.
    #[arg(long, default_value_t = 0.01)]
    mutation_rate: f64,

    /// Rows per generated suite.
    #[arg(long, default_value_t = 15)]
    test_case_size: usize,

    /// Number of generations to run.
    #[arg(long, default_value_t = 20_000)]
    generations: usize,

    /// Log population statistics every N generations (0 disables).
    #[arg(long, default_value_t = 100)]
    print_step: usize,

    /// Parent selection strategy.
    #[arg(long, value_enum, default_value_t = SelectionKind::Roulette)]
    selection: SelectionKind,

    /// Sample size for tournament selection.
    #[arg(long, default_value_t = 10)]
    tournament_size: usize,

    /// Random seed; a random one is used and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Run on a single thread.
    #[arg(long)]
    sequential: bool,

    /// Print level names instead of encoded values.
    #[arg(long)]
    decode: bool,
}

impl Cli {
    fn ga_config(&self) -> GaConfig {
        let mut config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_elite_size(self.elite_size)
            .with_test_case_size(self.test_case_size)
            .with_max_generations(self.generations)
            .with_print_step(self.print_step)
            .with_parallel(!self.sequential);
        // not clamped: out-of-range rates must fail validation
        config.mutation_rate = self.mutation_rate;
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let definitions = read_factor_definitions(&cli.file)
        .with_context(|| format!("failed to load factors from {}", cli.file.display()))?;
    let model = FactorModel::from_definitions(&definitions);
    let config = cli.ga_config();

    let result = match cli.selection {
        SelectionKind::Roulette => GaRunner::new().run(&model, &config),
        SelectionKind::Tournament => GaRunner::new()
            .with_selection(Tournament::new(cli.tournament_size))
            .run(&model, &config),
    }
    .context("test suite generation failed")?;

    report(&model, &result, cli.decode);
    Ok(())
}

fn report(model: &FactorModel, result: &GaResult, decode: bool) {
    let coverage = pair_coverage(model, result.rows());
    info!(
        "seed {}: fitness {}, covered {}/{} factor pairs ({:.1}%)",
        result.seed,
        result.best_fitness,
        coverage.covered,
        coverage.total,
        coverage.ratio() * 100.0
    );

    if decode {
        for row in result.rows() {
            if let Some(levels) = model.decode(row) {
                let line: Vec<String> = levels
                    .iter()
                    .map(|(factor, level)| format!("{factor}={level}"))
                    .collect();
                println!("{}", line.join(", "));
            }
        }
    } else {
        println!("{:?}", result.rows());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairwise_ga::Error;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["pairwise-ga", "factors.txt"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_match_ga_config() {
        let config = parse(&[]).ga_config();
        assert_eq!(config, GaConfig::default());
    }

    #[test]
    fn test_out_of_range_mutation_rate_is_rejected() {
        let config = parse(&["--mutation-rate", "2.0"]).ga_config();
        assert!((config.mutation_rate - 2.0).abs() < 1e-12);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_flags_reach_config() {
        let config = parse(&[
            "--population-size",
            "30",
            "--elite-size",
            "5",
            "--mutation-rate",
            "0.2",
            "--seed",
            "9",
            "--sequential",
        ])
        .ga_config();
        assert_eq!(config.population_size, 30);
        assert_eq!(config.elite_size, 5);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert_eq!(config.seed, Some(9));
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }
}
