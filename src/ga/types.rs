//! Chromosome and population representation.
//!
//! A [`Chromosome`] is one candidate test suite: a fixed number of rows,
//! each row holding one encoded level per factor. Chromosomes are plain
//! values; operators clone before modifying, so parents never share row
//! storage with their children.

use super::fitness::PairwiseFitness;
use crate::factor::FactorModel;
use rand::Rng;
use rayon::prelude::*;

/// Fitness score: distinct value pairs covered minus pairs covered twice or
/// more. Higher is better.
pub type Fitness = u64;

/// One test row: an encoded level per factor, in factor order.
pub type TestCase = Vec<usize>;

/// A candidate test suite and its cached fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    rows: Vec<TestCase>,
    fitness: Fitness,
}

impl Chromosome {
    /// Wraps rows with an unevaluated (zero) fitness.
    pub fn new(rows: Vec<TestCase>) -> Self {
        Self { rows, fitness: 0 }
    }

    /// Creates a chromosome of `test_case_size` uniformly random rows.
    pub fn random<R: Rng + ?Sized>(model: &FactorModel, test_case_size: usize, rng: &mut R) -> Self {
        Self::new(
            (0..test_case_size)
                .map(|_| model.generate_row(rng))
                .collect(),
        )
    }

    pub fn rows(&self) -> &[TestCase] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [TestCase] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<TestCase> {
        self.rows
    }

    /// Fitness from the last evaluation pass.
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = fitness;
    }
}

/// Fitness summary of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub best: Fitness,
    pub worst: Fitness,
    pub mean: f64,
}

/// Ordered collection of chromosomes.
///
/// After [`evaluate`](Population::evaluate) the chromosomes are sorted by
/// descending fitness, so index 0 is always the current best. Elitism and
/// selection rely on that order.
#[derive(Debug, Clone)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Generates `size` random chromosomes. They are not evaluated yet.
    pub fn generate<R: Rng + ?Sized>(
        model: &FactorModel,
        size: usize,
        test_case_size: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            chromosomes: (0..size)
                .map(|_| Chromosome::random(model, test_case_size, rng))
                .collect(),
        }
    }

    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Scores every chromosome, then sorts by descending fitness.
    ///
    /// Scoring runs on the rayon pool when `parallel` is set; each task
    /// touches only its own chromosome. The sort is stable.
    pub fn evaluate(&mut self, fitness: &PairwiseFitness, parallel: bool) {
        if parallel {
            self.chromosomes.par_iter_mut().for_each(|c| {
                let f = fitness.evaluate(c.rows());
                c.set_fitness(f);
            });
        } else {
            for c in self.chromosomes.iter_mut() {
                let f = fitness.evaluate(c.rows());
                c.set_fitness(f);
            }
        }
        self.chromosomes
            .sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn as_slice(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// The current best chromosome.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &Chromosome {
        self.chromosomes
            .first()
            .expect("population must not be empty")
    }

    /// Returns `true` if fitness never increases along the population.
    pub fn is_sorted(&self) -> bool {
        self.chromosomes
            .windows(2)
            .all(|w| w[0].fitness() >= w[1].fitness())
    }

    /// Best/worst/mean fitness, assuming the population is sorted.
    pub fn stats(&self, generation: usize) -> GenerationStats {
        let n = self.chromosomes.len().max(1) as f64;
        let sum: f64 = self.chromosomes.iter().map(|c| c.fitness() as f64).sum();
        GenerationStats {
            generation,
            best: self.chromosomes.first().map_or(0, Chromosome::fitness),
            worst: self.chromosomes.last().map_or(0, Chromosome::fitness),
            mean: sum / n,
        }
    }

    pub fn into_chromosomes(self) -> Vec<Chromosome> {
        self.chromosomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::{build_factor_infos, FactorModel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn model() -> FactorModel {
        FactorModel::from_infos(build_factor_infos(5, 4))
    }

    #[test]
    fn test_random_chromosome_shape() {
        let model = model();
        let mut rng = StdRng::seed_from_u64(42);
        let c = Chromosome::random(&model, 15, &mut rng);
        assert_eq!(c.rows().len(), 15);
        for row in c.rows() {
            assert_eq!(row.len(), 5);
            for (value, info) in row.iter().zip(model.infos()) {
                assert!(info.contains(*value));
            }
        }
        assert_eq!(c.fitness(), 0);
    }

    #[test]
    fn test_evaluate_sorts_descending() {
        let model = model();
        let mut rng = StdRng::seed_from_u64(7);
        let fitness = PairwiseFitness::new(&model);
        let mut pop = Population::generate(&model, 50, 30, &mut rng);
        pop.evaluate(&fitness, true);
        assert_eq!(pop.len(), 50);
        assert!(pop.is_sorted());
        for c in pop.as_slice() {
            assert_eq!(c.fitness(), fitness.evaluate(c.rows()));
        }
    }

    #[test]
    fn test_parallel_and_sequential_evaluation_agree() {
        let model = model();
        let fitness = PairwiseFitness::new(&model);
        let mut rng = StdRng::seed_from_u64(3);
        let pop = Population::generate(&model, 20, 10, &mut rng);

        let mut par = pop.clone();
        let mut seq = pop;
        par.evaluate(&fitness, true);
        seq.evaluate(&fitness, false);
        assert_eq!(par.as_slice(), seq.as_slice());
    }

    #[test]
    fn test_stats() {
        let mut a = Chromosome::new(vec![]);
        a.set_fitness(10);
        let mut b = Chromosome::new(vec![]);
        b.set_fitness(4);
        let pop = Population::from_chromosomes(vec![a, b]);
        let stats = pop.stats(3);
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.best, 10);
        assert_eq!(stats.worst, 4);
        assert!((stats.mean - 7.0).abs() < 1e-12);
    }
}
