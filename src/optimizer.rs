use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::creators::{DEFAULT_HIGH, DEFAULT_LOW};
use crate::mutators::DEFAULT_GAMMA;
use crate::{f, Creator, Genotype, GerminalError, Mutator};

/// Scores a candidate genotype. Lower is better. A failure here aborts the
/// whole run.
pub type Evaluator<'a> = Box<dyn FnMut(&Genotype) -> Result<f64, GerminalError> + 'a>;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Hyper {
    pub pool_size: usize,
    pub max_generations: usize,
    pub crossover_ratio: f64,
    pub mutation_ratio: f64,
    pub high: f64,
    pub low: f64,
    pub gamma: f64,
    pub verbose: bool,
}

impl Hyper {
    pub fn new() -> Hyper {
        Hyper {
            pool_size: 30,
            max_generations: 3000,
            crossover_ratio: 0.9,
            mutation_ratio: 0.3,
            high: DEFAULT_HIGH,
            low: DEFAULT_LOW,
            gamma: DEFAULT_GAMMA,
            verbose: false,
        }
    }
}

impl Default for Hyper {
    fn default() -> Hyper {
        Hyper::new()
    }
}

/// Steady-state genetic algorithm over opaque genotypes. One candidate per
/// generation; it displaces the worst pool member only when strictly better.
/// The pool and its cached errors are parallel arrays updated in place, one
/// index at a time.
pub struct Optimizer<'a> {
    hyper: Hyper,
    creator: Creator,
    mutator: Mutator,
    evaluator: Evaluator<'a>,
    pool: Vec<Genotype>,
    errors: Vec<f64>,
}

impl<'a> Optimizer<'a> {
    /// Seeds a pool of `hyper.pool_size` creator outputs and scores every
    /// member up front.
    pub fn new(
        hyper: Hyper,
        creator: Creator,
        mutator: Mutator,
        mut evaluator: Evaluator<'a>,
        rng: &mut dyn RngCore,
    ) -> Result<Optimizer<'a>, GerminalError> {
        if hyper.pool_size == 0 {
            return Err(GerminalError::Configuration(
                "pool size must be nonzero".to_string(),
            ));
        }

        let mut pool: Vec<Genotype> = Vec::with_capacity(hyper.pool_size);
        for _ in 0..hyper.pool_size {
            pool.push(creator(&mut *rng));
        }

        let mut errors: Vec<f64> = Vec::with_capacity(pool.len());
        for g in pool.iter() {
            errors.push(evaluator(g)?);
        }

        Ok(Optimizer {
            hyper,
            creator,
            mutator,
            evaluator,
            pool,
            errors,
        })
    }

    /// Runs exactly `hyper.max_generations` iterations and returns the best
    /// genotype in the pool. Calling it again continues from the current
    /// pool state.
    pub fn evolve(&mut self, rng: &mut dyn RngCore) -> Result<Genotype, GerminalError> {
        for generation in 0..self.hyper.max_generations {
            let mut candidate = (self.creator)(&mut *rng);

            // Whole-pool uniform crossover: each gene draws its donor
            // independently. Mutation sees the candidate as built so far,
            // not the finished individual.
            for j in 0..candidate.len() {
                if rng.gen::<f64>() < self.hyper.crossover_ratio {
                    let donor = rng.gen_range(0..self.pool.len());
                    candidate[j] = self.pool[donor][j];

                    if rng.gen::<f64>() < self.hyper.mutation_ratio {
                        let mutated = (self.mutator)(&candidate, &mut *rng);
                        candidate[j] = mutated[j];
                    }
                }
            }

            let candidate_error = (self.evaluator)(&candidate)?;

            let worst = f::argmax(&self.errors);
            if candidate_error < self.errors[worst] {
                self.pool[worst] = candidate;
                self.errors[worst] = candidate_error;
            }

            if self.hyper.verbose && (generation + 1) % 100 == 0 {
                println!(
                    "({}/{}) best error = {}",
                    generation + 1,
                    self.hyper.max_generations,
                    self.best_error()
                );
            }
        }

        Ok(self.pool[f::argmin(&self.errors)].clone())
    }

    pub fn pool(&self) -> &[Genotype] {
        &self.pool
    }

    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    pub fn best_error(&self) -> f64 {
        self.errors[f::argmin(&self.errors)]
    }
}
