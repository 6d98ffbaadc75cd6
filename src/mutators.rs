use rand::{Rng, RngCore};

use crate::f::clamp;
use crate::{Genotype, Mutator};

pub const DEFAULT_GAMMA: f64 = 0.01;

/// Clamp-only mutator: every gene of the output is the input gene clamped
/// into `[low, high]`. `gamma` is accepted for signature parity with
/// [`real_jitter`] but contributes nothing here; use the jitter variant for
/// actual stochastic perturbation.
pub fn real(high: f64, low: f64, _gamma: f64) -> Mutator {
    Box::new(move |g: &Genotype, _rng: &mut dyn RngCore| {
        g.iter().map(|x| clamp(*x, high, low)).collect()
    })
}

/// Jitter mutator: each gene is shifted by a uniform offset in `[-r, r]`
/// with `r = gamma * |high - low|`, then clamped into `[low, high]`.
pub fn real_jitter(high: f64, low: f64, gamma: f64) -> Mutator {
    let r = (high - low).abs() * gamma;
    Box::new(move |g: &Genotype, rng: &mut dyn RngCore| {
        g.iter()
            .map(|x| {
                let jitter = if r > 0. { rng.gen_range(-r..r) } else { 0. };
                clamp(x + jitter, high, low)
            })
            .collect()
    })
}
