use rand::{Rng, RngCore};

use crate::{Creator, Genotype};

pub const DEFAULT_HIGH: f64 = 4.0;
pub const DEFAULT_LOW: f64 = -4.0;

/// Uniform real-valued genotype factory: length `n`, genes in `[low, high)`.
pub fn real(n: usize, high: f64, low: f64) -> Creator {
    Box::new(move |rng: &mut dyn RngCore| {
        (0..n)
            .map(|_| rng.gen_range(low..high))
            .collect::<Genotype>()
    })
}
