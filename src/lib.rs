pub mod creators;
mod error;
pub mod f;
pub mod layers;
pub mod loss;
pub mod mutators;
mod network;
mod optimizer;

pub use error::GerminalError;
pub use layers::{Activations, Layer, Linear};
pub use network::{Network, NetworkEvaluator};
pub use optimizer::{Evaluator, Hyper, Optimizer};

use rand::RngCore;

/// Flat encoding of every trainable weight in a network, in layer order.
pub type Genotype = Vec<f64>;

/// Zero-state genotype factory. Every invocation yields a genotype of the
/// same length; only the gene values depend on the RNG.
pub type Creator = Box<dyn Fn(&mut dyn RngCore) -> Genotype>;

/// Produces a perturbed copy of a genotype. The genotype argument may be
/// partially constructed by the caller; mutators must not assume it is a
/// finished individual.
pub type Mutator = Box<dyn Fn(&Genotype, &mut dyn RngCore) -> Genotype>;
