mod activation;
mod linear;

pub use activation::Activations;
pub use linear::Linear;

use ndarray::Array1;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::creators::{DEFAULT_HIGH, DEFAULT_LOW};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum Layer {
    Linear(Linear),
    Activation(Activations),
}

impl Layer {
    pub fn linear(d_in: usize, d_out: usize, bias: bool, rng: &mut dyn RngCore) -> Layer {
        Layer::Linear(Linear::new(d_in, d_out, bias, DEFAULT_HIGH, DEFAULT_LOW, rng))
    }

    pub fn relu() -> Layer {
        Layer::Activation(Activations::Relu)
    }

    pub fn sigmoid() -> Layer {
        Layer::Activation(Activations::Sigmoid)
    }

    pub fn tanh() -> Layer {
        Layer::Activation(Activations::Tanh)
    }

    pub fn softmax() -> Layer {
        Layer::Activation(Activations::Softmax)
    }

    pub fn forward(&self, x: Array1<f64>) -> Array1<f64> {
        match self {
            Layer::Linear(l) => l.forward(&x),
            Layer::Activation(a) => a.forward(x),
        }
    }

    pub fn total_weights(&self) -> usize {
        match self {
            Layer::Linear(l) => l.total_weights(),
            Layer::Activation(_) => 0,
        }
    }
}
