use ndarray::Array1;
use ndarray_stats::QuantileExt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub enum Activations {
    Relu,
    Sigmoid,
    Tanh,
    Softmax,
}

impl Activations {
    pub fn forward(&self, x: Array1<f64>) -> Array1<f64> {
        match self {
            Activations::Relu => x.mapv_into(|v| {
                if v < 0. {
                    return 0.;
                }
                v
            }),
            Activations::Sigmoid => x.mapv_into(|v| 1. / (1. + (-v).exp())),
            Activations::Tanh => x.mapv_into(|v| v.tanh()),
            Activations::Softmax => softmax(x),
        }
    }
}

/// Softmax with the max shifted out before exponentiating, so large inputs
/// do not overflow `exp`. Agrees with the unshifted formulation wherever
/// that one is finite.
fn softmax(x: Array1<f64>) -> Array1<f64> {
    if x.is_empty() {
        return x;
    }

    let max = *x.max().unwrap();
    let exps = x.mapv_into(|v| (v - max).exp());
    let sum = exps.sum();
    exps / sum
}
