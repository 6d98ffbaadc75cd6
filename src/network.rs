use std::error::Error;
use std::rc::Rc;

use ndarray::{Array1, Array2};
use rand::RngCore;

use crate::layers::{Layer, Linear};
use crate::optimizer::{Hyper, Optimizer};
use crate::{creators, mutators, Genotype, GerminalError};

/// Caller-supplied fitness callback. Lower is better. The boxed error is
/// wrapped into [`GerminalError::Evaluation`] and aborts the run.
pub type NetworkEvaluator = Rc<dyn Fn(&Network) -> Result<f64, Box<dyn Error>>>;

/// An ordered feed-forward pipeline of layers plus the evaluator used to
/// score it. The genotype of a network is the row-major concatenation of
/// every linear layer's weight matrix, in layer order.
#[derive(Clone)]
pub struct Network {
    layers: Vec<Layer>,
    weights_total: usize,
    evaluator: NetworkEvaluator,
    error: Option<f64>,
}

impl Network {
    /// Composes layers into a network. Consecutive linear layers must chain
    /// dimensionally; activation layers pass their input size through.
    pub fn new(layers: Vec<Layer>, evaluator: NetworkEvaluator) -> Result<Network, GerminalError> {
        let mut d_prev: Option<usize> = None;
        for layer in layers.iter() {
            if let Layer::Linear(l) = layer {
                if let Some(d) = d_prev {
                    if l.d_in() != d {
                        return Err(GerminalError::Configuration(format!(
                            "layer expects {} inputs but is fed {}",
                            l.d_in(),
                            d
                        )));
                    }
                }
                d_prev = Some(l.d_out());
            }
        }

        let weights_total = layers.iter().map(|l| l.total_weights()).sum();

        Ok(Network {
            layers,
            weights_total,
            evaluator,
            error: None,
        })
    }

    pub fn forward(&self, xv: Vec<f64>) -> Array1<f64> {
        let x = Array1::from(xv);
        self.layers.iter().fold(x, |x, layer| layer.forward(x))
    }

    /// Rebuilds a fresh network from a flat genotype: every linear layer is
    /// reseeded from its window of the genotype, activation layers carry
    /// over, the evaluator is shared. The template network is untouched.
    pub fn incarnate(&self, genotype: &Genotype) -> Result<Network, GerminalError> {
        if genotype.len() != self.weights_total {
            return Err(GerminalError::Configuration(format!(
                "genotype holds {} genes, network needs {}",
                genotype.len(),
                self.weights_total
            )));
        }

        let mut offset = 0;
        let mut layers: Vec<Layer> = Vec::with_capacity(self.layers.len());
        for layer in self.layers.iter() {
            match layer {
                Layer::Activation(a) => layers.push(Layer::Activation(*a)),
                Layer::Linear(l) => {
                    let window = genotype[offset..offset + l.total_weights()].to_vec();
                    offset += l.total_weights();

                    let w = Array2::from_shape_vec((l.d_out(), l.row_width()), window)
                        .map_err(|e| GerminalError::Configuration(e.to_string()))?;
                    layers.push(Layer::Linear(Linear::with_weights(
                        l.d_in(),
                        l.d_out(),
                        l.bias(),
                        w,
                    )?));
                }
            }
        }

        Ok(Network {
            layers,
            weights_total: self.weights_total,
            evaluator: Rc::clone(&self.evaluator),
            error: None,
        })
    }

    /// Inverse of [`Network::incarnate`]: the flat weight vector of every
    /// linear layer, in layer order.
    pub fn flatten(&self) -> Genotype {
        self.layers
            .iter()
            .filter_map(|layer| match layer {
                Layer::Linear(l) => Some(l.weights().iter().copied().collect::<Vec<f64>>()),
                Layer::Activation(_) => None,
            })
            .flatten()
            .collect()
    }

    /// Searches weight space with a steady-state genetic algorithm, then
    /// replaces this network's layers with the best phenotype found and
    /// scores it. Returns the final error.
    pub fn evolve(&mut self, hyper: &Hyper, rng: &mut dyn RngCore) -> Result<f64, GerminalError> {
        let creator = creators::real(self.weights_total, hyper.high, hyper.low);
        let mutator = mutators::real(hyper.high, hyper.low, hyper.gamma);

        let template: &Network = self;
        let evaluate = move |g: &Genotype| -> Result<f64, GerminalError> {
            let phenotype = template.incarnate(g)?;
            (*template.evaluator)(&phenotype).map_err(GerminalError::Evaluation)
        };

        let mut optimizer = Optimizer::new(
            hyper.clone(),
            creator,
            mutator,
            Box::new(evaluate),
            &mut *rng,
        )?;
        let best = optimizer.evolve(&mut *rng)?;
        drop(optimizer);

        let next = self.incarnate(&best)?;
        *self = next;

        let error = (*self.evaluator)(self).map_err(GerminalError::Evaluation)?;
        self.error = Some(error);

        Ok(error)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn weights_total(&self) -> usize {
        self.weights_total
    }

    /// Error from the last [`Network::evolve`] run, if any.
    pub fn error(&self) -> Option<f64> {
        self.error
    }
}
