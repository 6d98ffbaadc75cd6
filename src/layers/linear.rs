use ndarray::{s, Array1, Array2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::GerminalError;

/// Fully connected transform. One weight row per output unit; when `bias`
/// is set each row carries a trailing bias entry, so rows are
/// `d_in + 1` wide.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Linear {
    d_in: usize,
    d_out: usize,
    bias: bool,
    w: Array2<f64>,
}

impl Linear {
    pub fn new(
        d_in: usize,
        d_out: usize,
        bias: bool,
        high: f64,
        low: f64,
        rng: &mut dyn RngCore,
    ) -> Linear {
        let width = d_in + bias as usize;
        let w = Array2::random_using((d_out, width), Uniform::new(low, high), rng);

        Linear {
            d_in,
            d_out,
            bias,
            w,
        }
    }

    pub fn with_weights(
        d_in: usize,
        d_out: usize,
        bias: bool,
        w: Array2<f64>,
    ) -> Result<Linear, GerminalError> {
        let width = d_in + bias as usize;
        if w.nrows() != d_out || w.ncols() != width {
            return Err(GerminalError::Configuration(format!(
                "seed weights shaped {:?}, layer needs ({}, {})",
                w.shape(),
                d_out,
                width
            )));
        }

        Ok(Linear {
            d_in,
            d_out,
            bias,
            w,
        })
    }

    pub fn forward(&self, x: &Array1<f64>) -> Array1<f64> {
        let wx = self.w.slice(s![.., ..self.d_in]).dot(x);
        if self.bias {
            wx + &self.w.column(self.d_in)
        } else {
            wx
        }
    }

    pub fn total_weights(&self) -> usize {
        self.w.len()
    }

    pub fn row_width(&self) -> usize {
        self.d_in + self.bias as usize
    }

    pub fn d_in(&self) -> usize {
        self.d_in
    }

    pub fn d_out(&self) -> usize {
        self.d_out
    }

    pub fn bias(&self) -> bool {
        self.bias
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.w
    }
}
