use thiserror::Error;

#[derive(Debug, Error)]
pub enum GerminalError {
    /// Mismatched shapes or dimensions anywhere in the pipeline: layer
    /// dimensions that do not chain, a genotype of the wrong length, loss
    /// vectors of unequal length.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The injected evaluator failed. Aborts the optimization run.
    #[error("evaluator failed: {0}")]
    Evaluation(Box<dyn std::error::Error>),
}
