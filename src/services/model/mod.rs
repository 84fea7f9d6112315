// Inference Model Contract
// The engine consumes the statistical classifier only through this trait; any
// model producing a fake-probability and ranked contributing terms plugs in.

pub mod naive_bayes;
pub mod store;
pub mod training_data;

pub use naive_bayes::TfidfNaiveBayes;
pub use store::{ModelArtifact, ModelStore};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One contributing term with its weight (contribution magnitude, >= 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model has no vocabulary; training produced no usable features")]
    EmptyVocabulary,
}

/// Inference contract for the probabilistic text classifier.
///
/// Implementations must be immutable after construction; the engine shares
/// one instance across calls and threads.
pub trait InferenceModel: Send + Sync {
    /// Probability in [0, 1] that the normalized text is fake or misleading.
    fn predict_proba(&self, normalized_text: &str) -> f64;

    /// Up to `k` contributing terms for the text, weight descending. A
    /// failure here degrades to an empty feature list downstream; it never
    /// aborts the overall analysis.
    fn top_terms(&self, normalized_text: &str, k: usize) -> Result<Vec<TermWeight>, ModelError>;
}
