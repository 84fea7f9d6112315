// Veracity Core Services

pub mod analysis;
pub mod model;
pub mod text_processor;

pub use analysis::CredibilityEngine;
pub use model::{InferenceModel, ModelStore, TfidfNaiveBayes};
pub use text_processor::{calculate_readability_metrics, normalize_text};
