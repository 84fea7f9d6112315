// Analysis Module
// Credibility-analysis heuristics organized into specialized submodules:
// - lexicons: fixed pattern lexicons and substring matching
// - content_type: rule cascade labeling news/opinion/satire/clickbait
// - explainer: human-readable explanations for model features
// - engine: the decision composer producing the final verdict

pub mod content_type;
pub mod engine;
pub mod explainer;
pub mod lexicons;

pub use content_type::detect_content_type;
pub use engine::CredibilityEngine;
pub use explainer::{enhance_features, explain_feature, find_context};
pub use lexicons::{
    detect_pattern_matches, has_source_citation, CREDIBLE_NEWS_PATTERNS, FAKE_NEWS_PATTERNS,
    SOURCE_CITATION_PHRASES,
};
