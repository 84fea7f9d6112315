// Feature Explainer
// Maps the inference model's top contributing terms to human-readable
// explanations, classifies each as a credibility or skepticism signal, and
// pulls the surrounding sentence out of the raw text for context.

use regex::Regex;
use tracing::debug;

use crate::models::{FeatureEffect, KeyFeature};
use crate::services::model::TermWeight;

const CREDIBILITY_PREFIXES: &[&str] = &[
    "according", "research", "study", "report", "data", "evidence", "expert",
];

const SKEPTICISM_PREFIXES: &[&str] = &[
    "secret",
    "shocking",
    "reveal",
    "unbelievable",
    "miracle",
    "exclusive",
    "conspiracy",
    "anonymous",
    "bombshell",
    "leak",
];

// Exact-match explanations come first; prefix families cover the rest.
const CREDIBILITY_STYLE_PREFIXES: &[&str] =
    &["report", "stud", "research", "evidence", "data", "analy"];
const SKEPTICISM_STYLE_PREFIXES: &[&str] =
    &["claim", "shock", "secret", "reveal", "amaz", "unbeliev"];

/// Human-readable explanation for a term or pattern-category name.
pub fn explain_feature(feature_name: &str) -> String {
    let known = match feature_name {
        // Fake news pattern categories
        "conspiracy_terms" => Some("Contains terms often used in conspiracy theories"),
        "exaggerated_claims" => Some("Makes claims that seem too good to be true"),
        "urgency_terms" => Some("Creates artificial urgency to prompt immediate action"),
        "clickbait_phrases" => Some("Uses sensationalist language to entice readers"),
        "anonymous_sources" => Some("Relies heavily on unnamed or anonymous sources"),
        "emotional_manipulation" => {
            Some("Uses emotionally charged language to manipulate readers")
        }
        "sensationalism" => {
            Some("Presents information in a way that provokes interest at the expense of accuracy")
        }
        // Credible news pattern categories
        "attribution" => Some("Properly attributes information to specific sources"),
        "measured_language" => Some("Uses cautious language that acknowledges uncertainty"),
        "contextual_info" => Some("Provides background context for better understanding"),
        "data_references" => Some("References specific data points or statistics"),
        "multiple_viewpoints" => Some("Presents multiple perspectives or viewpoints"),
        // Common model vocabulary terms
        "secret" => Some("The word 'secret' is often used in misleading content"),
        "shocking" => Some("The word 'shocking' is often used to sensationalize content"),
        "breaking" => Some("Overuse of 'breaking' often indicates sensationalism"),
        "revealed" => Some("Claims of revelations might indicate misleading content"),
        "source" => Some("References to generic 'sources' without specifics"),
        "according" => Some("Proper attribution is common in legitimate news"),
        "research" => Some("References to research is common in legitimate news"),
        "study" => Some("References to studies is common in legitimate news"),
        "evidence" => Some("Citation of evidence is common in legitimate news"),
        "report" => Some("References to specific reports indicates better sourcing"),
        "confirmed" => Some("Confirmation language is often seen in verified news"),
        _ => None,
    };

    if let Some(explanation) = known {
        return explanation.to_string();
    }

    if CREDIBILITY_STYLE_PREFIXES
        .iter()
        .any(|p| feature_name.starts_with(p))
    {
        format!("References to '{}' may indicate factual reporting", feature_name)
    } else if SKEPTICISM_STYLE_PREFIXES
        .iter()
        .any(|p| feature_name.starts_with(p))
    {
        format!("Term '{}' is often used in sensationalized content", feature_name)
    } else {
        "This term appears frequently in the analyzed text category".to_string()
    }
}

fn classify_effect(term: &str) -> FeatureEffect {
    if CREDIBILITY_PREFIXES.iter().any(|p| term.starts_with(p)) {
        FeatureEffect::Credibility
    } else if SKEPTICISM_PREFIXES.iter().any(|p| term.starts_with(p)) {
        FeatureEffect::Skepticism
    } else {
        FeatureEffect::Neutral
    }
}

/// First sentence-like span of the raw text containing the term as a whole
/// word, case-insensitive. None when the term only occurs inside other words
/// (the normalizer strips punctuation, so a model term may have no clean hit
/// in the original).
pub fn find_context(term: &str, text: &str) -> Option<String> {
    let pattern = format!(r"(?i)[^.!?]*\b{}\b[^.!?]*[.!?]?", regex::escape(term));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            debug!(term = term, error = %err, "context pattern failed to compile");
            return None;
        }
    };
    re.find(text).map(|m| m.as_str().trim().to_string())
}

/// Enrich raw (term, weight) pairs into fully explained key features.
pub fn enhance_features(features: Vec<TermWeight>, text: &str) -> Vec<KeyFeature> {
    features
        .into_iter()
        .map(|f| {
            let context = find_context(&f.term, text);
            KeyFeature {
                explanation: explain_feature(&f.term),
                effect: classify_effect(&f.term),
                context,
                term: f.term,
                weight: f.weight,
            }
        })
        .collect()
}
