// Veracity Data Models
// JSON response types for the credibility analysis engine

use serde::{Deserialize, Serialize};

// ============ Content Classification ============

/// Coarse genre label used to contextualize the fake-probability adjustment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    News,
    Opinion,
    Satire,
    PotentialSatire,
    Clickbait,
    /// Only produced for degenerate-length input.
    Unknown,
}

/// Whether a key feature pulls the verdict toward credibility or skepticism.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureEffect {
    Credibility,
    Skepticism,
    Neutral,
}

// ============ Key Features ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyFeature {
    pub term: String,
    pub weight: f64,
    pub explanation: String,
    pub effect: FeatureEffect,
    /// The sentence containing the term, when one is found in the raw text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

// ============ Readability ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityMetrics {
    pub average_word_length: f64,
    pub average_sentence_length: f64,
    pub readability_score: f64,
}

// ============ Pattern Analysis ============

/// One matched lexicon category with its matched terms in definition order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCategory {
    pub category: String,
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    pub fake_news_patterns: Vec<PatternCategory>,
    pub credible_news_patterns: Vec<PatternCategory>,
    pub has_source_citation: bool,
}

// ============ Analysis Result ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Adjusted probability that the text is fake or misleading, 0-100.
    pub fake_probability: f64,
    /// None when the input is too short to call either way.
    pub is_likely_fake: Option<bool>,
    /// Certainty score, 0-100, reshaped by a logistic curve.
    pub confidence: f64,
    pub content_type: ContentType,
    pub key_features: Vec<KeyFeature>,
    pub readability_metrics: ReadabilityMetrics,
    pub pattern_analysis: PatternAnalysis,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_wire_names() {
        let json = serde_json::to_string(&ContentType::PotentialSatire).unwrap();
        assert_eq!(json, "\"POTENTIAL_SATIRE\"");
        let parsed: ContentType = serde_json::from_str("\"CLICKBAIT\"").unwrap();
        assert_eq!(parsed, ContentType::Clickbait);
    }

    #[test]
    fn test_result_field_names() {
        let result = AnalysisResult {
            fake_probability: 50.0,
            is_likely_fake: None,
            confidence: 10.0,
            content_type: ContentType::Unknown,
            key_features: vec![],
            readability_metrics: ReadabilityMetrics::default(),
            pattern_analysis: PatternAnalysis::default(),
            message: "Text is too short for reliable analysis".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("fakeProbability").is_some());
        assert!(json["isLikelyFake"].is_null());
        assert!(json["patternAnalysis"].get("hasSourceCitation").is_some());
        assert!(json["readabilityMetrics"].get("averageWordLength").is_some());
    }

    #[test]
    fn test_context_omitted_when_absent() {
        let feature = KeyFeature {
            term: "secret".to_string(),
            weight: 0.4,
            explanation: "x".to_string(),
            effect: FeatureEffect::Skepticism,
            context: None,
        };
        let json = serde_json::to_value(&feature).unwrap();
        assert!(json.get("context").is_none());
        assert_eq!(json["effect"], "SKEPTICISM");
    }
}
