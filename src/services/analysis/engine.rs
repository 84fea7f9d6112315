// Decision Composer
// Merges the model probability with lexical pattern matches, content type,
// readability, and feature explanations into the final verdict. The
// adjustment branches are mutually exclusive and order-dependent:
// content-type overrides take precedence over pattern-count overrides.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{AnalysisResult, ContentType, PatternAnalysis};
use crate::services::analysis::content_type::detect_content_type;
use crate::services::analysis::explainer::enhance_features;
use crate::services::analysis::lexicons::{
    detect_pattern_matches, has_source_citation, CREDIBLE_NEWS_PATTERNS, FAKE_NEWS_PATTERNS,
};
use crate::services::model::InferenceModel;
use crate::services::text_processor::{calculate_readability_metrics, normalize_text};

const MIN_ANALYZABLE_CHARS: usize = 20;
const TOP_FEATURE_COUNT: usize = 5;

const MSG_TOO_SHORT: &str = "Text is too short for reliable analysis";
const MSG_OPINION: &str =
    "This appears to be an opinion piece rather than straight news reporting.";
const MSG_SATIRE: &str =
    "This may be satirical or humorous content rather than meant to be taken as factual news.";
const MSG_CLICKBAIT: &str =
    "This displays characteristics of clickbait content designed to attract attention.";
const MSG_FAKE_PATTERNS: &str =
    "Contains multiple linguistic patterns commonly found in false or misleading content.";
const MSG_CREDIBLE: &str =
    "Contains attribution and language patterns consistent with credible reporting.";
const MSG_GENERIC: &str = "Analysis based on linguistic features and content patterns.";

/// Stateless credibility-analysis engine over a shared, read-only model.
pub struct CredibilityEngine {
    model: Arc<dyn InferenceModel>,
}

impl CredibilityEngine {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self { model }
    }

    /// Run the full analysis. Never fails: degenerate input degrades to the
    /// neutral sentinel, and a feature-extraction failure degrades to an
    /// empty feature list.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.chars().count() < MIN_ANALYZABLE_CHARS {
            return AnalysisResult {
                fake_probability: 50.0,
                is_likely_fake: None,
                confidence: 10.0,
                content_type: ContentType::Unknown,
                key_features: vec![],
                readability_metrics: calculate_readability_metrics(text),
                pattern_analysis: PatternAnalysis::default(),
                message: MSG_TOO_SHORT.to_string(),
            };
        }

        let normalized = normalize_text(text);
        let mut fake_probability = self.model.predict_proba(&normalized);

        // Distance from the decision boundary, sharpened by a logistic curve
        // so mid-range probabilities read as low confidence.
        let raw_confidence = (fake_probability - 0.5).abs() * 2.0;
        let mut confidence = 100.0 / (1.0 + (-10.0 * (raw_confidence - 0.5)).exp());

        if (0.4..=0.6).contains(&fake_probability) {
            confidence *= 0.7;
        }

        let key_features = match self.model.top_terms(&normalized, TOP_FEATURE_COUNT) {
            Ok(terms) => enhance_features(terms, text),
            Err(err) => {
                warn!(error = %err, "feature extraction unavailable; continuing without features");
                vec![]
            }
        };

        let fake_patterns = detect_pattern_matches(text, FAKE_NEWS_PATTERNS);
        let credible_patterns = detect_pattern_matches(text, CREDIBLE_NEWS_PATTERNS);
        let citation = has_source_citation(text);
        let content_type = detect_content_type(text);

        let message = match content_type {
            ContentType::Opinion => {
                if fake_probability > 0.6 {
                    fake_probability = (fake_probability * 0.8).max(0.55);
                    confidence = confidence.min(70.0);
                }
                MSG_OPINION
            }
            ContentType::Satire | ContentType::PotentialSatire => {
                confidence = confidence.min(75.0);
                MSG_SATIRE
            }
            ContentType::Clickbait => {
                fake_probability = (fake_probability * 1.3).min(0.95);
                MSG_CLICKBAIT
            }
            _ if fake_patterns.len() >= 3 => {
                fake_probability = (fake_probability * 1.2).min(0.95);
                confidence = (confidence * 1.1).min(100.0);
                MSG_FAKE_PATTERNS
            }
            _ if credible_patterns.len() >= 2 && citation => {
                fake_probability = (fake_probability * 0.8).max(0.05);
                confidence = (confidence * 1.1).min(100.0);
                MSG_CREDIBLE
            }
            _ => MSG_GENERIC,
        };

        debug!(
            probability = fake_probability,
            confidence,
            content_type = ?content_type,
            fake_categories = fake_patterns.len(),
            credible_categories = credible_patterns.len(),
            citation,
            "analysis composed"
        );

        AnalysisResult {
            fake_probability: fake_probability * 100.0,
            is_likely_fake: Some(fake_probability > 0.5),
            confidence: confidence.clamp(0.0, 100.0),
            content_type,
            key_features,
            readability_metrics: calculate_readability_metrics(text),
            pattern_analysis: PatternAnalysis {
                fake_news_patterns: fake_patterns,
                credible_news_patterns: credible_patterns,
                has_source_citation: citation,
            },
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadabilityMetrics;
    use crate::services::model::{ModelError, TermWeight, TfidfNaiveBayes};

    /// Fixed-probability model for exercising the adjustment branches.
    struct StubModel {
        probability: f64,
        fail_terms: bool,
    }

    impl StubModel {
        fn with_probability(probability: f64) -> Arc<dyn InferenceModel> {
            Arc::new(Self {
                probability,
                fail_terms: false,
            })
        }
    }

    impl InferenceModel for StubModel {
        fn predict_proba(&self, _text: &str) -> f64 {
            self.probability
        }

        fn top_terms(&self, _text: &str, _k: usize) -> Result<Vec<TermWeight>, ModelError> {
            if self.fail_terms {
                return Err(ModelError::EmptyVocabulary);
            }
            Ok(vec![TermWeight {
                term: "secret".to_string(),
                weight: 0.5,
            }])
        }
    }

    #[test]
    fn test_short_text_sentinel() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.9));
        let result = engine.analyze("Hi there");

        assert_eq!(result.fake_probability, 50.0);
        assert_eq!(result.is_likely_fake, None);
        assert_eq!(result.confidence, 10.0);
        assert_eq!(result.content_type, ContentType::Unknown);
        assert!(result.key_features.is_empty());
        assert_eq!(result.readability_metrics, ReadabilityMetrics::default());
        assert_eq!(result.message, MSG_TOO_SHORT);
    }

    #[test]
    fn test_opinion_reduces_probability_and_caps_confidence() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.9));
        let result = engine.analyze("In my view the council made the wrong call on zoning");

        assert_eq!(result.content_type, ContentType::Opinion);
        // 0.9 * 0.8 = 0.72, above the 0.55 floor
        assert!((result.fake_probability - 72.0).abs() < 1e-9);
        assert!(result.fake_probability <= 80.0);
        assert!(result.confidence <= 70.0);
        assert_eq!(result.message, MSG_OPINION);
    }

    #[test]
    fn test_opinion_floor_applies() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.62));
        let result = engine.analyze("In my view the council made the wrong call on zoning");
        // 0.62 * 0.8 = 0.496 < 0.55 floor
        assert!((result.fake_probability - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_opinion_below_threshold_unadjusted() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.6));
        let result = engine.analyze("In my view the council made the wrong call on zoning");
        // p == 0.6 does not satisfy the strict > 0.6 gate
        assert!((result.fake_probability - 60.0).abs() < 1e-9);
        assert_eq!(result.message, MSG_OPINION);
    }

    #[test]
    fn test_satire_caps_confidence() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.95));
        let result = engine.analyze("A parody account posted the fictional announcement today");

        assert_eq!(result.content_type, ContentType::Satire);
        assert!(result.confidence <= 75.0);
        assert_eq!(result.message, MSG_SATIRE);
    }

    #[test]
    fn test_clickbait_inflates_probability() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.5));
        let result = engine.analyze("The secret trick celebrities use before every show");

        assert_eq!(result.content_type, ContentType::Clickbait);
        assert!((result.fake_probability - 65.0).abs() < 1e-9);
        assert_eq!(result.message, MSG_CLICKBAIT);
    }

    #[test]
    fn test_clickbait_probability_capped() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.9));
        let result = engine.analyze("The secret trick celebrities use before every show");
        assert!((result.fake_probability - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_fake_pattern_branch() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.5));
        let text = "Deep state operatives staged a cover up, an anonymous source \
                    claimed, calling the urgent warning a bombshell";
        let result = engine.analyze(text);

        assert_eq!(result.content_type, ContentType::News);
        assert!(result.pattern_analysis.fake_news_patterns.len() >= 3);
        assert!((result.fake_probability - 60.0).abs() < 1e-9);
        assert_eq!(result.message, MSG_FAKE_PATTERNS);
    }

    #[test]
    fn test_credible_pattern_branch_requires_citation() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.5));
        let text = "According to the agency, the data indicates output rose; \
                    however, some economists disagree";
        let result = engine.analyze(text);

        assert!(result.pattern_analysis.has_source_citation);
        assert!(result.pattern_analysis.credible_news_patterns.len() >= 2);
        assert!((result.fake_probability - 40.0).abs() < 1e-9);
        assert_eq!(result.message, MSG_CREDIBLE);
    }

    #[test]
    fn test_generic_branch_leaves_probability_untouched() {
        let engine = CredibilityEngine::new(StubModel::with_probability(0.3));
        let result = engine.analyze("The city planted four hundred oak trees along the river");

        assert!((result.fake_probability - 30.0).abs() < 1e-9);
        assert_eq!(result.is_likely_fake, Some(false));
        assert_eq!(result.message, MSG_GENERIC);
    }

    #[test]
    fn test_outputs_always_within_bounds() {
        for p in [0.0, 0.1, 0.4, 0.5, 0.6, 0.9, 1.0] {
            let engine = CredibilityEngine::new(StubModel::with_probability(p));
            let result =
                engine.analyze("The committee released its annual findings on local land use");
            assert!((0.0..=100.0).contains(&result.fake_probability));
            assert!((0.0..=100.0).contains(&result.confidence));
        }
    }

    #[test]
    fn test_ambiguous_probability_penalized() {
        let mid = CredibilityEngine::new(StubModel::with_probability(0.55));
        let clear = CredibilityEngine::new(StubModel::with_probability(0.95));
        let text = "The committee released its annual findings on local land use";
        assert!(mid.analyze(text).confidence < clear.analyze(text).confidence);
    }

    #[test]
    fn test_failed_feature_extraction_degrades_gracefully() {
        let engine = CredibilityEngine::new(Arc::new(StubModel {
            probability: 0.8,
            fail_terms: true,
        }));
        let result = engine.analyze("The committee released its annual findings on local land use");

        assert!(result.key_features.is_empty());
        assert_eq!(result.is_likely_fake, Some(true));
    }

    #[test]
    fn test_end_to_end_conspiracy_headline() {
        let model = Arc::new(TfidfNaiveBayes::train_bundled().unwrap());
        let raw = model.predict_proba(&normalize_text(
            "BOMBSHELL: Government scientists admit vaccines contain mind-control \
             microchips linked to 5G towers",
        ));
        let engine = CredibilityEngine::new(model);
        let result = engine.analyze(
            "BOMBSHELL: Government scientists admit vaccines contain mind-control \
             microchips linked to 5G towers",
        );

        assert_eq!(result.is_likely_fake, Some(true));
        assert!(raw > 0.5);
        assert!(matches!(
            result.content_type,
            ContentType::News | ContentType::Clickbait
        ));
        assert!(result
            .pattern_analysis
            .fake_news_patterns
            .iter()
            .any(|c| c.category == "sensationalism"));
        assert!(!result.pattern_analysis.has_source_citation);
    }

    #[test]
    fn test_end_to_end_credible_report() {
        let model = Arc::new(TfidfNaiveBayes::train_bundled().unwrap());
        let raw = model.predict_proba(&normalize_text(
            "According to a study published in a peer-reviewed journal, researchers \
             found a correlation between diet and longevity",
        ));
        let engine = CredibilityEngine::new(model);
        let result = engine.analyze(
            "According to a study published in a peer-reviewed journal, researchers \
             found a correlation between diet and longevity",
        );

        assert!(result.pattern_analysis.has_source_citation);
        assert!(result
            .pattern_analysis
            .credible_news_patterns
            .iter()
            .any(|c| c.category == "attribution"));
        // Adjustments never push a cited, attributed text above its raw score
        assert!(result.fake_probability <= raw * 100.0 + 1e-9);
    }
}
