// Bundled TF-IDF + Multinomial Naive-Bayes Classifier
// A compact probabilistic text model satisfying the InferenceModel contract:
// unigram+bigram TF-IDF features (sublinear TF, smoothed IDF, L2 norm, min
// document frequency 2) feeding a two-class multinomial NB with additive
// smoothing. Deterministic: same corpus always yields the same model.

use std::collections::{HashMap, HashSet};

use tracing::info;

use super::training_data::labeled_corpus;
use super::{InferenceModel, ModelError, TermWeight};
use crate::services::text_processor::normalize_text;

const MIN_DOCUMENT_FREQUENCY: usize = 2;
const SMOOTHING_ALPHA: f64 = 0.1;

// English stop words excluded from the feature space.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "myself",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

pub struct TfidfNaiveBayes {
    pub(crate) terms: Vec<String>,
    pub(crate) vocabulary: HashMap<String, usize>,
    pub(crate) idf: Vec<f64>,
    /// Log prior per class: index 0 = credible, 1 = misleading.
    pub(crate) class_log_prior: [f64; 2],
    /// Per-feature log likelihood, same class indexing.
    pub(crate) feature_log_prob: Vec<[f64; 2]>,
}

impl TfidfNaiveBayes {
    /// Train from the bundled labeled corpus.
    pub fn train_bundled() -> Result<Self, ModelError> {
        let corpus = labeled_corpus();
        info!(documents = corpus.len(), "training bundled classifier");
        Self::train(&corpus)
    }

    /// Train from raw (text, is_misleading) pairs. Texts are normalized the
    /// same way inference inputs are.
    pub fn train(corpus: &[(&str, bool)]) -> Result<Self, ModelError> {
        let documents: Vec<(Vec<String>, bool)> = corpus
            .iter()
            .map(|(text, label)| (extract_features(&normalize_text(text)), *label))
            .collect();

        // Document frequency over candidate features
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for (features, _) in &documents {
            let unique: HashSet<&str> = features.iter().map(|f| f.as_str()).collect();
            for feature in unique {
                *document_frequency.entry(feature).or_insert(0) += 1;
            }
        }

        // Vocabulary: features seen in at least MIN_DOCUMENT_FREQUENCY docs,
        // sorted for a stable index assignment.
        let mut terms: Vec<String> = document_frequency
            .iter()
            .filter(|(_, df)| **df >= MIN_DOCUMENT_FREQUENCY)
            .map(|(term, _)| term.to_string())
            .collect();
        terms.sort();

        if terms.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let doc_count = documents.len() as f64;
        let idf: Vec<f64> = terms
            .iter()
            .map(|term| {
                let df = document_frequency[term.as_str()] as f64;
                ((1.0 + doc_count) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        // Accumulate per-class TF-IDF mass
        let mut class_feature_sum = vec![[0.0f64; 2]; terms.len()];
        let mut class_doc_count = [0usize; 2];

        for (features, label) in &documents {
            let class = usize::from(*label);
            class_doc_count[class] += 1;
            for (idx, weight) in vectorize_features(features, &vocabulary, &idf) {
                class_feature_sum[idx][class] += weight;
            }
        }

        let class_total: [f64; 2] = [
            class_feature_sum.iter().map(|s| s[0]).sum(),
            class_feature_sum.iter().map(|s| s[1]).sum(),
        ];

        let vocab_size = terms.len() as f64;
        let feature_log_prob: Vec<[f64; 2]> = class_feature_sum
            .iter()
            .map(|sums| {
                [
                    (sums[0] + SMOOTHING_ALPHA).ln()
                        - (class_total[0] + SMOOTHING_ALPHA * vocab_size).ln(),
                    (sums[1] + SMOOTHING_ALPHA).ln()
                        - (class_total[1] + SMOOTHING_ALPHA * vocab_size).ln(),
                ]
            })
            .collect();

        let class_log_prior = [
            (class_doc_count[0].max(1) as f64 / doc_count).ln(),
            (class_doc_count[1].max(1) as f64 / doc_count).ln(),
        ];

        Ok(Self {
            terms,
            vocabulary,
            idf,
            class_log_prior,
            feature_log_prob,
        })
    }

    pub(crate) fn from_parts(
        terms: Vec<String>,
        idf: Vec<f64>,
        class_log_prior: [f64; 2],
        feature_log_prob: Vec<[f64; 2]>,
    ) -> Self {
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        Self {
            terms,
            vocabulary,
            idf,
            class_log_prior,
            feature_log_prob,
        }
    }

    /// Sparse L2-normalized TF-IDF vector for a normalized text.
    fn vectorize(&self, normalized_text: &str) -> Vec<(usize, f64)> {
        let features = extract_features(normalized_text);
        vectorize_features(&features, &self.vocabulary, &self.idf)
    }
}

impl InferenceModel for TfidfNaiveBayes {
    fn predict_proba(&self, normalized_text: &str) -> f64 {
        let vector = self.vectorize(normalized_text);

        let mut joint = self.class_log_prior;
        for (idx, weight) in &vector {
            joint[0] += weight * self.feature_log_prob[*idx][0];
            joint[1] += weight * self.feature_log_prob[*idx][1];
        }

        // Softmax over the two joint log likelihoods
        let max = joint[0].max(joint[1]);
        let exp0 = (joint[0] - max).exp();
        let exp1 = (joint[1] - max).exp();
        exp1 / (exp0 + exp1)
    }

    fn top_terms(&self, normalized_text: &str, k: usize) -> Result<Vec<TermWeight>, ModelError> {
        if self.terms.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }

        let mut vector = self.vectorize(normalized_text);
        vector.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(vector
            .into_iter()
            .take(k)
            .map(|(idx, weight)| TermWeight {
                term: self.terms[idx].clone(),
                weight,
            })
            .collect())
    }
}

/// Tokenize a normalized text into unigram + bigram features. Tokens shorter
/// than two characters and stop words are dropped before n-gram formation.
fn extract_features(normalized_text: &str) -> Vec<String> {
    let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    let tokens: Vec<&str> = normalized_text
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2 && !stop_words.contains(*t))
        .collect();

    let mut features: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for window in tokens.windows(2) {
        features.push(format!("{} {}", window[0], window[1]));
    }
    features
}

fn vectorize_features(
    features: &[String],
    vocabulary: &HashMap<String, usize>,
    idf: &[f64],
) -> Vec<(usize, f64)> {
    let mut term_frequency: HashMap<usize, f64> = HashMap::new();
    for feature in features {
        if let Some(&idx) = vocabulary.get(feature) {
            *term_frequency.entry(idx).or_insert(0.0) += 1.0;
        }
    }

    // Sublinear TF scaled by IDF
    let mut vector: Vec<(usize, f64)> = term_frequency
        .into_iter()
        .map(|(idx, tf)| (idx, (1.0 + tf.ln()) * idf[idx]))
        .collect();

    // L2 normalize
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, weight) in vector.iter_mut() {
            *weight /= norm;
        }
    }

    vector.sort_by_key(|(idx, _)| *idx);
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_builds_vocabulary() {
        let model = TfidfNaiveBayes::train_bundled().unwrap();
        assert!(!model.terms.is_empty());
        assert_eq!(model.terms.len(), model.idf.len());
        assert_eq!(model.terms.len(), model.feature_log_prob.len());
    }

    #[test]
    fn test_probabilities_in_range() {
        let model = TfidfNaiveBayes::train_bundled().unwrap();
        for text in [
            "breaking secret document reveals shocking conspiracy",
            "city council approves funding for infrastructure",
            "",
            "qwerty zxcvb unseen tokens only",
        ] {
            let p = model.predict_proba(text);
            assert!((0.0..=1.0).contains(&p), "p={} for {:?}", p, text);
        }
    }

    #[test]
    fn test_fake_scores_above_real() {
        let model = TfidfNaiveBayes::train_bundled().unwrap();
        let fake = model.predict_proba(&normalize_text(
            "BREAKING: Secret document reveals shocking conspiracy in government",
        ));
        let real = model.predict_proba(&normalize_text(
            "Senate passes bipartisan infrastructure bill after months of negotiations",
        ));
        assert!(fake > real, "fake={} real={}", fake, real);
        assert!(fake > 0.5, "fake={}", fake);
        assert!(real < 0.5, "real={}", real);
    }

    #[test]
    fn test_top_terms_descending_and_bounded() {
        let model = TfidfNaiveBayes::train_bundled().unwrap();
        let terms = model
            .top_terms(
                &normalize_text("Secret government documents reveal shocking evidence"),
                5,
            )
            .unwrap();

        assert!(terms.len() <= 5);
        assert!(!terms.is_empty());
        for pair in terms.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
        for t in &terms {
            assert!(t.weight >= 0.0);
        }
    }

    #[test]
    fn test_unknown_text_has_no_terms() {
        let model = TfidfNaiveBayes::train_bundled().unwrap();
        let terms = model.top_terms("qqq www eee completely unknown", 5).unwrap();
        assert!(terms.is_empty());
    }

    #[test]
    fn test_from_parts_round_trip() {
        let model = TfidfNaiveBayes::train_bundled().unwrap();
        let rebuilt = TfidfNaiveBayes::from_parts(
            model.terms.clone(),
            model.idf.clone(),
            model.class_log_prior,
            model.feature_log_prob.clone(),
        );

        let text = "secret cure doctors hate";
        assert!((model.predict_proba(text) - rebuilt.predict_proba(text)).abs() < 1e-12);
    }
}
