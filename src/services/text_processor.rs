// Text Processing Service
// Normalization and readability metrics for the analysis pipeline

use regex::Regex;

use crate::models::ReadabilityMetrics;

/// Normalize raw text for the inference model: lowercase, strip punctuation
/// and digits, collapse whitespace. Total over any input, idempotent.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.to_lowercase();

    // Replace everything that is not a word character or whitespace
    let special_re = Regex::new(r"[^\w\s]").unwrap();
    s = special_re.replace_all(&s, " ").to_string();

    // Replace digit runs
    let digit_re = Regex::new(r"\d+").unwrap();
    s = digit_re.replace_all(&s, " ").to_string();

    // Collapse whitespace
    let ws_re = Regex::new(r"\s+").unwrap();
    s = ws_re.replace_all(&s, " ").to_string();

    s.trim().to_string()
}

/// Compute readability metrics over the raw text.
///
/// Texts shorter than 10 characters (or with no countable words/sentences)
/// get the all-zero sentinel. The score is a legacy-compatible heuristic,
/// not a validated readability formula; the constants are load-bearing.
pub fn calculate_readability_metrics(text: &str) -> ReadabilityMetrics {
    if text.chars().count() < 10 {
        return ReadabilityMetrics::default();
    }

    // Split into sentences on terminal punctuation runs
    let sentence_re = Regex::new(r"[.!?]+").unwrap();
    let sentences: Vec<&str> = sentence_re
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let words: Vec<&str> = text.split_whitespace().collect();

    let word_count = words.len();
    let sentence_count = sentences.len();

    if word_count == 0 || sentence_count == 0 {
        return ReadabilityMetrics::default();
    }

    let avg_word_length =
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64;
    let avg_sentence_length = word_count as f64 / sentence_count as f64;

    let raw_score = 0.39 * avg_sentence_length + 11.8 * avg_word_length - 15.59;
    let readability_score = (raw_score * 5.0).clamp(0.0, 100.0);

    ReadabilityMetrics {
        average_word_length: round_to(avg_word_length, 2),
        average_sentence_length: round_to(avg_sentence_length, 2),
        readability_score: round_to(readability_score, 1),
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
