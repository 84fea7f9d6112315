// Content-Type Classifier
// Deterministic rule cascade: explicit genre markers first, then statistical
// token-count fallbacks. First match wins; order is load-bearing.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::ContentType;

const OPINION_INDICATORS: &[&str] = &[
    "opinion",
    "editorial",
    "perspective",
    "viewpoint",
    "commentary",
    "i believe",
    "i think",
    "in my view",
    "my opinion",
    "i argue",
];

const SATIRE_INDICATORS: &[&str] = &["satire", "parody", "humor", "fictional", "not real news"];

// "shocking" is listed twice; a text containing it counts it twice toward the
// clickbait threshold (legacy-compatible).
const CLICKBAIT_INDICATORS: &[&str] = &[
    "you won't believe",
    "!",
    "!!",
    "shocking",
    "mind-blowing",
    "amazing",
    "incredible",
    "insane",
    "unbelievable",
    "secret",
    "trick",
    "simple",
    "easy",
    "wow",
    "omg",
    "shocking",
];

fn first_person_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(i|we|my|our|myself|ourselves)\b").unwrap())
}

fn exaggeration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(literally|actually|every single|everyone|nobody|best ever|worst ever)\b")
            .unwrap()
    })
}

/// Label the text as news, opinion, satire, or clickbait.
pub fn detect_content_type(text: &str) -> ContentType {
    let text_lower = text.to_lowercase();

    for indicator in OPINION_INDICATORS {
        if text_lower.contains(indicator) {
            return ContentType::Opinion;
        }
    }

    for indicator in SATIRE_INDICATORS {
        if text_lower.contains(indicator) {
            return ContentType::Satire;
        }
    }

    let clickbait_count = CLICKBAIT_INDICATORS
        .iter()
        .filter(|indicator| text_lower.contains(**indicator))
        .count();
    if clickbait_count >= 2 {
        return ContentType::Clickbait;
    }

    // No explicit markers; fall back to token-count heuristics.
    let first_person_count = first_person_re().find_iter(&text_lower).count();
    if first_person_count > 3 {
        return ContentType::Opinion;
    }

    let exaggeration_count = exaggeration_re().find_iter(&text_lower).count();
    if exaggeration_count > 2 {
        return ContentType::PotentialSatire;
    }

    ContentType::News
}
