// Lexicon Matcher
// Fixed term lists scanned as case-insensitive substrings over the raw text.
// Matching is deliberately substring-based (not word-boundary); partial hits
// like "secret" inside "secretary" are legacy-compatible and must be kept.

use crate::models::PatternCategory;

/// Lexical cues that commonly appear in false or misleading content.
pub const FAKE_NEWS_PATTERNS: &[(&str, &[&str])] = &[
    (
        "conspiracy_terms",
        &[
            "deep state",
            "cover up",
            "conspiracy",
            "cabal",
            "shadow government",
            "illuminati",
        ],
    ),
    (
        "exaggerated_claims",
        &[
            "cure for all",
            "miracle",
            "secret cure",
            "100% effective",
            "discovered the truth",
        ],
    ),
    (
        "urgency_terms",
        &[
            "urgent",
            "breaking",
            "alert",
            "warning",
            "must see",
            "before it's deleted",
        ],
    ),
    (
        "clickbait_phrases",
        &[
            "you won't believe",
            "shocked",
            "mind blown",
            "doctors hate",
            "this one trick",
        ],
    ),
    (
        "anonymous_sources",
        &[
            "anonymous source",
            "inside source",
            "sources say",
            "unnamed official",
        ],
    ),
    (
        "emotional_manipulation",
        &[
            "outrage",
            "furious",
            "meltdown",
            "destroyed",
            "obliterated",
            "slammed",
        ],
    ),
    (
        "sensationalism",
        &[
            "bombshell",
            "explosive",
            "shocking truth",
            "stunning",
            "jaw-dropping",
        ],
    ),
];

/// Lexical cues that commonly appear in credible reporting.
pub const CREDIBLE_NEWS_PATTERNS: &[(&str, &[&str])] = &[
    (
        "attribution",
        &[
            "according to",
            "reported by",
            "cited in",
            "study shows",
            "research published in",
        ],
    ),
    (
        "measured_language",
        &[
            "suggests",
            "indicates",
            "appears to",
            "analysis shows",
            "evidence points to",
        ],
    ),
    (
        "contextual_info",
        &[
            "background",
            "previously",
            "historically",
            "for context",
            "in comparison",
        ],
    ),
    (
        "data_references",
        &[
            "survey of",
            "poll results",
            "data indicates",
            "statistics show",
            "percent of",
        ],
    ),
    (
        "multiple_viewpoints",
        &[
            "however",
            "on the other hand",
            "critics argue",
            "supporters suggest",
            "alternatively",
        ],
    ),
];

/// Phrases that attribute information to a named source.
pub const SOURCE_CITATION_PHRASES: &[&str] = &[
    "according to",
    "said in a statement",
    "published in",
    "reported by",
    "confirmed by",
    "analysis by",
    "investigation by",
    "study in",
    "research from",
    "data from",
    "as documented by",
    "findings published",
    "cited by",
    "experts at",
    "spokesperson said",
    "interview with",
    "survey conducted by",
    "poll by",
    "report issued by",
    "paper published in",
];

/// Collect every lexicon term occurring in the text, grouped by category.
/// Categories with no matches are omitted; match order follows the lexicon.
pub fn detect_pattern_matches(text: &str, patterns: &[(&str, &[&str])]) -> Vec<PatternCategory> {
    let text_lower = text.to_lowercase();
    let mut matched = Vec::new();

    for (category, terms) in patterns {
        let category_matches: Vec<String> = terms
            .iter()
            .filter(|term| text_lower.contains(&term.to_lowercase()))
            .map(|term| term.to_string())
            .collect();

        if !category_matches.is_empty() {
            matched.push(PatternCategory {
                category: category.to_string(),
                matches: category_matches,
            });
        }
    }

    matched
}

/// True iff any source-citation phrase occurs as a substring.
pub fn has_source_citation(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    SOURCE_CITATION_PHRASES
        .iter()
        .any(|phrase| text_lower.contains(phrase))
}
