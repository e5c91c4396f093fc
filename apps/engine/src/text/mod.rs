//! Text normalization — tokenizing, stopword filtering, frequency ranking.
//!
//! Pure functions of their input. The engine receives text already cleaned by
//! the external ingestion step; compound phrases arrive joined with `_`.

pub mod stopwords;

pub use stopwords::{LABEL_STOPWORDS, ROADMAP_STOPWORDS, SKILL_TAG_STOPWORDS};

/// Splits lowercased text into word tokens. Underscores are kept inside
/// tokens because the ingestion step uses them as compound join markers.
fn raw_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenizes text: lowercase, word-boundary split, then drop tokens that are
/// short (≤ 2 chars), non-alphabetic, or stopwords.
pub fn tokenize(text: &str) -> Vec<String> {
    raw_tokens(text)
        .into_iter()
        .filter(|t| t.len() > 2 && t.chars().all(|c| c.is_alphabetic()) && !stopwords::is_stopword(t))
        .collect()
}

/// Like [`tokenize`], but tokens on the technical preserve-list and compound
/// tokens (containing `_`) bypass the length/alphabetic/stopword filters.
pub fn tokenize_preserving(text: &str) -> Vec<String> {
    raw_tokens(text)
        .into_iter()
        .filter(|t| {
            stopwords::is_preserved(t)
                || t.contains('_')
                || (t.len() > 2
                    && t.chars().all(|c| c.is_alphabetic())
                    && !stopwords::is_stopword(t))
        })
        .collect()
}

/// Counts items preserving first-seen order, then ranks by descending count.
/// Ties keep first-appearance order, so the ranking is deterministic.
pub fn frequency_ranked<I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for item in items {
        if !counts.contains_key(&item) {
            order.push(item.clone());
        }
        *counts.entry(item).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|term| {
            let count = counts[&term];
            (term, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// The `n` most frequent meaningful tokens in `text`, strongest first.
pub fn top_frequent_terms(text: &str, n: usize) -> Vec<String> {
    frequency_ranked(tokenize(text))
        .into_iter()
        .take(n)
        .map(|(term, _)| term)
        .collect()
}

/// Splits raw delimited skill text into lowercase terms for frequency
/// scanning: whitespace split, edge punctuation trimmed, short tokens and
/// filler words dropped.
pub fn skill_terms(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !(c.is_alphanumeric() || c == '_'))
                .to_lowercase()
        })
        .filter(|t| t.len() > 2 && !ROADMAP_STOPWORDS.contains(&t.as_str()))
        .collect()
}

/// Title-cases a string the way the upstream pipeline did: a letter following
/// any non-letter starts a word and is uppercased, every other letter is
/// lowercased. Hyphens, underscores, and digits all act as word boundaries,
/// so "data-analysis" becomes "Data-Analysis".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_short_tokens() {
        let tokens = tokenize("Data Analysis is my GO to");
        assert_eq!(tokens, vec!["data", "analysis"]);
    }

    #[test]
    fn test_tokenize_drops_numeric_tokens() {
        let tokens = tokenize("python3 2024 statistics");
        assert_eq!(tokens, vec!["statistics"]);
    }

    #[test]
    fn test_tokenize_drops_stopwords() {
        let tokens = tokenize("the quick brown fox and the lazy dog");
        assert_eq!(tokens, vec!["quick", "brown", "fox", "lazy", "dog"]);
    }

    #[test]
    fn test_tokenize_preserving_keeps_acronyms() {
        let tokens = tokenize_preserving("learn SQL and AI for data science");
        assert_eq!(tokens, vec!["learn", "sql", "ai", "data", "science"]);
    }

    #[test]
    fn test_tokenize_preserving_keeps_compound_tokens() {
        let tokens = tokenize_preserving("machine_learning with data");
        assert_eq!(tokens, vec!["machine_learning", "data"]);
    }

    #[test]
    fn test_plain_tokenize_drops_short_acronyms() {
        let tokens = tokenize("learn AI basics");
        assert_eq!(tokens, vec!["learn", "basics"]);
    }

    #[test]
    fn test_frequency_ranked_breaks_ties_by_first_seen() {
        let items = ["b", "a", "a", "b", "c"].map(String::from);
        let ranked = frequency_ranked(items);
        assert_eq!(
            ranked,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_top_frequent_terms_limits_count() {
        let terms = top_frequent_terms("data data analysis analysis analysis modeling", 2);
        assert_eq!(terms, vec!["analysis", "data"]);
    }

    #[test]
    fn test_skill_terms_trim_punctuation_and_fillers() {
        let terms = skill_terms("Data Analysis, Statistics, and R");
        assert_eq!(terms, vec!["data", "analysis", "statistics"]);
    }

    #[test]
    fn test_skill_terms_keep_compound_tokens() {
        let terms = skill_terms("machine_learning, charts");
        assert_eq!(terms, vec!["machine_learning", "charts"]);
    }

    #[test]
    fn test_title_case_matches_original_pipeline() {
        assert_eq!(title_case("data analysis"), "Data Analysis");
        // Uppercased acronyms get folded, mirroring the upstream behavior.
        assert_eq!(title_case("SQL basics"), "Sql Basics");
    }

    #[test]
    fn test_title_case_capitalizes_after_punctuation() {
        assert_eq!(title_case("data-analysis"), "Data-Analysis");
        assert_eq!(title_case("machine_learning"), "Machine_Learning");
        assert_eq!(title_case("sql; data analysis"), "Sql; Data Analysis");
        // Digits are word boundaries too.
        assert_eq!(title_case("web3 tools"), "Web3 Tools");
    }

    #[test]
    fn test_tokenize_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }
}
