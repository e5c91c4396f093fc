//! Stopword sets used across tokenization, cluster labeling, and skill parsing.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Standard English stopword list applied by the tokenizer.
const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "couldn", "did", "didn", "do", "does", "doesn",
    "doing", "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "shouldn", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn", "we", "were", "weren", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "won", "would", "wouldn", "you",
    "your", "yours", "yourself", "yourselves",
];

/// Short technical acronyms that bypass the length and stopword filters.
/// The upstream cleaning step emits these tokens verbatim.
const PRESERVE: &[&str] = &[
    "ai", "ml", "ar", "vr", "ui", "ux", "api", "aws", "gcp", "sql", "html", "css", "ios",
    "android", "react", "node", "vue", "php", "java", "python", "r", "scala", "go", "ruby",
    "swift", "kotlin", "3d", "bi", "etl", "devops", "cicd", "ci", "cd", "qa", "nlp", "cnn",
    "rnn", "gan", "bert", "gpt", "llm", "iot", "erp", "crm",
];

/// Small stopword set used when deriving cluster labels from career names.
pub const LABEL_STOPWORDS: &[&str] = &[
    "and", "the", "of", "in", "for", "to", "a", "an", "is", "are", "was", "were",
];

/// Stopwords dropped from parsed skill tags.
pub const SKILL_TAG_STOPWORDS: &[&str] = &["and", "the", "of", "in", "for"];

/// Stopword set used when scanning course skill text for roadmap pools.
pub const ROADMAP_STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "this", "that", "these", "those", "you",
    "your", "it", "its", "they", "their", "we", "our",
];

pub fn is_stopword(token: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH.iter().copied().collect())
        .contains(token)
}

pub fn is_preserved(token: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| PRESERVE.iter().copied().collect())
        .contains(token)
}
