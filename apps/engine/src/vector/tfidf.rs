//! TF-IDF vector space — fit a vocabulary over a corpus, project documents
//! into it as L2-normalized sparse vectors.

use std::collections::{HashMap, HashSet};

use crate::text;

/// Vocabulary construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorizerParams {
    /// Vocabulary size cap. Excess terms are cut by total corpus frequency.
    pub max_features: usize,
    /// Inclusive n-gram range, e.g. (1, 2) for unigrams + bigrams.
    pub ngram_range: (usize, usize),
    /// Terms appearing in fewer than this many documents are dropped.
    pub min_df: usize,
}

impl VectorizerParams {
    pub fn new(max_features: usize, ngram_range: (usize, usize), min_df: usize) -> Self {
        Self {
            max_features,
            ngram_range: (ngram_range.0.max(1), ngram_range.1.max(1)),
            min_df: min_df.max(1),
        }
    }
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self::new(1000, (1, 2), 1)
    }
}

/// A document projected into a fitted vector space: sparse (column, weight)
/// pairs sorted by column, L2-normalized (or all-zero).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocVector {
    pub entries: Vec<(usize, f64)>,
}

impl DocVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Squared L2 norm. 1.0 after normalization, 0.0 for empty documents.
    pub fn norm_squared(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum()
    }
}

/// A fitted TF-IDF vector space. The vocabulary is frozen after `fit`; new
/// documents are projected into the same space and out-of-vocabulary terms
/// contribute nothing.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    params: VectorizerParams,
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits a vocabulary over `documents`. Returns `None` when no term
    /// survives the frequency filters — the degenerate case callers must
    /// degrade to zero-similarity results.
    pub fn fit<S: AsRef<str>>(documents: &[S], params: VectorizerParams) -> Option<Self> {
        if documents.is_empty() {
            return None;
        }

        let n_docs = documents.len();
        let mut term_freq: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut discovery: Vec<String> = Vec::new();

        for doc in documents {
            let tokens = text::tokenize_preserving(doc.as_ref());
            let mut seen: HashSet<String> = HashSet::new();
            for term in ngrams(&tokens, params.ngram_range) {
                if !term_freq.contains_key(&term) {
                    discovery.push(term.clone());
                }
                *term_freq.entry(term.clone()).or_insert(0) += 1;
                seen.insert(term);
            }
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Discovery order doubles as the tie-break and the column order.
        let order: HashMap<&str, usize> = discovery
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let mut kept: Vec<&String> = discovery
            .iter()
            .filter(|t| doc_freq.get(t.as_str()).copied().unwrap_or(0) >= params.min_df)
            .collect();

        if kept.len() > params.max_features {
            kept.sort_by(|a, b| {
                term_freq[b.as_str()]
                    .cmp(&term_freq[a.as_str()])
                    .then_with(|| order[a.as_str()].cmp(&order[b.as_str()]))
            });
            kept.truncate(params.max_features);
            kept.sort_by_key(|t| order[t.as_str()]);
        }

        if kept.is_empty() {
            return None;
        }

        let terms: Vec<String> = kept.into_iter().cloned().collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        let idf: Vec<f64> = terms
            .iter()
            .map(|t| {
                let df = doc_freq.get(t.as_str()).copied().unwrap_or(0);
                ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0
            })
            .collect();

        Some(Self {
            params,
            vocabulary,
            terms,
            idf,
        })
    }

    /// Projects documents into the fitted space.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Vec<DocVector> {
        documents
            .iter()
            .map(|doc| self.transform_one(doc.as_ref()))
            .collect()
    }

    /// Projects a single document into the fitted space.
    pub fn transform_one(&self, document: &str) -> DocVector {
        let tokens = text::tokenize_preserving(document);
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in ngrams(&tokens, self.params.ngram_range) {
            if let Some(&col) = self.vocabulary.get(&term) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, count)| (col, count * self.idf[col]))
            .collect();
        entries.sort_by_key(|(col, _)| *col);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        DocVector { entries }
    }

    /// Vocabulary term for a given column index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// The `k` highest-weighted vocabulary terms of a vector, strongest first.
    /// Zero-weight columns never appear.
    pub fn top_terms(&self, vector: &DocVector, k: usize) -> Vec<String> {
        let mut entries: Vec<(usize, f64)> = vector
            .entries
            .iter()
            .copied()
            .filter(|(_, w)| *w > 0.0)
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
            .into_iter()
            .take(k)
            .filter_map(|(col, _)| self.term(col).map(str::to_string))
            .collect()
    }
}

/// Expands tokens into space-joined n-grams over the inclusive range.
fn ngrams(tokens: &[String], range: (usize, usize)) -> Vec<String> {
    let mut out = Vec::new();
    for n in range.0..=range.1 {
        for window in tokens.windows(n) {
            out.push(window.join(" "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unigram_params(max_features: usize, min_df: usize) -> VectorizerParams {
        VectorizerParams::new(max_features, (1, 1), min_df)
    }

    #[test]
    fn test_fit_builds_vocabulary_in_discovery_order() {
        let docs = ["python programming basics", "python data analysis"];
        let space = TfidfVectorizer::fit(&docs, unigram_params(100, 1)).unwrap();
        assert_eq!(space.term(0), Some("python"));
        assert_eq!(space.term(1), Some("programming"));
        assert_eq!(space.vocabulary_size(), 5);
    }

    #[test]
    fn test_transform_vectors_are_l2_normalized() {
        let docs = ["data analysis with python", "python web development"];
        let space = TfidfVectorizer::fit(&docs, unigram_params(100, 1)).unwrap();
        for vector in space.transform(&docs) {
            assert!((vector.norm_squared() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_out_of_vocabulary_document_is_zero_vector() {
        let docs = ["data analysis", "data visualization"];
        let space = TfidfVectorizer::fit(&docs, unigram_params(100, 1)).unwrap();
        let vector = space.transform_one("unrelated topics entirely");
        assert!(vector.is_zero());
        assert_eq!(vector.norm_squared(), 0.0);
    }

    #[test]
    fn test_min_df_drops_rare_terms() {
        let docs = ["python data", "python charts", "python models"];
        let space = TfidfVectorizer::fit(&docs, unigram_params(100, 2)).unwrap();
        // Only "python" appears in two or more documents.
        assert_eq!(space.vocabulary_size(), 1);
        assert_eq!(space.term(0), Some("python"));
    }

    #[test]
    fn test_max_features_keeps_most_frequent_terms() {
        let docs = [
            "python python python charts",
            "python models charts charts",
        ];
        let space = TfidfVectorizer::fit(&docs, unigram_params(2, 1)).unwrap();
        // "python" (4) and "charts" (3) survive; "models" (1) is cut.
        // Column order stays discovery order.
        assert_eq!(space.term(0), Some("python"));
        assert_eq!(space.term(1), Some("charts"));
        assert_eq!(space.vocabulary_size(), 2);
    }

    #[test]
    fn test_fit_returns_none_when_nothing_survives() {
        let docs = ["", "   "];
        assert!(TfidfVectorizer::fit(&docs, VectorizerParams::default()).is_none());
        // min_df of 2 with disjoint documents also empties the vocabulary.
        let disjoint = ["alpha topics", "gamma subjects"];
        assert!(TfidfVectorizer::fit(&disjoint, unigram_params(100, 2)).is_none());
    }

    #[test]
    fn test_bigrams_are_included_in_vocabulary() {
        let docs = ["machine learning models", "machine learning systems"];
        let space = TfidfVectorizer::fit(&docs, VectorizerParams::new(100, (1, 2), 1)).unwrap();
        let vector = space.transform_one("machine learning");
        let terms = space.top_terms(&vector, 10);
        assert!(terms.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_top_terms_orders_by_weight_and_skips_zeros() {
        let docs = ["python python charts", "models"];
        let space = TfidfVectorizer::fit(&docs, unigram_params(100, 1)).unwrap();
        let vector = space.transform_one("python python python charts");
        let terms = space.top_terms(&vector, 10);
        assert_eq!(terms[0], "python");
        assert!(!terms.contains(&"models".to_string()));
    }

    #[test]
    fn test_idf_weights_rare_terms_higher() {
        let docs = ["python data", "python charts", "python models"];
        let space = TfidfVectorizer::fit(&docs, unigram_params(100, 1)).unwrap();
        let vector = space.transform_one("python data");
        // "data" appears in one document, "python" in all three.
        let terms = space.top_terms(&vector, 2);
        assert_eq!(terms[0], "data");
    }
}
