//! Cosine similarity and query-against-candidates ranking.
//!
//! Ranking fits the vector space jointly over `[query] ++ candidates` (row 0
//! is the query by convention) so that query and candidate vectors are
//! comparable; a vocabulary fit on candidates alone would not be.

use tracing::debug;

use super::tfidf::{DocVector, TfidfVectorizer, VectorizerParams};

/// Substituted for empty documents so a joint fit never collapses.
const PLACEHOLDER_TEXT: &str = "placeholder content";

/// Cosine similarity of two sparse vectors in the same space. Zero vectors
/// yield 0.0, never NaN.
pub fn cosine(a: &DocVector, b: &DocVector) -> f64 {
    let norm_a = a.norm_squared().sqrt();
    let norm_b = b.norm_squared().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.entries.len() && j < b.entries.len() {
        let (col_a, w_a) = a.entries[i];
        let (col_b, w_b) = b.entries[j];
        match col_a.cmp(&col_b) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += w_a * w_b;
                i += 1;
                j += 1;
            }
        }
    }
    dot / (norm_a * norm_b)
}

/// Result of ranking one query against N candidates in a joint vector space.
#[derive(Debug, Default)]
pub struct RankedSpace {
    /// Per-candidate similarity to the query, in candidate input order.
    pub similarities: Vec<f64>,
    /// The fitted space, absent when no usable text existed.
    pub space: Option<TfidfVectorizer>,
    /// Candidate vectors in the fitted space, parallel to `similarities`.
    pub candidates: Vec<DocVector>,
}

/// Ranks `candidates` against `query` with a jointly fitted TF-IDF space.
/// Empty or whitespace documents are replaced with a placeholder so fitting
/// never fails; if no document carries usable text the result degrades to
/// all-zero similarities.
pub fn rank_against<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    params: VectorizerParams,
) -> RankedSpace {
    let all_empty = query.trim().is_empty()
        && candidates.iter().all(|c| c.as_ref().trim().is_empty());
    if all_empty {
        debug!(candidates = candidates.len(), "no usable text to vectorize");
        return RankedSpace {
            similarities: vec![0.0; candidates.len()],
            ..RankedSpace::default()
        };
    }

    let mut texts: Vec<&str> = Vec::with_capacity(candidates.len() + 1);
    texts.push(non_empty_or_placeholder(query));
    for candidate in candidates {
        texts.push(non_empty_or_placeholder(candidate.as_ref()));
    }

    let Some(space) = TfidfVectorizer::fit(&texts, params) else {
        debug!(
            candidates = candidates.len(),
            "vocabulary collapsed during fit, degrading to zero similarities"
        );
        return RankedSpace {
            similarities: vec![0.0; candidates.len()],
            ..RankedSpace::default()
        };
    };

    let mut vectors = space.transform(&texts);
    let query_vector = vectors.remove(0);
    let similarities: Vec<f64> = vectors.iter().map(|v| cosine(&query_vector, v)).collect();

    RankedSpace {
        similarities,
        space: Some(space),
        candidates: vectors,
    }
}

/// Candidate indices ordered by descending score. The sort is stable, so ties
/// keep input order (first-seen wins).
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

fn non_empty_or_placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        PLACEHOLDER_TEXT
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> VectorizerParams {
        VectorizerParams::new(100, (1, 1), 1)
    }

    #[test]
    fn test_cosine_of_vector_with_itself_is_one() {
        let docs = ["data analysis python", "web design"];
        let space = TfidfVectorizer::fit(&docs, params()).unwrap();
        let vector = space.transform_one("data analysis python");
        assert!((cosine(&vector, &vector) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let docs = ["data analysis python", "python web design"];
        let space = TfidfVectorizer::fit(&docs, params()).unwrap();
        let vectors = space.transform(&docs);
        let ab = cosine(&vectors[0], &vectors[1]);
        let ba = cosine(&vectors[1], &vectors[0]);
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_yields_zero_not_nan() {
        let zero = DocVector::default();
        let result = cosine(&zero, &zero);
        assert_eq!(result, 0.0);
        assert!(!result.is_nan());
    }

    #[test]
    fn test_rank_against_all_empty_degrades_to_zeros() {
        let candidates = ["", "  "];
        let ranked = rank_against("", &candidates, params());
        assert_eq!(ranked.similarities, vec![0.0, 0.0]);
        assert!(ranked.space.is_none());
    }

    #[test]
    fn test_rank_against_substitutes_placeholder_for_empty_candidate() {
        let candidates = ["data analysis", ""];
        let ranked = rank_against("data analysis work", &candidates, params());
        assert_eq!(ranked.similarities.len(), 2);
        assert!(ranked.similarities[0] > 0.0);
        assert!(ranked.similarities.iter().all(|s| !s.is_nan()));
    }

    #[test]
    fn test_rank_against_scores_relevant_candidate_highest() {
        let candidates = [
            "statistics data analysis visualization",
            "cooking recipes baking bread",
        ];
        let ranked = rank_against("data analysis and statistics", &candidates, params());
        assert!(ranked.similarities[0] > ranked.similarities[1]);
    }

    #[test]
    fn test_rank_descending_is_stable_on_ties() {
        let order = rank_descending(&[0.5, 0.9, 0.5, 0.1]);
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_similarities_stay_in_unit_interval() {
        let candidates = ["data analysis", "data analysis", "web design"];
        let ranked = rank_against("data analysis", &candidates, params());
        for s in &ranked.similarities {
            assert!((0.0..=1.0 + 1e-9).contains(s), "similarity {s} out of range");
        }
    }
}
