//! Unsupervised career category discovery.
//!
//! Clusters career description documents with k-means over a TF-IDF space and
//! derives a human-readable label per cluster from the member careers' names.
//! The whole computation is deterministic under the fixed seed, so repeated
//! runs produce identical labels.

use std::collections::HashMap;

use tracing::debug;

use crate::text::{self, LABEL_STOPWORDS};
use crate::vector::{TfidfVectorizer, VectorizerParams};

use super::kmeans::KMeans;

/// Fixed seed for reproducible clustering.
const CLUSTER_SEED: u64 = 42;
const CLUSTER_RESTARTS: usize = 10;

/// Label for careers the clustering could not place.
pub const MISCELLANEOUS: &str = "Miscellaneous";

/// Clusters careers and returns a role → category-label map.
///
/// `careers` pairs each role name with its combined description document.
/// Fails when the corpus cannot support clustering (too few careers, or a
/// vocabulary emptied by the frequency filters).
pub fn discover_categories(careers: &[(String, String)]) -> Result<HashMap<String, String>, String> {
    let descriptions: Vec<&str> = careers.iter().map(|(_, text)| text.as_str()).collect();

    let space = TfidfVectorizer::fit(&descriptions, category_params())
        .ok_or_else(|| "empty vocabulary: career descriptions share no terms".to_string())?;

    let vocab_size = space.vocabulary_size();
    let rows: Vec<Vec<f64>> = space
        .transform(&descriptions)
        .into_iter()
        .map(|vector| {
            let mut dense = vec![0.0; vocab_size];
            for (col, weight) in vector.entries {
                dense[col] = weight;
            }
            dense
        })
        .collect();

    let n_clusters = cluster_count(careers.len());
    let fit = KMeans::new(n_clusters)
        .with_seed(CLUSTER_SEED)
        .with_n_init(CLUSTER_RESTARTS)
        .fit(&rows)
        .map_err(str::to_string)?;

    debug!(
        careers = careers.len(),
        clusters = n_clusters,
        iterations = fit.n_iter,
        "career clustering complete"
    );

    let mut members: HashMap<usize, Vec<&str>> = HashMap::new();
    for ((name, _), &label) in careers.iter().zip(&fit.labels) {
        members.entry(label).or_default().push(name.as_str());
    }

    let mut categories = HashMap::new();
    for (cluster_id, names) in &members {
        let label = cluster_label(names, &fit.centroids[*cluster_id], &space);
        for name in names {
            categories.insert((*name).to_string(), label.clone());
        }
    }

    Ok(categories)
}

/// Vector space for category discovery: capped at 500 terms, unigrams and
/// bigrams, terms in at least two career descriptions.
fn category_params() -> VectorizerParams {
    VectorizerParams::new(500, (1, 2), 2)
}

/// k = min(8, max(2, min(3, n))) — between 2 and 3 clusters for any corpus.
fn cluster_count(n_careers: usize) -> usize {
    n_careers.min(3).max(2).min(8)
}

/// Derives a cluster label from the most frequent meaningful tokens across
/// member career names. A frequency tie between the top two tokens joins
/// them; an empty token pool falls back to the strongest centroid term.
fn cluster_label(member_names: &[&str], centroid: &[f64], space: &TfidfVectorizer) -> String {
    let words = member_names.iter().flat_map(|name| {
        name.split_whitespace()
            .filter(|w| w.len() > 2)
            .map(str::to_lowercase)
            .filter(|w| !LABEL_STOPWORDS.contains(&w.as_str()))
    });

    let ranked = text::frequency_ranked(words);
    if let Some((primary, primary_count)) = ranked.first() {
        if let Some((secondary, secondary_count)) = ranked.get(1) {
            if primary_count == secondary_count {
                return format!(
                    "{} & {} Careers",
                    text::title_case(primary),
                    text::title_case(secondary)
                );
            }
        }
        return format!("{} Careers", text::title_case(primary));
    }

    // No usable name tokens: fall back to the highest-weight centroid term.
    let top = centroid
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(col, _)| col)
        .and_then(|col| space.term(col))
        .unwrap_or("general");
    format!("{}-Related", text::title_case(top))
}
