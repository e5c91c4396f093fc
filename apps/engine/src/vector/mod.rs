//! Shared vectorization and similarity primitives.
//!
//! Every ranking path in the engine goes through this module: fit a TF-IDF
//! space, project documents, compare with cosine similarity. Spaces are refit
//! per logical request and never persisted.

mod similarity;
mod tfidf;

pub use similarity::{cosine, rank_against, rank_descending, RankedSpace};
pub use tfidf::{DocVector, TfidfVectorizer, VectorizerParams};
