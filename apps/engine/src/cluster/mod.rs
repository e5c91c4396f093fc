//! Unsupervised clustering — k-means plus career category discovery.

mod categories;
mod kmeans;

pub use categories::{discover_categories, MISCELLANEOUS};
pub use kmeans::{KMeans, KMeansFit};
