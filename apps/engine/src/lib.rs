//! Career assessment engine.
//!
//! Matches free-text assessment answers against a career Q&A dataset with
//! TF-IDF similarity, discovers career categories by clustering, recommends
//! and personalizes courses from a catalog, and synthesizes per-career
//! learning roadmaps. Everything is deterministic for a given dataset: fixed
//! clustering seed, stable tie-breaks, no wall-clock or random inputs.
//!
//! [`CareerEngine`] is the entry point; construct it from dataset rows and
//! optionally attach a course catalog:
//!
//! ```no_run
//! use engine::{CareerEngine, CareerQa};
//!
//! let rows = vec![CareerQa::new("Data Analyst", "What is the daily work?", "analyze data")];
//! let engine = CareerEngine::new(rows);
//! let matches = engine.match_careers(&["I like working with data".to_string()]);
//! ```

pub mod cluster;
mod engine;
mod errors;
pub mod matching;
pub mod models;
pub mod recommend;
pub mod roadmap;
pub mod text;
pub mod vector;

pub use engine::CareerEngine;
pub use errors::EngineError;
pub use models::{
    career_slug, CareerMatch, CareerQa, Checkpoint, CourseRecommendation, CourseRecord,
    Difficulty, LearningPath, LearningPathStep, Roadmap, UserProfile,
};
pub use recommend::parse_skill_tags;
pub use vector::{cosine, VectorizerParams};
