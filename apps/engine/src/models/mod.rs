//! Typed data model shared across the engine — dataset records in, plain
//! serializable results out. No framework types leak from here.

mod career;
mod course;
mod profile;
mod roadmap;

pub use career::{career_slug, CareerMatch, CareerQa};
pub use course::{CourseRecommendation, CourseRecord, Difficulty};
pub use profile::UserProfile;
pub use roadmap::{Checkpoint, LearningPath, LearningPathStep, Roadmap};
