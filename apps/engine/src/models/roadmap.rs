//! Learning roadmap and learning path results.

use serde::{Deserialize, Serialize};

use super::course::{CourseRecommendation, Difficulty};

/// One stage of a learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub checkpoint_id: u32,
    pub title: String,
    pub description: String,
    pub skills_derived: Vec<String>,
    /// Human-readable estimate, e.g. "4-6 weeks".
    pub estimated_time: String,
    /// Which upstream source supplied the skills.
    pub skills_source: String,
}

/// A multi-stage learning roadmap for one career. Generated fresh per
/// request, never cached across careers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub career_id: String,
    pub career_name: String,
    pub total_checkpoints: u32,
    pub estimated_duration: String,
    pub checkpoints: Vec<Checkpoint>,
}

/// One difficulty tier of a learning path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathStep {
    pub level: Difficulty,
    pub courses: Vec<CourseRecommendation>,
}

/// A difficulty-tiered course sequence toward a career goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    pub career_goal: String,
    pub current_level: String,
    pub steps: Vec<LearningPathStep>,
    pub total_duration: String,
    pub total_courses: u32,
}
