//! User profile for personalized recommendations.

use serde::{Deserialize, Serialize};

/// Stated preferences driving the personalization re-ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub preferred_skills: Vec<String>,
    /// "beginner" | "intermediate" | "advanced" — compared case-insensitively.
    pub difficulty_preference: String,
    pub time_availability: String,
    /// "free" boosts free courses.
    pub budget_preference: String,
    pub learning_style: String,
    pub career_goals: Vec<String>,
}
