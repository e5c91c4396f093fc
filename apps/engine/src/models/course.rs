//! Course catalog records and recommendation results.

use serde::{Deserialize, Serialize};

/// Course difficulty tier. Catalog rows with unrecognized difficulty text map
/// to `Unknown` and are excluded by tier filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    Unknown,
}

impl Difficulty {
    /// Parses catalog difficulty text, case-insensitively.
    pub fn parse(text: &str) -> Self {
        Self::parse_filter(text).unwrap_or(Self::Unknown)
    }

    /// Parses a caller-supplied difficulty filter. Only the three real tiers
    /// are recognized; anything else yields `None` (filter ignored).
    pub fn parse_filter(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One course from the pre-cleaned catalog. `skills` is the raw delimited
/// text column; the engine parses it into tags on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course_id: String,
    pub title: String,
    pub organization: String,
    /// Absent when the catalog has no rating for the course.
    pub rating: Option<f32>,
    pub review_count: u32,
    pub difficulty: Difficulty,
    pub course_type: String,
    pub duration: String,
    /// Raw delimited skill text as ingested.
    pub skills: String,
    pub url: String,
    pub is_free: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// A ranked course recommendation. The relevance score is mutable on purpose:
/// personalization boosts are applied in place before the final sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub course_id: String,
    pub title: String,
    pub organization: String,
    pub rating: Option<f32>,
    pub review_count: u32,
    pub difficulty: Difficulty,
    pub course_type: String,
    pub duration: String,
    /// Parsed, title-cased skill tags.
    pub skills: Vec<String>,
    pub url: String,
    pub is_free: bool,
    pub relevance_score: f64,
    pub match_reasons: Vec<String>,
}

impl CourseRecommendation {
    /// Builds a recommendation from a catalog record plus ranking output.
    pub fn from_record(
        record: &CourseRecord,
        skills: Vec<String>,
        relevance_score: f64,
        match_reasons: Vec<String>,
    ) -> Self {
        Self {
            course_id: record.course_id.clone(),
            title: record.title.clone(),
            organization: record.organization.clone(),
            rating: record.rating,
            review_count: record.review_count,
            difficulty: record.difficulty,
            course_type: record.course_type.clone(),
            duration: record.duration.clone(),
            skills,
            url: record.url.clone(),
            is_free: record.is_free,
            relevance_score,
            match_reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("BEGINNER"), Difficulty::Beginner);
        assert_eq!(Difficulty::parse("Intermediate"), Difficulty::Intermediate);
        assert_eq!(Difficulty::parse("advanced"), Difficulty::Advanced);
    }

    #[test]
    fn test_unrecognized_difficulty_maps_to_unknown() {
        assert_eq!(Difficulty::parse("Expert"), Difficulty::Unknown);
        assert_eq!(Difficulty::parse(""), Difficulty::Unknown);
    }

    #[test]
    fn test_parse_filter_rejects_unknown_tiers() {
        assert_eq!(Difficulty::parse_filter("beginner"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse_filter("expert"), None);
        assert_eq!(Difficulty::parse_filter("unknown"), None);
    }

    #[test]
    fn test_difficulty_serializes_as_tier_name() {
        let json = serde_json::to_string(&Difficulty::Beginner).unwrap();
        assert_eq!(json, "\"Beginner\"");
    }
}
