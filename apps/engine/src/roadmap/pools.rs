//! Data-driven skill categorization pools.
//!
//! Derived from the course catalog once at first use: frequency scans over
//! the skill text of beginner, advanced, and all courses, sliced into
//! competency pools by threshold and indicator substrings.

use std::collections::HashSet;

use crate::models::{CourseRecord, Difficulty};
use crate::text;

const FOUNDATION_MIN_FREQ: usize = 5;
const FOUNDATION_CAP: usize = 15;
const TECHNICAL_MIN_FREQ: usize = 10;
const TECHNICAL_CAP: usize = 20;
const TOOLS_CAP: usize = 10;
const ADVANCED_MIN_FREQ: usize = 3;
const ADVANCED_CAP: usize = 10;
const SOFT_CAP: usize = 8;

const TOOL_INDICATORS: [&str; 5] = ["software", "platform", "framework", "library", "tool"];
const SOFT_INDICATORS: [&str; 5] = [
    "communication",
    "leadership",
    "teamwork",
    "presentation",
    "management",
];

/// Skill pools keyed by competency band. Lowercase terms, frequency order.
#[derive(Debug, Clone, Default)]
pub struct SkillPools {
    foundation: HashSet<String>,
    technical: HashSet<String>,
    tools: HashSet<String>,
    advanced: HashSet<String>,
    soft: HashSet<String>,
}

impl SkillPools {
    pub fn from_courses(courses: &[CourseRecord]) -> Self {
        let beginner_text = combined_skill_text(courses, Some(Difficulty::Beginner));
        let advanced_text = combined_skill_text(courses, Some(Difficulty::Advanced));
        let all_text = combined_skill_text(courses, None);

        let foundation = frequent_terms(&beginner_text, FOUNDATION_MIN_FREQ, FOUNDATION_CAP);
        let advanced = frequent_terms(&advanced_text, ADVANCED_MIN_FREQ, ADVANCED_CAP);
        let all_terms = frequent_terms(&all_text, TECHNICAL_MIN_FREQ, usize::MAX);

        let tools: Vec<String> = all_terms
            .iter()
            .filter(|t| TOOL_INDICATORS.iter().any(|ind| t.contains(ind)))
            .take(TOOLS_CAP)
            .cloned()
            .collect();
        let soft: Vec<String> = all_terms
            .iter()
            .filter(|t| SOFT_INDICATORS.iter().any(|ind| t.contains(ind)))
            .take(SOFT_CAP)
            .cloned()
            .collect();
        let technical: Vec<String> = all_terms.into_iter().take(TECHNICAL_CAP).collect();

        Self {
            foundation: foundation.into_iter().collect(),
            technical: technical.into_iter().collect(),
            tools: tools.into_iter().collect(),
            advanced: advanced.into_iter().collect(),
            soft: soft.into_iter().collect(),
        }
    }

    pub fn is_foundation(&self, skill: &str) -> bool {
        self.foundation.contains(&skill.to_lowercase())
    }

    pub fn is_technical(&self, skill: &str) -> bool {
        self.technical.contains(&skill.to_lowercase())
    }

    pub fn is_tool(&self, skill: &str) -> bool {
        self.tools.contains(&skill.to_lowercase())
    }

    pub fn is_advanced(&self, skill: &str) -> bool {
        self.advanced.contains(&skill.to_lowercase())
    }

    pub fn is_soft(&self, skill: &str) -> bool {
        self.soft.contains(&skill.to_lowercase())
    }
}

fn combined_skill_text(courses: &[CourseRecord], tier: Option<Difficulty>) -> String {
    courses
        .iter()
        .filter(|c| tier.map_or(true, |t| c.difficulty == t))
        .map(|c| c.skills.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Terms occurring at least `min_freq` times, most frequent first, capped.
fn frequent_terms(skill_text: &str, min_freq: usize, cap: usize) -> Vec<String> {
    text::frequency_ranked(text::skill_terms(skill_text))
        .into_iter()
        .filter(|(_, count)| *count >= min_freq)
        .take(cap)
        .map(|(term, _)| term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(skills: &str, difficulty: Difficulty) -> CourseRecord {
        CourseRecord {
            course_id: "c".to_string(),
            title: "t".to_string(),
            organization: "o".to_string(),
            rating: None,
            review_count: 0,
            difficulty,
            course_type: "Course".to_string(),
            duration: "4 weeks".to_string(),
            skills: skills.to_string(),
            url: String::new(),
            is_free: false,
            description: None,
        }
    }

    fn catalog_with_repeats() -> Vec<CourseRecord> {
        let mut courses = Vec::new();
        // "python" clears the 5× beginner and 10× overall thresholds;
        // "tableau software" clears 10× overall for the tools indicator.
        for _ in 0..6 {
            courses.push(course("python, software tableau_software", Difficulty::Beginner));
        }
        for _ in 0..5 {
            courses.push(course("python, software communication", Difficulty::Intermediate));
        }
        for _ in 0..4 {
            courses.push(course("statistics modeling, python", Difficulty::Advanced));
        }
        courses
    }

    #[test]
    fn test_foundation_pool_needs_five_beginner_occurrences() {
        let pools = SkillPools::from_courses(&catalog_with_repeats());
        assert!(pools.is_foundation("python"));
        // "statistics" never appears in a beginner course.
        assert!(!pools.is_foundation("statistics"));
    }

    #[test]
    fn test_technical_pool_needs_ten_overall_occurrences() {
        let pools = SkillPools::from_courses(&catalog_with_repeats());
        assert!(pools.is_technical("python"));
        // "communication" appears 5 times overall, under the threshold.
        assert!(!pools.is_technical("communication"));
    }

    #[test]
    fn test_tool_indicator_selects_tools_pool() {
        let pools = SkillPools::from_courses(&catalog_with_repeats());
        assert!(pools.is_tool("software"));
        assert!(!pools.is_tool("python"));
    }

    #[test]
    fn test_advanced_pool_needs_three_advanced_occurrences() {
        let pools = SkillPools::from_courses(&catalog_with_repeats());
        assert!(pools.is_advanced("statistics"));
        assert!(pools.is_advanced("modeling"));
    }

    #[test]
    fn test_membership_checks_are_case_insensitive() {
        let pools = SkillPools::from_courses(&catalog_with_repeats());
        assert!(pools.is_foundation("Python"));
        assert!(pools.is_technical("PYTHON"));
    }

    #[test]
    fn test_empty_catalog_yields_empty_pools() {
        let pools = SkillPools::from_courses(&[]);
        assert!(!pools.is_foundation("python"));
        assert!(!pools.is_technical("python"));
        assert!(!pools.is_tool("software"));
    }
}
