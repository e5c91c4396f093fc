//! Roadmap synthesis — merges skill signals from the career corpus and the
//! course catalog into an ordered sequence of timed learning checkpoints.

mod duration;
mod pools;

pub use duration::{format_duration, parse_weeks};
pub use pools::SkillPools;

use tracing::debug;

use crate::models::{career_slug, Checkpoint, CourseRecord, Roadmap};
use crate::text;

const COMBINED_SKILL_CAP: usize = 25;

/// Substrings marking a skill as practical / hands-on.
const PRACTICAL_INDICATORS: [&str; 5] = [
    "project",
    "application",
    "implementation",
    "development",
    "analysis",
];

/// Builds learning roadmaps. The skill pools are derived from the course
/// catalog once at construction and reused for every career.
pub struct RoadmapSynthesizer {
    pools: SkillPools,
}

impl RoadmapSynthesizer {
    pub fn new(courses: &[CourseRecord]) -> Self {
        Self {
            pools: SkillPools::from_courses(courses),
        }
    }

    /// Synthesizes a roadmap for one career from its Q&A skills plus the
    /// skills mined from related courses. Checkpoints appear in a fixed
    /// competency order; a band with no qualifying skills is skipped.
    pub fn generate(
        &self,
        career_name: &str,
        qa_skills: &[String],
        course_skills: &[String],
    ) -> Roadmap {
        let combined = qa_skills.iter().chain(course_skills).cloned();
        let prioritized: Vec<String> = text::frequency_ranked(combined)
            .into_iter()
            .take(COMBINED_SKILL_CAP)
            .map(|(skill, _)| skill)
            .collect();

        let checkpoints = self.build_checkpoints(&prioritized, career_name);
        let total_weeks: u32 = checkpoints
            .iter()
            .map(|cp| parse_weeks(&cp.estimated_time))
            .sum();

        debug!(
            career = career_name,
            checkpoints = checkpoints.len(),
            total_weeks,
            "roadmap synthesized"
        );

        Roadmap {
            career_id: career_slug(career_name),
            career_name: career_name.to_string(),
            total_checkpoints: checkpoints.len() as u32,
            estimated_duration: format_duration(total_weeks),
            checkpoints,
        }
    }

    fn build_checkpoints(&self, skills: &[String], career: &str) -> Vec<Checkpoint> {
        let mut checkpoints = Vec::new();

        let stages: [(&str, String, Box<dyn Fn(&str) -> bool + '_>, usize, &str, &str); 6] = [
            (
                "Foundation Skills",
                format!("Build fundamental knowledge required for {career}"),
                Box::new(|s| self.pools.is_foundation(s)),
                5,
                "4-6 weeks",
                "career_qa + courses",
            ),
            (
                "Core Technical Skills",
                format!("Master essential technical skills for {career}"),
                Box::new(|s| self.pools.is_technical(s)),
                6,
                "6-8 weeks",
                "career_qa + courses",
            ),
            (
                "Tools and Technologies",
                format!("Learn industry-standard tools for {career}"),
                Box::new(|s| self.pools.is_tool(s)),
                5,
                "4-6 weeks",
                "courses",
            ),
            (
                "Practical Application",
                "Apply skills through hands-on projects and real-world scenarios".to_string(),
                Box::new(|s: &str| {
                    let lower = s.to_lowercase();
                    PRACTICAL_INDICATORS.iter().any(|ind| lower.contains(ind))
                }),
                4,
                "6-8 weeks",
                "career_qa + courses",
            ),
            (
                "Advanced Specialization",
                format!("Develop advanced expertise in {career}"),
                Box::new(|s| self.pools.is_advanced(s)),
                4,
                "8-10 weeks",
                "courses",
            ),
            (
                "Professional Skills",
                "Develop communication and professional skills for career success".to_string(),
                Box::new(|s| self.pools.is_soft(s)),
                4,
                "3-4 weeks",
                "career_qa",
            ),
        ];

        for (title, description, qualifies, cap, estimate, source) in stages {
            let derived: Vec<String> = skills
                .iter()
                .filter(|s| qualifies(s))
                .take(cap)
                .cloned()
                .collect();
            if derived.is_empty() {
                continue;
            }
            checkpoints.push(Checkpoint {
                checkpoint_id: checkpoints.len() as u32 + 1,
                title: title.to_string(),
                description,
                skills_derived: derived,
                estimated_time: estimate.to_string(),
                skills_source: source.to_string(),
            });
        }

        checkpoints
    }
}
