//! The engine facade — owns the career index, the optional course
//! recommender, and the lazily-built clustering and roadmap state.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::cluster::{discover_categories, MISCELLANEOUS};
use crate::errors::EngineError;
use crate::matching::{match_careers, CareerIndex};
use crate::models::{
    CareerMatch, CareerQa, CourseRecommendation, CourseRecord, Difficulty, LearningPath,
    LearningPathStep, Roadmap, UserProfile,
};
use crate::recommend::CourseRecommender;
use crate::roadmap::RoadmapSynthesizer;

const LEARNING_PATH_POOL: usize = 50;
const LEARNING_PATH_COURSES_PER_TIER: usize = 5;
const WEEKS_PER_COURSE: u32 = 2;

/// Career assessment engine over a Q&A dataset and an optional course
/// catalog. Category discovery and roadmap skill pools are computed once on
/// first use and reused for the engine's lifetime.
pub struct CareerEngine {
    index: CareerIndex,
    recommender: Option<CourseRecommender>,
    categories: OnceLock<HashMap<String, String>>,
    synthesizer: OnceLock<RoadmapSynthesizer>,
}

impl CareerEngine {
    pub fn new(careers: Vec<CareerQa>) -> Self {
        info!(rows = careers.len(), "career engine initialized");
        Self {
            index: CareerIndex::new(&careers),
            recommender: None,
            categories: OnceLock::new(),
            synthesizer: OnceLock::new(),
        }
    }

    /// Attaches a course catalog, enabling the recommendation and
    /// learning-path operations.
    pub fn with_courses(mut self, courses: Vec<CourseRecord>) -> Self {
        self.recommender = Some(CourseRecommender::new(courses));
        self
    }

    /// Distinct career roles in dataset order.
    pub fn careers(&self) -> &[String] {
        self.index.roles()
    }

    /// Ranks every career against the user's free-text assessment answers.
    /// Never fails: unusable input degrades to zero scores in dataset order.
    pub fn match_careers(&self, answers: &[String]) -> Vec<CareerMatch> {
        match_careers(&self.index, answers)
    }

    /// The discovered category label for a career.
    pub fn category_of(&self, role: &str) -> Result<String, EngineError> {
        if !self.index.contains(role) {
            return Err(EngineError::CareerNotFound(role.to_string()));
        }
        let categories = self.categories()?;
        Ok(categories
            .get(role)
            .cloned()
            .unwrap_or_else(|| MISCELLANEOUS.to_string()))
    }

    /// Frequency-ranked skill terms extracted from a career's answers.
    pub fn career_skills(&self, role: &str) -> Result<Vec<String>, EngineError> {
        if !self.index.contains(role) {
            return Err(EngineError::CareerNotFound(role.to_string()));
        }
        Ok(self.index.qa_skills(role))
    }

    /// Courses ranked against a career. A role present in the dataset is
    /// expanded to its full Q&A text; an unknown name is used verbatim as the
    /// query, so ad-hoc career strings still get sensible results.
    pub fn recommend_for_career(
        &self,
        career: &str,
        limit: usize,
        difficulty: Option<&str>,
    ) -> Result<Vec<CourseRecommendation>, EngineError> {
        let recommender = self.recommender()?;
        let query = self.career_query(career);
        Ok(recommender.by_career(&query, limit, difficulty))
    }

    /// Courses ranked against a target skill list.
    pub fn recommend_for_skills(
        &self,
        target_skills: &[String],
        limit: usize,
    ) -> Result<Vec<CourseRecommendation>, EngineError> {
        Ok(self.recommender()?.by_skills(target_skills, limit))
    }

    /// Popularity-ranked courses, independent of any career.
    pub fn trending(
        &self,
        limit: usize,
        min_rating: f32,
    ) -> Result<Vec<CourseRecommendation>, EngineError> {
        Ok(self.recommender()?.trending(limit, min_rating))
    }

    /// Personalized recommendations across all of a user's career goals:
    /// per-goal ranking with the profile's difficulty filter, deduplicated
    /// first-wins, boosted, and re-sorted.
    pub fn personalized(
        &self,
        profile: &UserProfile,
        limit: usize,
    ) -> Result<Vec<CourseRecommendation>, EngineError> {
        let recommender = self.recommender()?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut pool: Vec<CourseRecommendation> = Vec::new();
        for goal in &profile.career_goals {
            let query = self.career_query(goal);
            let filter = Some(profile.difficulty_preference.as_str());
            for rec in recommender.by_career(&query, limit * 2, filter) {
                if seen.insert(rec.course_id.clone()) {
                    pool.push(rec);
                }
            }
        }

        recommender.apply_personalization(&mut pool, profile);
        pool.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        pool.truncate(limit);

        debug!(
            user = profile.user_id.as_str(),
            goals = profile.career_goals.len(),
            results = pool.len(),
            "personalized recommendations assembled"
        );
        Ok(pool)
    }

    /// A difficulty-tiered course sequence toward a career goal. The user's
    /// current level decides which tiers the path spans.
    pub fn learning_path(
        &self,
        career_goal: &str,
        current_level: &str,
    ) -> Result<LearningPath, EngineError> {
        let recommender = self.recommender()?;
        let query = self.career_query(career_goal);
        let ranked = recommender.by_career(&query, LEARNING_PATH_POOL, None);

        let tiers: Vec<Difficulty> = match current_level.to_lowercase().as_str() {
            "intermediate" => vec![Difficulty::Beginner, Difficulty::Intermediate],
            "advanced" => vec![
                Difficulty::Beginner,
                Difficulty::Intermediate,
                Difficulty::Advanced,
            ],
            _ => vec![Difficulty::Beginner],
        };

        // Tiers with no courses are dropped entirely, not emitted empty.
        let steps: Vec<LearningPathStep> = tiers
            .iter()
            .filter_map(|&level| {
                let courses: Vec<CourseRecommendation> = ranked
                    .iter()
                    .filter(|r| r.difficulty == level)
                    .take(LEARNING_PATH_COURSES_PER_TIER)
                    .cloned()
                    .collect();
                if courses.is_empty() {
                    None
                } else {
                    Some(LearningPathStep { level, courses })
                }
            })
            .collect();

        let total_courses: u32 = steps.iter().map(|s| s.courses.len() as u32).sum();
        Ok(LearningPath {
            career_goal: career_goal.to_string(),
            current_level: current_level.to_string(),
            total_duration: format!("{} weeks", total_courses * WEEKS_PER_COURSE),
            total_courses,
            steps,
        })
    }

    /// A learning roadmap for a career in the dataset. Without a course
    /// catalog the roadmap degrades to the Q&A skill signal alone.
    pub fn build_roadmap(&self, role: &str) -> Result<Roadmap, EngineError> {
        if !self.index.contains(role) {
            return Err(EngineError::CareerNotFound(role.to_string()));
        }

        let qa_skills = self.index.qa_skills(role);
        let course_skills = match (&self.recommender, self.index.description(role)) {
            (Some(recommender), Some(description)) => {
                recommender.related_course_skills(&description)
            }
            _ => Vec::new(),
        };

        let synthesizer = self.synthesizer.get_or_init(|| {
            let catalog = self
                .recommender
                .as_ref()
                .map(|r| r.courses())
                .unwrap_or(&[]);
            RoadmapSynthesizer::new(catalog)
        });
        Ok(synthesizer.generate(role, &qa_skills, &course_skills))
    }

    fn recommender(&self) -> Result<&CourseRecommender, EngineError> {
        self.recommender
            .as_ref()
            .ok_or(EngineError::RecommenderUnavailable)
    }

    /// Role → category map, clustered once and cached on success only, so a
    /// transient failure does not poison later calls.
    fn categories(&self) -> Result<&HashMap<String, String>, EngineError> {
        if let Some(cached) = self.categories.get() {
            return Ok(cached);
        }
        let careers: Vec<(String, String)> = self
            .index
            .roles()
            .iter()
            .map(|role| {
                let description = self.index.description(role).unwrap_or_default();
                (role.clone(), description)
            })
            .collect();
        let computed = discover_categories(&careers).map_err(EngineError::Computation)?;
        Ok(self.categories.get_or_init(|| computed))
    }

    fn career_query(&self, career: &str) -> String {
        self.index
            .description(career)
            .unwrap_or_else(|| career.to_string())
    }
}
