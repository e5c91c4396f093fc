//! Course recommendation — similarity ranking, trending scores, and the
//! personalization re-ranking pass.

mod skills;

pub use skills::parse_skill_tags;

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use tracing::debug;

use crate::models::{CourseRecommendation, CourseRecord, Difficulty, UserProfile};
use crate::text;
use crate::vector::{rank_against, RankedSpace, VectorizerParams};

const RELATED_COURSE_COUNT: usize = 30;
const RELATED_SKILL_COUNT: usize = 15;
const TRENDING_REVIEW_FLOOR: u32 = 100;
const MATCH_REASON_TERMS: usize = 5;

const DIFFICULTY_BOOST: f64 = 0.1;
const FREE_BOOST: f64 = 0.1;
const SKILL_BOOST_PER_OVERLAP: f64 = 0.05;
const SKILL_BOOST_CAP: f64 = 0.2;

/// Ranks the course catalog against careers, skill lists, and popularity.
/// Holds the catalog and the process-wide skill-tag parse cache.
pub struct CourseRecommender {
    courses: Vec<CourseRecord>,
    tag_cache: Mutex<HashMap<String, Vec<String>>>,
}

impl CourseRecommender {
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        debug!(courses = courses.len(), "course recommender initialized");
        Self {
            courses,
            tag_cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Parsed skill tags for a raw skills field, memoized per raw text.
    pub fn course_tags(&self, raw: &str) -> Vec<String> {
        if let Some(cached) = self
            .tag_cache
            .lock()
            .ok()
            .and_then(|cache| cache.get(raw).cloned())
        {
            return cached;
        }
        let tags = parse_skill_tags(raw);
        if let Ok(mut cache) = self.tag_cache.lock() {
            cache.entry(raw.to_string()).or_insert_with(|| tags.clone());
        }
        tags
    }

    /// Ranks courses against a career's combined Q&A text. `difficulty`
    /// post-filters the ranked order; unrecognized tier strings are ignored.
    pub fn by_career(
        &self,
        career_text: &str,
        limit: usize,
        difficulty: Option<&str>,
    ) -> Vec<CourseRecommendation> {
        if self.courses.is_empty() || career_text.trim().is_empty() {
            return Vec::new();
        }

        let texts: Vec<String> = self
            .courses
            .iter()
            .map(|c| {
                format!(
                    "{} {} {}",
                    c.title,
                    c.skills,
                    c.description.as_deref().unwrap_or("")
                )
            })
            .collect();
        let ranked = rank_against(career_text, &texts, VectorizerParams::new(2000, (1, 2), 2));
        let tier = difficulty.and_then(Difficulty::parse_filter);

        let mut recommendations = Vec::new();
        for idx in crate::vector::rank_descending(&ranked.similarities) {
            if recommendations.len() >= limit {
                break;
            }
            let course = &self.courses[idx];
            if let Some(tier) = tier {
                if course.difficulty != tier {
                    continue;
                }
            }
            let reasons = self.match_reasons(course, &ranked);
            recommendations.push(CourseRecommendation::from_record(
                course,
                self.course_tags(&course.skills),
                round3(ranked.similarities[idx]),
                reasons,
            ));
        }
        recommendations
    }

    /// Ranks courses against a target skill list; literal tag overlap is
    /// surfaced as a match reason.
    pub fn by_skills(&self, target_skills: &[String], limit: usize) -> Vec<CourseRecommendation> {
        if self.courses.is_empty() {
            return Vec::new();
        }

        let query = target_skills.join(" ");
        let texts: Vec<String> = self
            .courses
            .iter()
            .map(|c| format!("{} {}", c.title, c.skills))
            .collect();
        let ranked = rank_against(&query, &texts, VectorizerParams::new(1500, (1, 2), 1));
        let targets: HashSet<&str> = target_skills.iter().map(String::as_str).collect();

        crate::vector::rank_descending(&ranked.similarities)
            .into_iter()
            .take(limit)
            .map(|idx| {
                let course = &self.courses[idx];
                let tags = self.course_tags(&course.skills);
                let overlap = tags.iter().filter(|t| targets.contains(t.as_str())).count();
                let reasons = if overlap > 0 {
                    vec![format!("Matches {overlap} target skills")]
                } else {
                    Vec::new()
                };
                CourseRecommendation::from_record(
                    course,
                    tags,
                    round3(ranked.similarities[idx]),
                    reasons,
                )
            })
            .collect()
    }

    /// Popularity ranking: rating ≥ `min_rating` and at least 100 reviews,
    /// falling back to the whole catalog when the filter empties the pool.
    /// Not similarity-based.
    pub fn trending(&self, limit: usize, min_rating: f32) -> Vec<CourseRecommendation> {
        if self.courses.is_empty() {
            return Vec::new();
        }

        let mut pool: Vec<usize> = (0..self.courses.len())
            .filter(|&i| {
                let course = &self.courses[i];
                course.rating.map_or(false, |r| r >= min_rating)
                    && course.review_count >= TRENDING_REVIEW_FLOOR
            })
            .collect();
        if pool.is_empty() {
            debug!(min_rating, "trending filter emptied the pool, using full catalog");
            pool = (0..self.courses.len()).collect();
        }

        let mut scored: Vec<(usize, f64)> = pool
            .into_iter()
            .map(|i| (i, trending_score(&self.courses[i])))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(limit)
            .map(|(idx, score)| {
                let course = &self.courses[idx];
                CourseRecommendation::from_record(
                    course,
                    self.course_tags(&course.skills),
                    round3(score),
                    vec!["High rating and popular".to_string()],
                )
            })
            .collect()
    }

    /// The `top_n` course indices most similar to a career, with scores.
    /// Compares against title + skills only; used for roadmap skill mining.
    pub fn related_courses(&self, career_text: &str, top_n: usize) -> Vec<(usize, f64)> {
        if self.courses.is_empty() || career_text.trim().is_empty() {
            return Vec::new();
        }
        let texts: Vec<String> = self
            .courses
            .iter()
            .map(|c| format!("{} {}", c.title, c.skills))
            .collect();
        let ranked = rank_against(career_text, &texts, VectorizerParams::new(2000, (1, 2), 2));
        crate::vector::rank_descending(&ranked.similarities)
            .into_iter()
            .take(top_n)
            .map(|idx| (idx, ranked.similarities[idx]))
            .collect()
    }

    /// Frequency-ranked skill terms mined from the courses most related to a
    /// career. Feeds the roadmap synthesizer.
    pub fn related_course_skills(&self, career_text: &str) -> Vec<String> {
        let related = self.related_courses(career_text, RELATED_COURSE_COUNT);
        if related.is_empty() {
            return Vec::new();
        }

        let terms = related
            .iter()
            .flat_map(|(idx, _)| text::skill_terms(&self.courses[*idx].skills));

        text::frequency_ranked(terms)
            .into_iter()
            .take(RELATED_SKILL_COUNT)
            .map(|(term, _)| term)
            .collect()
    }

    /// Applies personalization boosts in place. Each boost is independently
    /// capped and the final score is clamped to 1.0.
    pub fn apply_personalization(
        &self,
        recommendations: &mut [CourseRecommendation],
        profile: &UserProfile,
    ) {
        let preferred_tier = Difficulty::parse_filter(&profile.difficulty_preference);
        let wants_free = profile.budget_preference.eq_ignore_ascii_case("free");
        let preferred: HashSet<&str> = profile
            .preferred_skills
            .iter()
            .map(String::as_str)
            .collect();

        for rec in recommendations {
            let mut boost = 0.0;
            if preferred_tier == Some(rec.difficulty) {
                boost += DIFFICULTY_BOOST;
            }
            if wants_free && rec.is_free {
                boost += FREE_BOOST;
            }
            let overlap = rec
                .skills
                .iter()
                .filter(|s| preferred.contains(s.as_str()))
                .count();
            if overlap > 0 {
                boost += SKILL_BOOST_CAP.min(overlap as f64 * SKILL_BOOST_PER_OVERLAP);
            }
            rec.relevance_score = (rec.relevance_score + boost).min(1.0);
        }
    }

    /// Match reasons for a ranked course: its strongest vocabulary terms in
    /// the fitted space, or a generic fallback when the space is unusable.
    fn match_reasons(&self, course: &CourseRecord, ranked: &RankedSpace) -> Vec<String> {
        let Some(space) = &ranked.space else {
            return vec!["Content relevance match".to_string()];
        };
        let vector = space.transform_one(&format!("{} {}", course.title, course.skills));
        let top = space.top_terms(&vector, MATCH_REASON_TERMS);
        if top.is_empty() {
            return Vec::new();
        }
        let listed = top
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        vec![format!("Relevant topics: {listed}")]
    }
}

fn trending_score(course: &CourseRecord) -> f64 {
    let rating = course.rating.unwrap_or(0.0) as f64;
    rating * 0.7 + (1.0 + course.review_count as f64).ln() * 0.3
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
