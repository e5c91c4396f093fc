//! Career matching — ranks every career against a user's combined assessment
//! answers, and maintains the per-role corpus index with its memoized skill
//! extraction.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::models::{career_slug, CareerMatch, CareerQa};
use crate::text;
use crate::vector::{rank_against, VectorizerParams};

const QA_SKILL_COUNT: usize = 20;
const MATCHING_SKILL_COUNT: usize = 10;

/// Per-role aggregated Q&A corpus plus the memoized skill extraction cache.
/// Built once from the loaded dataset; immutable afterwards apart from the
/// write-once-per-key cache.
pub struct CareerIndex {
    roles: Vec<String>,
    questions: HashMap<String, String>,
    answers: HashMap<String, String>,
    qa_skills: Mutex<HashMap<String, Vec<String>>>,
}

impl CareerIndex {
    pub fn new(rows: &[CareerQa]) -> Self {
        let mut roles: Vec<String> = Vec::new();
        let mut questions: HashMap<String, String> = HashMap::new();
        let mut answers: HashMap<String, String> = HashMap::new();

        for row in rows {
            if !questions.contains_key(&row.role) {
                roles.push(row.role.clone());
            }
            append_text(questions.entry(row.role.clone()).or_default(), &row.question);
            append_text(answers.entry(row.role.clone()).or_default(), &row.answer);
        }

        debug!(roles = roles.len(), rows = rows.len(), "career index built");

        Self {
            roles,
            questions,
            answers,
            qa_skills: Mutex::new(HashMap::new()),
        }
    }

    /// Distinct roles in dataset order.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn contains(&self, role: &str) -> bool {
        self.questions.contains_key(role)
    }

    /// Combined question + answer corpus for a role.
    pub fn description(&self, role: &str) -> Option<String> {
        let questions = self.questions.get(role)?;
        let answers = self.answers.get(role)?;
        Some(format!("{questions} {answers}"))
    }

    /// Frequency-ranked skill terms from a role's answers, memoized for the
    /// process lifetime. The lock serializes first-writers per key; a
    /// duplicate computation would be idempotent anyway.
    pub fn qa_skills(&self, role: &str) -> Vec<String> {
        if let Some(cached) = self
            .qa_skills
            .lock()
            .ok()
            .and_then(|cache| cache.get(role).cloned())
        {
            return cached;
        }

        let skills = self
            .answers
            .get(role)
            .map(|text| text::top_frequent_terms(text, QA_SKILL_COUNT))
            .unwrap_or_default();

        if let Ok(mut cache) = self.qa_skills.lock() {
            cache
                .entry(role.to_string())
                .or_insert_with(|| skills.clone());
        }
        skills
    }
}

fn append_text(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Ranks all careers against the user's free-text answers.
///
/// Empty answers are skipped silently; with no usable text every career
/// scores zero and the ranking degrades to dataset order. Matching skills are
/// the top-weighted terms of each *career's* vector, not the query's.
pub fn match_careers(index: &CareerIndex, answers: &[String]) -> Vec<CareerMatch> {
    let user_text = answers
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let descriptions: Vec<String> = index
        .roles()
        .iter()
        .map(|role| index.description(role).unwrap_or_default())
        .collect();

    let params = VectorizerParams::new(1000, (1, 2), 1);
    let ranked = rank_against(&user_text, &descriptions, params);

    let mut matches: Vec<CareerMatch> = index
        .roles()
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let matching_skills = match (&ranked.space, ranked.candidates.get(i)) {
                (Some(space), Some(vector)) => space.top_terms(vector, MATCHING_SKILL_COUNT),
                _ => Vec::new(),
            };
            CareerMatch {
                career_id: career_slug(role),
                career_name: role.clone(),
                match_score: ranked.similarities[i],
                matching_skills,
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<CareerQa> {
        vec![
            CareerQa::new(
                "Data Analyst",
                "What does a data analyst do daily?",
                "Analyze data with statistics, build visualization charts, report analysis findings",
            ),
            CareerQa::new(
                "Data Analyst",
                "Which tools matter most?",
                "Statistics software, spreadsheet analysis, data visualization dashboards",
            ),
            CareerQa::new(
                "Web Developer",
                "What does a web developer build?",
                "Build websites with code, design responsive layouts, deploy web applications",
            ),
            CareerQa::new(
                "Chef",
                "What happens in a professional kitchen?",
                "Cooking recipes, baking bread, preparing seasonal menus",
            ),
        ]
    }

    #[test]
    fn test_index_keeps_roles_in_dataset_order() {
        let index = CareerIndex::new(&sample_rows());
        assert_eq!(index.roles(), &["Data Analyst", "Web Developer", "Chef"]);
    }

    #[test]
    fn test_description_combines_questions_and_answers() {
        let index = CareerIndex::new(&sample_rows());
        let description = index.description("Chef").unwrap();
        assert!(description.contains("professional kitchen"));
        assert!(description.contains("Cooking recipes"));
    }

    #[test]
    fn test_description_of_unknown_role_is_none() {
        let index = CareerIndex::new(&sample_rows());
        assert!(index.description("Astronaut").is_none());
    }

    #[test]
    fn test_qa_skills_are_frequency_ranked_and_memoized() {
        let index = CareerIndex::new(&sample_rows());
        let skills = index.qa_skills("Data Analyst");
        // "analysis", "data", "statistics", "visualization" each appear twice
        // or more across the role's answers.
        assert!(skills.contains(&"data".to_string()));
        assert!(skills.contains(&"analysis".to_string()));
        assert_eq!(skills, index.qa_skills("Data Analyst"));
    }

    #[test]
    fn test_match_careers_covers_every_career_exactly_once() {
        let index = CareerIndex::new(&sample_rows());
        let answers = vec!["I enjoy data analysis and statistics".to_string()];
        let matches = match_careers(&index, &answers);

        let mut ids: Vec<&str> = matches.iter().map(|m| m.career_id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["chef", "data_analyst", "web_developer"]);
    }

    #[test]
    fn test_match_careers_ranks_relevant_career_first() {
        let index = CareerIndex::new(&sample_rows());
        let answers = vec![
            "I enjoy data analysis".to_string(),
            "Statistics and visualization excite me".to_string(),
        ];
        let matches = match_careers(&index, &answers);
        assert_eq!(matches[0].career_name, "Data Analyst");
        assert!(matches[0].match_score > matches[1].match_score);
    }

    #[test]
    fn test_scores_are_descending_total_order() {
        let index = CareerIndex::new(&sample_rows());
        let matches = match_careers(&index, &["web code design".to_string()]);
        for pair in matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_empty_answers_are_skipped_silently() {
        let index = CareerIndex::new(&sample_rows());
        let answers = vec![
            "".to_string(),
            "   ".to_string(),
            "data analysis".to_string(),
        ];
        let matches = match_careers(&index, &answers);
        assert_eq!(matches[0].career_name, "Data Analyst");
    }

    #[test]
    fn test_all_empty_answers_degrade_to_zero_scores() {
        let index = CareerIndex::new(&sample_rows());
        let matches = match_careers(&index, &["".to_string()]);
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.match_score >= 0.0));
    }

    #[test]
    fn test_matching_skills_come_from_career_vector() {
        let index = CareerIndex::new(&sample_rows());
        let matches = match_careers(&index, &["cooking food".to_string()]);
        let chef = matches.iter().find(|m| m.career_id == "chef").unwrap();
        // "baking" is in the chef corpus but not in the query.
        assert!(chef.matching_skills.iter().any(|s| s.contains("baking")));
    }
}
