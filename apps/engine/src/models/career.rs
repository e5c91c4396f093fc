//! Career dataset records and match results.

use serde::{Deserialize, Serialize};

/// One row of the career Q&A dataset, pre-cleaned by the external ingestion
/// step. A role usually spans many rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerQa {
    pub role: String,
    pub question: String,
    pub answer: String,
}

impl CareerQa {
    pub fn new(role: &str, question: &str, answer: &str) -> Self {
        Self {
            role: role.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// A ranked career match for a set of user assessment answers. Transient —
/// recomputed per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career_id: String,
    pub career_name: String,
    /// Cosine similarity in [0, 1].
    pub match_score: f64,
    /// Top-weighted vocabulary terms of this career's document vector.
    pub matching_skills: Vec<String>,
}

/// Lowercase slug used as the stable career identifier.
pub fn career_slug(role: &str) -> String {
    role.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_slug_lowercases_and_joins() {
        assert_eq!(career_slug("Data Analyst"), "data_analyst");
        assert_eq!(career_slug("UX Designer"), "ux_designer");
    }

    #[test]
    fn test_career_match_serializes_plainly() {
        let m = CareerMatch {
            career_id: "data_analyst".to_string(),
            career_name: "Data Analyst".to_string(),
            match_score: 0.82,
            matching_skills: vec!["data".to_string(), "analysis".to_string()],
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["career_id"], "data_analyst");
        assert_eq!(json["matching_skills"][1], "analysis");
    }
}
