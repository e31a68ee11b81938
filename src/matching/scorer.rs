//! Weighted match scoring between a resume and a job

use crate::matching::attributes;
use crate::processing::similarity::SimilarityEngine;
use crate::profile::{JobProfile, ResumeProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Relative importance of each match signal. Conventional weights sum
/// to 1.0; the scorer does not renormalize, it forms the weighted sum
/// and clamps the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub text: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            text: 0.4,
            skills: 0.3,
            experience: 0.2,
            education: 0.1,
        }
    }
}

/// Per-signal sub-scores on the 0-100 scale, rounded to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub text_similarity: f64,
    pub skills_similarity: f64,
    pub experience_similarity: f64,
    pub education_similarity: f64,
}

/// Complete result of matching one resume against one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Overall weighted score in [0, 100], rounded to 2 decimals.
    pub match_percentage: f64,
    pub detailed_scores: ScoreBreakdown,
    pub weights_used: WeightVector,
    /// Job-required skills the resume has, in resume order, lowercased.
    pub matched_skills: Vec<String>,
    /// Job-required skills the resume lacks, in job order, lowercased.
    pub missing_skills: Vec<String>,
}

/// Combines text, skills, experience, and education similarity into one
/// weighted percentage. Pure function of its inputs; holds only the
/// similarity engine.
pub struct MatchScorer {
    similarity: SimilarityEngine,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    pub fn new() -> Self {
        Self {
            similarity: SimilarityEngine::new(),
        }
    }

    pub fn score(
        &self,
        resume: &ResumeProfile,
        job: &JobProfile,
        weights: &WeightVector,
    ) -> MatchResult {
        let resume_skills = resume.skills.normalized();
        let job_skills = job.skills_required.normalized();

        let text_sim = self.similarity.similarity(&resume.text, &job.description);
        let skills_sim = attributes::skills_similarity(&resume_skills, &job_skills);
        let experience_sim =
            attributes::experience_similarity(resume.experience_years, job.min_experience_years);
        let education_sim =
            attributes::education_similarity(&resume.education, &job.education_required);

        let overall = text_sim * weights.text
            + skills_sim * weights.skills
            + experience_sim * weights.experience
            + education_sim * weights.education;
        let match_percentage = round2((overall * 100.0).clamp(0.0, 100.0));

        let resume_set: HashSet<&str> = resume_skills.iter().map(|s| s.as_str()).collect();
        let job_set: HashSet<&str> = job_skills.iter().map(|s| s.as_str()).collect();

        let matched_skills: Vec<String> = resume_skills
            .iter()
            .filter(|skill| job_set.contains(skill.as_str()))
            .cloned()
            .collect();
        let missing_skills: Vec<String> = job_skills
            .iter()
            .filter(|skill| !resume_set.contains(skill.as_str()))
            .cloned()
            .collect();

        MatchResult {
            match_percentage,
            detailed_scores: ScoreBreakdown {
                text_similarity: round2(text_sim * 100.0),
                skills_similarity: round2(skills_sim * 100.0),
                experience_similarity: round2(experience_sim * 100.0),
                education_similarity: round2(education_sim * 100.0),
            },
            weights_used: *weights,
            matched_skills,
            missing_skills,
        }
    }
}

/// Round to two decimal places for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SkillInput;

    fn resume_with(skills: &[&str], years: f64, education: &str, text: &str) -> ResumeProfile {
        ResumeProfile {
            id: None,
            text: text.to_string(),
            skills: SkillInput::from(skills),
            experience_years: years,
            education: education.to_string(),
        }
    }

    fn job_with(skills: &[&str], min_years: f64, education: &str, description: &str) -> JobProfile {
        JobProfile {
            id: None,
            title: "Engineer".to_string(),
            company: None,
            description: description.to_string(),
            skills_required: SkillInput::from(skills),
            min_experience_years: min_years,
            education_required: education.to_string(),
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = WeightVector::default();
        let total = weights.text + weights.skills + weights.experience + weights.education;

        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_match_scores_one_hundred() {
        let text = "Rust developer with five years of backend experience";
        let resume = resume_with(&["rust", "sql"], 6.0, "Bachelor of Science", text);
        let job = job_with(&["rust", "sql"], 5.0, "", text);

        let result = MatchScorer::new().score(&resume, &job, &WeightVector::default());

        assert_eq!(result.match_percentage, 100.0);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_skills_weight_isolation() {
        let weights = WeightVector {
            text: 0.0,
            skills: 1.0,
            experience: 0.0,
            education: 0.0,
        };
        let resume = resume_with(&["python", "sql"], 0.0, "", "");
        let job = job_with(&["python", "sql", "aws"], 0.0, "", "");

        let result = MatchScorer::new().score(&resume, &job, &weights);

        assert_eq!(result.match_percentage, 66.67);
        assert_eq!(result.detailed_scores.skills_similarity, 66.67);
    }

    #[test]
    fn test_matched_and_missing_skill_ordering() {
        let resume = resume_with(&["SQL", "Python", "Docker"], 0.0, "", "");
        let job = job_with(&["python", "aws", "sql"], 0.0, "", "");

        let result = MatchScorer::new().score(&resume, &job, &WeightVector::default());

        // Matched follows resume order, missing follows job order
        assert_eq!(result.matched_skills, vec!["sql", "python"]);
        assert_eq!(result.missing_skills, vec!["aws"]);
    }

    #[test]
    fn test_overall_clamped_with_oversized_weights() {
        let weights = WeightVector {
            text: 10.0,
            skills: 0.0,
            experience: 10.0,
            education: 0.0,
        };
        let text = "identical document text";
        let resume = resume_with(&[], 5.0, "", text);
        let job = job_with(&[], 1.0, "", text);

        let result = MatchScorer::new().score(&resume, &job, &weights);

        assert_eq!(result.match_percentage, 100.0);
    }

    #[test]
    fn test_score_non_decreasing_in_skills_signal() {
        let job = job_with(&["python", "sql", "aws"], 2.0, "Bachelor", "Backend data role");
        let weaker = resume_with(&["python"], 3.0, "Bachelor of Science", "Backend developer");
        let stronger = resume_with(&["python", "sql"], 3.0, "Bachelor of Science", "Backend developer");

        let scorer = MatchScorer::new();
        let weights = WeightVector::default();

        assert!(
            scorer.score(&stronger, &job, &weights).match_percentage
                >= scorer.score(&weaker, &job, &weights).match_percentage
        );
    }

    #[test]
    fn test_empty_everything_scores_only_free_signals() {
        let resume = resume_with(&[], 0.0, "", "");
        let job = job_with(&[], 0.0, "", "");

        let result = MatchScorer::new().score(&resume, &job, &WeightVector::default());

        // No experience or education requirement scores 1.0 each,
        // text and skills contribute nothing.
        assert_eq!(result.match_percentage, 30.0);
        assert_eq!(result.detailed_scores.text_similarity, 0.0);
        assert_eq!(result.detailed_scores.experience_similarity, 100.0);
        assert_eq!(result.detailed_scores.education_similarity, 100.0);
    }
}
