//! Ranking job collections against resumes

use crate::matching::scorer::{MatchResult, MatchScorer, WeightVector};
use crate::profile::{JobProfile, ResumeProfile};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One job's position in a ranking, with the full match breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job_id: Option<String>,
    pub job_title: String,
    /// Poster name, "Unknown" when the job record has none.
    pub company: String,
    pub match_percentage: f64,
    pub details: MatchResult,
}

/// All ranked jobs for one resume in a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMatches {
    pub resume_id: Option<String>,
    pub matched_jobs: Vec<RankedJob>,
}

/// Applies the match scorer across job collections and orders the
/// results by descending match percentage.
pub struct JobRanker {
    scorer: MatchScorer,
}

impl Default for JobRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl JobRanker {
    pub fn new() -> Self {
        Self {
            scorer: MatchScorer::new(),
        }
    }

    /// Rank every job for one resume, best match first. The sort is
    /// stable, so equal scores keep their input order. `top_n` limits
    /// the returned list when given.
    pub fn rank_jobs(
        &self,
        resume: &ResumeProfile,
        jobs: &[JobProfile],
        weights: &WeightVector,
        top_n: Option<usize>,
    ) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .map(|job| {
                let details = self.scorer.score(resume, job, weights);
                RankedJob {
                    job_id: job.id.clone(),
                    job_title: job.title.clone(),
                    company: job
                        .company
                        .clone()
                        .unwrap_or_else(|| "Unknown".to_string()),
                    match_percentage: details.match_percentage,
                    details,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(Ordering::Equal)
        });

        if let Some(limit) = top_n {
            ranked.truncate(limit);
        }

        ranked
    }

    /// Independent ranking of the whole job collection for each resume.
    pub fn batch_match(
        &self,
        resumes: &[ResumeProfile],
        jobs: &[JobProfile],
        weights: &WeightVector,
    ) -> Vec<ResumeMatches> {
        resumes
            .iter()
            .map(|resume| ResumeMatches {
                resume_id: resume.id.clone(),
                matched_jobs: self.rank_jobs(resume, jobs, weights, None),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SkillInput;

    fn resume(id: &str, skills: &[&str]) -> ResumeProfile {
        ResumeProfile {
            id: Some(id.to_string()),
            skills: SkillInput::from(skills),
            ..Default::default()
        }
    }

    fn job(id: &str, title: &str, skills: &[&str]) -> JobProfile {
        JobProfile {
            id: Some(id.to_string()),
            title: title.to_string(),
            skills_required: SkillInput::from(skills),
            ..Default::default()
        }
    }

    fn skills_only() -> WeightVector {
        WeightVector {
            text: 0.0,
            skills: 1.0,
            experience: 0.0,
            education: 0.0,
        }
    }

    #[test]
    fn test_ranking_sorted_descending() {
        let ranker = JobRanker::new();
        let candidate = resume("r1", &["python", "sql", "docker"]);
        let jobs = vec![
            job("j1", "Analyst", &["python", "sql", "aws", "spark"]),
            job("j2", "Backend", &["python", "sql"]),
            job("j3", "Designer", &["figma", "sketch"]),
        ];

        let ranked = ranker.rank_jobs(&candidate, &jobs, &skills_only(), None);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].job_id.as_deref(), Some("j2"));
        assert_eq!(ranked[2].job_id.as_deref(), Some("j3"));
        assert!(ranked[0].match_percentage >= ranked[1].match_percentage);
        assert!(ranked[1].match_percentage >= ranked[2].match_percentage);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let ranker = JobRanker::new();
        let candidate = resume("r1", &["rust"]);
        let jobs = vec![
            job("first", "Role A", &["rust", "go"]),
            job("second", "Role B", &["rust", "zig"]),
        ];

        let ranked = ranker.rank_jobs(&candidate, &jobs, &skills_only(), None);

        assert_eq!(ranked[0].job_id.as_deref(), Some("first"));
        assert_eq!(ranked[1].job_id.as_deref(), Some("second"));
    }

    #[test]
    fn test_top_n_truncates() {
        let ranker = JobRanker::new();
        let candidate = resume("r1", &["python"]);
        let jobs = vec![
            job("j1", "A", &["python"]),
            job("j2", "B", &["python", "sql"]),
            job("j3", "C", &["java"]),
        ];

        let ranked = ranker.rank_jobs(&candidate, &jobs, &skills_only(), Some(2));

        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_missing_company_reported_as_unknown() {
        let ranker = JobRanker::new();
        let candidate = resume("r1", &["python"]);
        let jobs = vec![job("j1", "A", &["python"])];

        let ranked = ranker.rank_jobs(&candidate, &jobs, &skills_only(), None);

        assert_eq!(ranked[0].company, "Unknown");
    }

    #[test]
    fn test_batch_ranks_each_resume_independently() {
        let ranker = JobRanker::new();
        let resumes = vec![
            resume("dev", &["python", "sql"]),
            resume("ops", &["docker", "kubernetes"]),
        ];
        let jobs = vec![
            job("data", "Data Engineer", &["python", "sql"]),
            job("infra", "Platform Engineer", &["docker", "kubernetes"]),
        ];

        let results = ranker.batch_match(&resumes, &jobs, &skills_only());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].resume_id.as_deref(), Some("dev"));
        assert_eq!(results[0].matched_jobs[0].job_id.as_deref(), Some("data"));
        assert_eq!(results[1].matched_jobs[0].job_id.as_deref(), Some("infra"));
    }
}
