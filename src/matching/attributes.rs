//! Attribute-level similarity scores for skills, experience, and education

use std::collections::HashSet;

/// Education heuristics evaluated in order, first match wins. Each rule
/// sees the lowercased resume and job education strings.
const EDUCATION_RULES: [(fn(&str, &str) -> bool, f64); 5] = [
    (requirement_quoted_in_resume, 1.0),
    (both_mention_bachelor, 0.8),
    (both_mention_master, 1.0),
    (both_mention_phd, 1.0),
    (bachelor_held_master_required, 0.6),
];

/// Score when no education rule applies but both sides are non-empty.
const EDUCATION_DEFAULT_SCORE: f64 = 0.3;

fn requirement_quoted_in_resume(resume: &str, job: &str) -> bool {
    resume.contains(job)
}

fn both_mention_bachelor(resume: &str, job: &str) -> bool {
    resume.contains("bachelor") && job.contains("bachelor")
}

fn both_mention_master(resume: &str, job: &str) -> bool {
    resume.contains("master") && job.contains("master")
}

fn both_mention_phd(resume: &str, job: &str) -> bool {
    resume.contains("phd") && job.contains("phd")
}

fn bachelor_held_master_required(resume: &str, job: &str) -> bool {
    job.contains("master") && resume.contains("bachelor")
}

/// Fraction of the job's required skills present on the resume, in
/// [0, 1]. Inputs are canonical skill lists (lowercased, trimmed).
/// 0.0 when either side is empty.
pub fn skills_similarity(resume_skills: &[String], job_skills: &[String]) -> f64 {
    if resume_skills.is_empty() || job_skills.is_empty() {
        return 0.0;
    }

    let resume_set: HashSet<&str> = resume_skills.iter().map(|s| s.as_str()).collect();
    let job_set: HashSet<&str> = job_skills.iter().map(|s| s.as_str()).collect();

    let matched = job_set.iter().filter(|skill| resume_set.contains(**skill)).count();

    matched as f64 / job_set.len() as f64
}

/// How well resume experience covers the job's minimum, in [0, 1].
/// No requirement scores 1.0 for anyone; no experience against a real
/// requirement scores 0.0; partial experience scores proportionally.
pub fn experience_similarity(resume_years: f64, job_min_years: f64) -> f64 {
    if job_min_years <= 0.0 {
        return 1.0;
    }
    if resume_years <= 0.0 {
        return 0.0;
    }
    if resume_years >= job_min_years {
        return 1.0;
    }

    resume_years / job_min_years
}

/// How well resume education satisfies the job requirement, in [0, 1].
/// An empty requirement scores 1.0; an empty resume education against a
/// real requirement scores 0.0; otherwise the first matching rule in
/// the ladder decides.
pub fn education_similarity(resume_education: &str, job_education: &str) -> f64 {
    if job_education.is_empty() {
        return 1.0;
    }
    if resume_education.is_empty() {
        return 0.0;
    }

    let resume = resume_education.to_lowercase();
    let job = job_education.to_lowercase();

    for (rule_applies, score) in EDUCATION_RULES {
        if rule_applies(&resume, &job) {
            return score;
        }
    }

    EDUCATION_DEFAULT_SCORE
}
