//! Skill gap analysis between resume skills and job requirements

use crate::gaps::catalog::{CareerLevel, SalaryRange, SkillCatalog};
use crate::profile::SkillInput;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Missing skills split into one bucket each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategories {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub other: Vec<String>,
}

/// A learning resource tied to the missing skill it addresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRecommendation {
    pub skill: String,
    pub title: String,
    pub platform: String,
    pub url: String,
    pub duration: String,
    pub difficulty: String,
}

/// How well the resume's skills line up with one career path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub career_path: String,
    pub match_percentage: f64,
    pub required_skills_matched: usize,
    pub preferred_skills_matched: usize,
    pub total_required_skills: usize,
    pub total_preferred_skills: usize,
    pub salary_range: SalaryRange,
    pub career_level: CareerLevel,
}

/// Full picture of what a resume is missing against a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Required skills the resume lacks, in job order.
    pub missing_skills: Vec<String>,
    /// Required skills the resume has, in resume order.
    pub existing_skills: Vec<String>,
    pub total_required_skills: usize,
    pub total_missing_skills: usize,
    /// Share of requirements missing, 0-100 rounded to 2 decimals.
    pub gap_percentage: f64,
    pub categorized_gaps: SkillCategories,
    pub learning_recommendations: Vec<LearningRecommendation>,
    pub career_suggestions: Vec<CareerSuggestion>,
    /// Missing skills in the order worth learning them.
    pub priority_skills: Vec<String>,
}

/// Resume skills measured against the trending skill list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketTrends {
    pub trending_skills_have: Vec<String>,
    pub trending_skills_missing: Vec<String>,
    pub market_relevance_score: f64,
}

/// Trending skills reported missing are capped at this many.
const MAX_MISSING_TRENDING: usize = 10;

/// Resources suggested per known missing skill.
const RECOMMENDATIONS_PER_SKILL: usize = 2;

/// Career suggestions returned per analysis.
const MAX_CAREER_SUGGESTIONS: usize = 5;

/// Computes skill gaps, categorizations, learning recommendations, and
/// career suggestions from a resume/job skill pair. Stateless apart
/// from its static catalog.
pub struct GapAnalyzer {
    catalog: SkillCatalog,
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GapAnalyzer {
    pub fn new() -> Self {
        Self {
            catalog: SkillCatalog::new(),
        }
    }

    /// Analyze what the resume is missing against the job requirements.
    /// Accepts list or comma-string skill inputs on both sides; empty
    /// requirements produce a zero gap, never an error.
    pub fn analyze(&self, resume_skills: &SkillInput, job_requirements: &SkillInput) -> GapAnalysis {
        let resume = resume_skills.normalized();
        let required = job_requirements.normalized();

        let resume_set: HashSet<&str> = resume.iter().map(|s| s.as_str()).collect();
        let required_set: HashSet<&str> = required.iter().map(|s| s.as_str()).collect();

        let missing_skills: Vec<String> = required
            .iter()
            .filter(|skill| !resume_set.contains(skill.as_str()))
            .cloned()
            .collect();
        let existing_skills: Vec<String> = resume
            .iter()
            .filter(|skill| required_set.contains(skill.as_str()))
            .cloned()
            .collect();

        let total_required_skills = required.len();
        let total_missing_skills = missing_skills.len();
        let gap_percentage = if total_required_skills > 0 {
            round2(total_missing_skills as f64 / total_required_skills as f64 * 100.0)
        } else {
            0.0
        };

        GapAnalysis {
            categorized_gaps: self.categorize(&missing_skills),
            learning_recommendations: self.recommendations_for(&missing_skills),
            career_suggestions: self.career_suggestions(&resume_set),
            priority_skills: priority_skills(&missing_skills, &required),
            missing_skills,
            existing_skills,
            total_required_skills,
            total_missing_skills,
            gap_percentage,
        }
    }

    /// Compare resume skills against the trending skill list.
    pub fn market_trends(&self, resume_skills: &SkillInput) -> MarketTrends {
        let resume = resume_skills.normalized();
        let resume_set: HashSet<&str> = resume.iter().map(|s| s.as_str()).collect();
        let trending = self.catalog.trending_skills();
        let trending_set: HashSet<&str> = trending.iter().map(|s| s.as_str()).collect();

        let trending_skills_have: Vec<String> = resume
            .iter()
            .filter(|skill| trending_set.contains(skill.as_str()))
            .cloned()
            .collect();
        let trending_skills_missing: Vec<String> = trending
            .iter()
            .filter(|skill| !resume_set.contains(skill.as_str()))
            .take(MAX_MISSING_TRENDING)
            .cloned()
            .collect();

        let market_relevance_score =
            round2(trending_skills_have.len() as f64 / trending.len() as f64 * 100.0);

        MarketTrends {
            trending_skills_have,
            trending_skills_missing,
            market_relevance_score,
        }
    }

    /// Each skill lands in exactly one bucket.
    fn categorize(&self, skills: &[String]) -> SkillCategories {
        let mut categories = SkillCategories {
            technical: Vec::new(),
            soft: Vec::new(),
            other: Vec::new(),
        };

        for skill in skills {
            if self.catalog.is_technical(skill) {
                categories.technical.push(skill.clone());
            } else if self.catalog.is_soft(skill) {
                categories.soft.push(skill.clone());
            } else {
                categories.other.push(skill.clone());
            }
        }

        categories
    }

    /// Up to two curated resources per known skill; a generic search
    /// pointer for skills the catalog has nothing for.
    fn recommendations_for(&self, missing_skills: &[String]) -> Vec<LearningRecommendation> {
        let mut recommendations = Vec::new();

        for skill in missing_skills {
            match self.catalog.resources_for(skill) {
                Some(resources) => {
                    for resource in resources.iter().take(RECOMMENDATIONS_PER_SKILL) {
                        recommendations.push(LearningRecommendation {
                            skill: skill.clone(),
                            title: resource.title.clone(),
                            platform: resource.platform.clone(),
                            url: resource.url.clone(),
                            duration: resource.duration.clone(),
                            difficulty: resource.difficulty.clone(),
                        });
                    }
                }
                None => {
                    recommendations.push(LearningRecommendation {
                        skill: skill.clone(),
                        title: format!("Learn {}", title_case(skill)),
                        platform: "Multiple Platforms".to_string(),
                        url: format!(
                            "https://www.google.com/search?q=learn+{}",
                            skill.replace(' ', "+")
                        ),
                        duration: "Variable".to_string(),
                        difficulty: "Variable".to_string(),
                    });
                }
            }
        }

        recommendations
    }

    /// Score every career path against the resume's skill set:
    /// 70% weight on required-skill coverage, 30% on preferred.
    fn career_suggestions(&self, resume_set: &HashSet<&str>) -> Vec<CareerSuggestion> {
        let mut suggestions: Vec<CareerSuggestion> = self
            .catalog
            .career_paths()
            .iter()
            .map(|path| {
                let required_skills_matched = path
                    .required_skills
                    .iter()
                    .filter(|skill| resume_set.contains(skill.as_str()))
                    .count();
                let preferred_skills_matched = path
                    .preferred_skills
                    .iter()
                    .filter(|skill| resume_set.contains(skill.as_str()))
                    .count();

                let total_required_skills = path.required_skills.len();
                let total_preferred_skills = path.preferred_skills.len();

                let required_percentage = if total_required_skills > 0 {
                    required_skills_matched as f64 / total_required_skills as f64 * 100.0
                } else {
                    0.0
                };
                let preferred_percentage = if total_preferred_skills > 0 {
                    preferred_skills_matched as f64 / total_preferred_skills as f64 * 100.0
                } else {
                    0.0
                };

                CareerSuggestion {
                    career_path: path.title.clone(),
                    match_percentage: round2(required_percentage * 0.7 + preferred_percentage * 0.3),
                    required_skills_matched,
                    preferred_skills_matched,
                    total_required_skills,
                    total_preferred_skills,
                    salary_range: path.salary_range,
                    career_level: path.career_level,
                }
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(MAX_CAREER_SUGGESTIONS);

        suggestions
    }
}

/// Missing skills in job-requirement order first, then any remainder.
/// Deduplicated, first occurrence wins.
fn priority_skills(missing_skills: &[String], job_requirements: &[String]) -> Vec<String> {
    let missing_set: HashSet<&str> = missing_skills.iter().map(|s| s.as_str()).collect();

    let mut seen = HashSet::new();
    let mut priority = Vec::new();
    for skill in job_requirements {
        if missing_set.contains(skill.as_str()) && seen.insert(skill.as_str()) {
            priority.push(skill.clone());
        }
    }
    for skill in missing_skills {
        if seen.insert(skill.as_str()) {
            priority.push(skill.clone());
        }
    }

    priority
}

/// Capitalize the first letter of each word.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Round to two decimal places for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(skills: &[&str]) -> SkillInput {
        SkillInput::from(skills)
    }

    #[test]
    fn test_basic_gap_analysis() {
        let analyzer = GapAnalyzer::new();

        let analysis = analyzer.analyze(
            &input(&["python", "sql"]),
            &input(&["python", "sql", "aws"]),
        );

        assert_eq!(analysis.missing_skills, vec!["aws"]);
        assert_eq!(analysis.existing_skills, vec!["python", "sql"]);
        assert_eq!(analysis.total_required_skills, 3);
        assert_eq!(analysis.total_missing_skills, 1);
        assert_eq!(analysis.gap_percentage, 33.33);
    }

    #[test]
    fn test_no_requirements_means_no_gap() {
        let analyzer = GapAnalyzer::new();

        let analysis = analyzer.analyze(&input(&["python"]), &input(&[]));

        assert!(analysis.missing_skills.is_empty());
        assert_eq!(analysis.gap_percentage, 0.0);
    }

    #[test]
    fn test_comma_string_input_accepted() {
        let analyzer = GapAnalyzer::new();

        let analysis = analyzer.analyze(
            &SkillInput::Text("Python, SQL".to_string()),
            &SkillInput::Text("python, sql, AWS".to_string()),
        );

        assert_eq!(analysis.missing_skills, vec!["aws"]);
        assert_eq!(analysis.gap_percentage, 33.33);
    }

    #[test]
    fn test_each_missing_skill_categorized_once() {
        let analyzer = GapAnalyzer::new();

        let analysis = analyzer.analyze(
            &input(&[]),
            &input(&["python", "communication", "quantum computing"]),
        );

        let gaps = &analysis.categorized_gaps;
        assert_eq!(gaps.technical, vec!["python"]);
        assert_eq!(gaps.soft, vec!["communication"]);
        assert_eq!(gaps.other, vec!["quantum computing"]);
        assert_eq!(
            gaps.technical.len() + gaps.soft.len() + gaps.other.len(),
            analysis.missing_skills.len()
        );
    }

    #[test]
    fn test_recommendations_known_and_unknown_skills() {
        let analyzer = GapAnalyzer::new();

        let analysis = analyzer.analyze(&input(&[]), &input(&["python", "quantum computing"]));

        let recs = &analysis.learning_recommendations;
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].skill, "python");
        assert_eq!(recs[0].title, "Python for Data Science");
        assert_eq!(recs[1].title, "Python Programming Bootcamp");

        let generic = &recs[2];
        assert_eq!(generic.title, "Learn Quantum Computing");
        assert_eq!(generic.platform, "Multiple Platforms");
        assert_eq!(
            generic.url,
            "https://www.google.com/search?q=learn+quantum+computing"
        );
        assert_eq!(generic.duration, "Variable");
    }

    #[test]
    fn test_career_suggestions_ranked() {
        let analyzer = GapAnalyzer::new();

        let analysis = analyzer.analyze(
            &input(&["python", "r", "statistics", "machine learning", "data visualization", "sql"]),
            &input(&[]),
        );

        let suggestions = &analysis.career_suggestions;
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].career_path, "Data Scientist");
        assert_eq!(suggestions[0].match_percentage, 70.0);
        assert_eq!(suggestions[0].required_skills_matched, 6);
        for pair in suggestions.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_priority_skills_follow_job_order_deduplicated() {
        let analyzer = GapAnalyzer::new();

        let analysis = analyzer.analyze(&input(&["python"]), &input(&["aws", "python", "docker"]));

        assert_eq!(analysis.priority_skills, vec!["aws", "docker"]);

        let unique: HashSet<&String> = analysis.priority_skills.iter().collect();
        assert_eq!(unique.len(), analysis.priority_skills.len());
    }

    #[test]
    fn test_market_trends() {
        let analyzer = GapAnalyzer::new();

        let trends = analyzer.market_trends(&input(&["python", "react", "cooking"]));

        assert_eq!(trends.trending_skills_have, vec!["python", "react"]);
        assert_eq!(trends.trending_skills_missing.len(), MAX_MISSING_TRENDING);
        assert_eq!(trends.trending_skills_missing[0], "machine learning");
        assert_eq!(trends.market_relevance_score, 12.5);
    }
}
