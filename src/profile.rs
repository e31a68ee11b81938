//! Resume and job profile types consumed by the matching pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Skills as callers provide them: either a list of strings or a single
/// comma-delimited string. Normalized at the boundary so the rest of the
/// pipeline only sees canonical skill lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    List(Vec<String>),
    Text(String),
}

impl SkillInput {
    /// Canonical skill list: lowercased, trimmed, empty entries dropped,
    /// duplicates removed keeping the first occurrence.
    pub fn normalized(&self) -> Vec<String> {
        let raw: Vec<String> = match self {
            SkillInput::List(items) => items.clone(),
            SkillInput::Text(text) => text.split(',').map(|part| part.to_string()).collect(),
        };

        let mut seen = HashSet::new();
        let mut skills = Vec::new();
        for item in raw {
            let skill = item.trim().to_lowercase();
            if skill.is_empty() {
                continue;
            }
            if seen.insert(skill.clone()) {
                skills.push(skill);
            }
        }
        skills
    }

    pub fn is_empty(&self) -> bool {
        self.normalized().is_empty()
    }
}

impl Default for SkillInput {
    fn default() -> Self {
        SkillInput::List(Vec::new())
    }
}

impl From<Vec<String>> for SkillInput {
    fn from(items: Vec<String>) -> Self {
        SkillInput::List(items)
    }
}

impl From<&[&str]> for SkillInput {
    fn from(items: &[&str]) -> Self {
        SkillInput::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// A candidate's resume: free text plus best-effort structured fields.
/// Every field defaults so partial JSON records still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub id: Option<String>,

    /// Full resume text used for text similarity.
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub skills: SkillInput,

    /// Total professional experience in years. 0 means none or unknown.
    #[serde(default)]
    pub experience_years: f64,

    /// Education description, e.g. "Bachelor of Science in CS". May be empty.
    #[serde(default)]
    pub education: String,
}

/// A job posting: description text plus requirement fields. Absent
/// requirements mean "no requirement".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobProfile {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub skills_required: SkillInput,

    /// Minimum years of experience. 0 means no requirement.
    #[serde(default)]
    pub min_experience_years: f64,

    /// Required education description. Empty means no requirement.
    #[serde(default)]
    pub education_required: String,
}
