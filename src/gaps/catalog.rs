//! Static skill knowledge: category keywords, learning resources,
//! career paths, and trending skills

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// One course, book, or program for learning a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub platform: String,
    pub url: String,
    pub duration: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerLevel {
    EntryToMid,
    MidToSenior,
}

impl fmt::Display for CareerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareerLevel::EntryToMid => write!(f, "Entry to Mid"),
            CareerLevel::MidToSenior => write!(f, "Mid to Senior"),
        }
    }
}

/// A career direction with the skills that qualify someone for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub career_level: CareerLevel,
    pub salary_range: SalaryRange,
}

/// Immutable lookup tables behind gap analysis. Built once per
/// analyzer; iteration orders are fixed so results are deterministic.
pub struct SkillCatalog {
    technical_keywords: HashSet<String>,
    soft_keywords: HashSet<String>,
    learning_resources: HashMap<String, Vec<LearningResource>>,
    career_paths: Vec<CareerPath>,
    trending_skills: Vec<String>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self {
            technical_keywords: Self::default_technical_keywords(),
            soft_keywords: Self::default_soft_keywords(),
            learning_resources: Self::default_learning_resources(),
            career_paths: Self::default_career_paths(),
            trending_skills: Self::default_trending_skills(),
        }
    }

    pub fn is_technical(&self, skill: &str) -> bool {
        self.technical_keywords.contains(skill)
    }

    pub fn is_soft(&self, skill: &str) -> bool {
        self.soft_keywords.contains(skill)
    }

    /// Curated resources for a skill, if the catalog knows it.
    pub fn resources_for(&self, skill: &str) -> Option<&[LearningResource]> {
        self.learning_resources.get(skill).map(|r| r.as_slice())
    }

    pub fn career_paths(&self) -> &[CareerPath] {
        &self.career_paths
    }

    pub fn trending_skills(&self) -> &[String] {
        &self.trending_skills
    }

    fn default_technical_keywords() -> HashSet<String> {
        vec![
            "python", "java", "javascript", "sql", "react", "angular", "node",
            "docker", "kubernetes", "aws", "azure", "gcp", "c++", "c#", "php",
            "ruby", "go", "rust",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_soft_keywords() -> HashSet<String> {
        vec![
            "communication", "leadership", "teamwork", "problem solving",
            "adaptability", "creativity", "work ethic", "time management",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_learning_resources() -> HashMap<String, Vec<LearningResource>> {
        let mut resources = HashMap::new();

        resources.insert(
            "python".to_string(),
            vec![
                resource("Python for Data Science", "Coursera", "https://coursera.org/python-ds", "4 weeks", "beginner"),
                resource("Python Programming Bootcamp", "Udemy", "https://udemy.com/python-bootcamp", "6 weeks", "beginner"),
                resource("Automate the Boring Stuff with Python", "Book", "https://automatetheboringstuff.com", "8 weeks", "beginner"),
            ],
        );
        resources.insert(
            "javascript".to_string(),
            vec![
                resource("JavaScript: Understanding the Weird Parts", "Udemy", "https://udemy.com/js-weird-parts", "6 weeks", "intermediate"),
                resource("The Complete JavaScript Course", "Udemy", "https://udemy.com/js-complete", "8 weeks", "beginner"),
                resource("Eloquent JavaScript", "Book", "https://eloquentjavascript.net", "10 weeks", "intermediate"),
            ],
        );
        resources.insert(
            "react".to_string(),
            vec![
                resource("React - The Complete Guide", "Udemy", "https://udemy.com/react-complete", "6 weeks", "intermediate"),
                resource("Full Stack Open", "University", "https://fullstackopen.com", "12 weeks", "intermediate"),
                resource("React Official Tutorial", "Documentation", "https://reactjs.org/tutorial", "2 weeks", "beginner"),
            ],
        );
        resources.insert(
            "aws".to_string(),
            vec![
                resource("AWS Certified Solutions Architect", "A Cloud Guru", "https://acloudguru.com/aws-sa", "8 weeks", "intermediate"),
                resource("AWS Fundamentals", "Coursera", "https://coursera.org/aws-fundamentals", "4 weeks", "beginner"),
                resource("AWS Certified Developer", "Udemy", "https://udemy.com/aws-developer", "6 weeks", "intermediate"),
            ],
        );
        resources.insert(
            "machine learning".to_string(),
            vec![
                resource("Machine Learning by Andrew Ng", "Coursera", "https://coursera.org/ml", "10 weeks", "intermediate"),
                resource("Python for Machine Learning", "Udemy", "https://udemy.com/python-ml", "8 weeks", "intermediate"),
                resource("Hands-On Machine Learning", "Book", "https://oreilly.com/hands-on-ml", "12 weeks", "intermediate"),
            ],
        );
        resources.insert(
            "communication".to_string(),
            vec![
                resource("Communication Skills for Engineers", "Coursera", "https://coursera.org/comm-skills-eng", "4 weeks", "beginner"),
                resource("Technical Writing", "Udemy", "https://udemy.com/tech-writing", "3 weeks", "beginner"),
                resource("Public Speaking", "Toastmasters", "https://toastmasters.org", "ongoing", "beginner"),
            ],
        );
        resources.insert(
            "leadership".to_string(),
            vec![
                resource("Leadership Principles", "Harvard Online", "https://online.hbs.edu/leadership", "6 weeks", "advanced"),
                resource("Management Fundamentals", "Coursera", "https://coursera.org/management", "5 weeks", "intermediate"),
                resource("The First 90 Days", "Book", "https://hbr.org/first-90-days", "2 weeks", "intermediate"),
            ],
        );

        resources
    }

    fn default_career_paths() -> Vec<CareerPath> {
        vec![
            career_path(
                "Software Engineer",
                &["programming", "problem solving", "algorithms", "data structures", "version control", "testing"],
                &["python", "javascript", "java", "sql", "git", "agile"],
                CareerLevel::EntryToMid,
                70_000,
                120_000,
            ),
            career_path(
                "Data Scientist",
                &["python", "r", "statistics", "machine learning", "data visualization", "sql"],
                &["pandas", "numpy", "scikit-learn", "tensorflow", "matplotlib", "jupyter"],
                CareerLevel::MidToSenior,
                90_000,
                150_000,
            ),
            career_path(
                "DevOps Engineer",
                &["linux", "bash", "docker", "kubernetes", "ci/cd", "cloud platforms"],
                &["aws", "azure", "jenkins", "gitlab", "terraform", "ansible"],
                CareerLevel::MidToSenior,
                95_000,
                160_000,
            ),
            career_path(
                "Full Stack Developer",
                &["javascript", "html", "css", "databases", "api development", "version control"],
                &["react", "node.js", "express", "mongodb", "postgresql", "rest"],
                CareerLevel::EntryToMid,
                75_000,
                130_000,
            ),
            career_path(
                "Cloud Engineer",
                &["cloud platforms", "infrastructure as code", "networking", "security", "virtualization"],
                &["aws", "azure", "gcp", "terraform", "docker", "kubernetes"],
                CareerLevel::MidToSenior,
                85_000,
                140_000,
            ),
        ]
    }

    fn default_trending_skills() -> Vec<String> {
        vec![
            "python", "machine learning", "artificial intelligence", "data science",
            "cloud computing", "aws", "azure", "devops", "docker", "kubernetes",
            "react", "node.js", "blockchain", "cybersecurity", "iot", "big data",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

fn resource(title: &str, platform: &str, url: &str, duration: &str, difficulty: &str) -> LearningResource {
    LearningResource {
        title: title.to_string(),
        platform: platform.to_string(),
        url: url.to_string(),
        duration: duration.to_string(),
        difficulty: difficulty.to_string(),
    }
}

fn career_path(
    title: &str,
    required: &[&str],
    preferred: &[&str],
    career_level: CareerLevel,
    salary_min: u32,
    salary_max: u32,
) -> CareerPath {
    CareerPath {
        title: title.to_string(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
        career_level,
        salary_range: SalaryRange {
            min: salary_min,
            max: salary_max,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_tables_populated() {
        let catalog = SkillCatalog::new();

        assert_eq!(catalog.career_paths().len(), 5);
        assert_eq!(catalog.career_paths()[0].title, "Software Engineer");
        assert_eq!(catalog.trending_skills().len(), 16);
    }

    #[test]
    fn test_known_skill_resources() {
        let catalog = SkillCatalog::new();

        let python = catalog.resources_for("python").unwrap();
        assert_eq!(python.len(), 3);
        assert_eq!(python[0].title, "Python for Data Science");

        assert!(catalog.resources_for("quantum computing").is_none());
    }

    #[test]
    fn test_category_membership() {
        let catalog = SkillCatalog::new();

        assert!(catalog.is_technical("rust"));
        assert!(catalog.is_soft("communication"));
        assert!(!catalog.is_technical("cooking"));
        assert!(!catalog.is_soft("cooking"));
    }

    #[test]
    fn test_career_level_serialization() {
        let json = serde_json::to_string(&CareerLevel::EntryToMid).unwrap();
        assert_eq!(json, r#""entry_to_mid""#);
    }
}
