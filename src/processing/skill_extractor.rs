//! Skill extraction from raw resume and job text

use crate::error::{JobFitError, Result};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default minimum similarity for fuzzy skill matching.
const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Cleaned words shorter than this never enter the fuzzy pass.
const MIN_FUZZY_WORD_LENGTH: usize = 4;

/// Skills shorter than this are exact-match only.
const MIN_FUZZY_SKILL_LENGTH: usize = 3;

/// Skills found in a text, partitioned by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedSkills {
    /// Every skill found, in first-occurrence order, lowercased.
    pub all_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub count: usize,
}

/// Finds known skills in free text. Exact phrase matching runs over a
/// fixed vocabulary compiled into an Aho-Corasick automaton; a fuzzy
/// pass catches near-miss spellings of words the vocabulary does not
/// contain verbatim. Matches count only on word boundaries, since the
/// vocabulary includes one and two letter skills.
pub struct SkillExtractor {
    exact_matcher: AhoCorasick,
    skill_database: Vec<String>,
    technical_skills: HashSet<String>,
    soft_skills: HashSet<String>,
    fuzzy_threshold: f64,
    fuzzy_enabled: bool,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new().expect("Failed to create skill extractor with default vocabulary")
    }
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        Self::with_skills(Self::default_technical_skills(), Self::default_soft_skills())
    }

    /// Build an extractor over a custom vocabulary.
    pub fn with_skills(
        technical_skills: HashSet<String>,
        soft_skills: HashSet<String>,
    ) -> Result<Self> {
        let mut skill_database: Vec<String> = technical_skills
            .iter()
            .chain(soft_skills.iter())
            .cloned()
            .collect();
        // Longest first so pattern ids favor specific phrases
        skill_database.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let exact_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&skill_database)
            .map_err(|e| {
                JobFitError::Processing(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            exact_matcher,
            skill_database,
            technical_skills,
            soft_skills,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            fuzzy_enabled: true,
        })
    }

    /// Extract every known skill from the text. Empty text yields an
    /// empty result.
    pub fn extract(&self, text: &str) -> ExtractedSkills {
        if text.is_empty() {
            return ExtractedSkills::default();
        }

        let mut seen = HashSet::new();
        let mut all_skills = Vec::new();

        for mat in self.exact_matcher.find_iter(text) {
            if !Self::on_word_boundary(text, mat.start(), mat.end()) {
                continue;
            }
            let skill = &self.skill_database[mat.pattern().as_usize()];
            if seen.insert(skill.clone()) {
                all_skills.push(skill.clone());
            }
        }

        if self.fuzzy_enabled {
            for word in text.split_whitespace() {
                let cleaned = Self::clean_word(word);
                if cleaned.len() < MIN_FUZZY_WORD_LENGTH {
                    continue;
                }
                // Words the vocabulary knows verbatim belong to the exact pass
                if self.technical_skills.contains(&cleaned) || self.soft_skills.contains(&cleaned) {
                    continue;
                }
                if let Some(skill) = self.best_fuzzy_match(&cleaned) {
                    if seen.insert(skill.clone()) {
                        all_skills.push(skill);
                    }
                }
            }
        }

        let technical_skills: Vec<String> = all_skills
            .iter()
            .filter(|skill| self.technical_skills.contains(*skill))
            .cloned()
            .collect();
        let soft_skills: Vec<String> = all_skills
            .iter()
            .filter(|skill| self.soft_skills.contains(*skill))
            .cloned()
            .collect();

        ExtractedSkills {
            count: all_skills.len(),
            all_skills,
            technical_skills,
            soft_skills,
        }
    }

    /// Set the minimum similarity for fuzzy matches, clamped to [0, 1].
    pub fn set_fuzzy_threshold(&mut self, threshold: f64) {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn set_fuzzy_enabled(&mut self, enabled: bool) {
        self.fuzzy_enabled = enabled;
    }

    /// Highest-scoring vocabulary skill for one cleaned word, if any
    /// clears the threshold. Jaro-Winkler primary, Levenshtein ratio as
    /// a second chance for short words. Skills whose length differs
    /// from the word by more than two are never considered, so ordinary
    /// words cannot latch onto a skill that is merely their prefix.
    /// Words of seven letters or fewer must also sit within a couple of
    /// edits of the skill, since Jaro-Winkler alone is too generous on
    /// short strings ("data" scores 0.87 against "dart").
    fn best_fuzzy_match(&self, word: &str) -> Option<String> {
        let mut best: Option<(&str, f64)> = None;

        for skill in &self.skill_database {
            if skill.len() < MIN_FUZZY_SKILL_LENGTH {
                continue;
            }
            if word.len().abs_diff(skill.len()) > 2 {
                continue;
            }
            if word.len() <= 7 {
                let max_edits = if word.len() <= 5 { 1 } else { 2 };
                if strsim::levenshtein(word, skill) > max_edits {
                    continue;
                }
            }

            let mut score = strsim::jaro_winkler(word, skill);
            if word.len() <= 8 {
                let distance = strsim::levenshtein(word, skill);
                let max_len = word.len().max(skill.len());
                let ratio = 1.0 - distance as f64 / max_len as f64;
                score = score.max(ratio);
            }

            if score >= self.fuzzy_threshold
                && best.map_or(true, |(_, best_score)| score > best_score)
            {
                best = Some((skill, score));
            }
        }

        best.map(|(skill, _)| skill.to_string())
    }

    /// A match counts only when its neighbors are not alphanumeric.
    fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
        let before_clear = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_clear = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        before_clear && after_clear
    }

    /// Keep letters, digits, and the symbols that appear in skill names.
    fn clean_word(word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '#')
            .collect::<String>()
            .to_lowercase()
    }

    fn default_technical_skills() -> HashSet<String> {
        vec![
            // Programming languages
            "python", "java", "javascript", "typescript", "c", "c++", "c#", "php",
            "ruby", "go", "rust", "swift", "kotlin", "scala", "r", "matlab", "perl",
            "dart", "objective-c", "sql", "nosql",
            // Web development
            "html", "css", "react", "angular", "vue", "node.js", "express", "django",
            "flask", "laravel", "spring", "spring boot", "asp.net", "jquery", "ajax",
            "json", "xml", "rest", "graphql", "web api",
            // Databases
            "mysql", "postgresql", "mongodb", "oracle", "sql server", "redis",
            "elasticsearch", "cassandra", "couchbase", "firebase", "dynamodb", "sqlite",
            // DevOps and cloud
            "docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "gitlab",
            "travis", "circleci", "terraform", "ansible", "puppet", "chef", "vagrant",
            "bash", "powershell", "linux", "unix", "ci/cd", "github actions",
            "cloud formation", "ec2", "s3", "lambda", "vpc",
            // Frameworks and libraries
            "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "keras",
            "nltk", "spacy", "opencv", "matplotlib", "seaborn", "plotly", "d3.js",
            "three.js", "bootstrap", "materialize", "tailwind",
            // Tools
            "git", "svn", "jira", "confluence", "slack", "trello", "asana", "figma",
            "sketch", "adobe", "photoshop", "illustrator", "indesign", "tableau",
            "power bi", "excel", "sas", "hadoop", "spark", "hive", "pig", "kafka",
            "airflow", "snowflake", "redshift",
            // Certifications
            "aws certified", "azure certified", "gcp certified", "scrum master",
            "pmp", "six sigma", "ccna", "ccnp", "ccie", "comptia", "security+",
            "cissp", "itil", "prince2",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn default_soft_skills() -> HashSet<String> {
        vec![
            "communication", "leadership", "teamwork", "problem solving",
            "adaptability", "creativity", "work ethic", "interpersonal skills",
            "time management", "critical thinking", "negotiation", "empathy",
            "patience", "flexibility", "conflict resolution", "decision making",
            "organizational skills", "attention to detail", "stress management",
            "cultural awareness", "emotional intelligence", "collaboration",
            "active listening", "persuasion", "public speaking", "networking",
            "mentoring", "delegation",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
