//! ATS readiness scoring and resume section analysis

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Keywords an applicant tracking system expects to see somewhere in a
/// resume.
const DEFAULT_STRUCTURE_KEYWORDS: [&str; 10] = [
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "work",
    "projects",
    "certifications",
    "awards",
    "contact",
];

/// ATS readiness broken into its component scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtsScore {
    /// Combined score in [0, 100].
    pub total_score: u32,
    /// Keyword presence, up to 50.
    pub keyword_score: f64,
    /// Content length, one of 0 / 10 / 20 / 30.
    pub content_score: u32,
    /// Structure indicators, 3 points each up to 20.
    pub format_score: u32,
    pub keywords_found: Vec<String>,
}

/// Whether one resume section was located, and what it said.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub found: bool,
    pub content: String,
    pub length: usize,
}

/// The seven sections a structured resume is expected to carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeSections {
    pub summary: SectionAnalysis,
    pub experience: SectionAnalysis,
    pub education: SectionAnalysis,
    pub skills: SectionAnalysis,
    pub certifications: SectionAnalysis,
    pub projects: SectionAnalysis,
    pub awards: SectionAnalysis,
}

/// Heuristic scoring of how well a resume will survive an applicant
/// tracking system: keyword presence, content volume, and structure
/// indicators. Works on the resume text alone, no job required.
pub struct AtsScorer {
    structure_indicators: Vec<Regex>,
    summary_header: Regex,
    experience_header: Regex,
    education_header: Regex,
    skills_header: Regex,
    certifications_header: Regex,
    projects_header: Regex,
    awards_header: Regex,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtsScorer {
    pub fn new() -> Self {
        let structure_patterns = [
            r"\d{4}",
            r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b",
            r"\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\b",
            r"\b(?:Bachelor|Master|PhD|B\.?[A-Z]*|M\.?[A-Z]*)\b",
            r"\b(?:Inc|LLC|Corp|Company|Ltd)\b",
        ];
        let structure_indicators = structure_patterns
            .iter()
            .map(|pattern| Regex::new(pattern).expect("Invalid structure regex"))
            .collect();

        Self {
            structure_indicators,
            summary_header: header_regex("summary|objective|profile"),
            experience_header: header_regex("experience|work experience|employment history"),
            education_header: header_regex("education|academic background"),
            skills_header: header_regex("skills|technical skills|core competencies"),
            certifications_header: header_regex("certifications|certificates"),
            projects_header: header_regex("projects|project experience"),
            awards_header: header_regex("awards|honors"),
        }
    }

    /// Score a resume text. `required_keywords` overrides the default
    /// structural keyword list. Empty text scores 0.
    pub fn score(&self, text: &str, required_keywords: Option<&[String]>) -> AtsScore {
        if text.is_empty() {
            return AtsScore::default();
        }

        let owned_defaults: Vec<String>;
        let keywords: &[String] = match required_keywords {
            Some(list) => list,
            None => {
                owned_defaults = DEFAULT_STRUCTURE_KEYWORDS
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                &owned_defaults
            }
        };

        let text_lower = text.to_lowercase();
        let keywords_found: Vec<String> = keywords
            .iter()
            .filter(|keyword| text_lower.contains(&keyword.to_lowercase()))
            .cloned()
            .collect();
        let keyword_score = if keywords.is_empty() {
            0.0
        } else {
            (keywords_found.len() as f64 / keywords.len() as f64 * 50.0).min(50.0)
        };

        let word_count = text.split_whitespace().count();
        let content_score: u32 = if word_count < 100 {
            0
        } else if word_count < 300 {
            10
        } else if word_count < 600 {
            20
        } else {
            30
        };

        let mut format_score: u32 = 0;
        for indicator in &self.structure_indicators {
            if indicator.is_match(text) {
                format_score += 3;
            }
        }
        let format_score = format_score.min(20);

        let total = (keyword_score + content_score as f64 + format_score as f64)
            .round()
            .clamp(0.0, 100.0);

        AtsScore {
            total_score: total as u32,
            keyword_score,
            content_score,
            format_score,
            keywords_found,
        }
    }

    /// Locate the conventional resume sections. A section's content is
    /// the remainder of its header line plus following lines, stopping
    /// at the first empty line or line that opens with a capital.
    pub fn analyze_sections(&self, text: &str) -> ResumeSections {
        ResumeSections {
            summary: find_section(text, &self.summary_header),
            experience: find_section(text, &self.experience_header),
            education: find_section(text, &self.education_header),
            skills: find_section(text, &self.skills_header),
            certifications: find_section(text, &self.certifications_header),
            projects: find_section(text, &self.projects_header),
            awards: find_section(text, &self.awards_header),
        }
    }
}

fn header_regex(aliases: &str) -> Regex {
    Regex::new(&format!("(?i){}", aliases)).expect("Invalid section header regex")
}

fn find_section(text: &str, header: &Regex) -> SectionAnalysis {
    let lines: Vec<&str> = text.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let header_match = match header.find(line) {
            Some(m) => m,
            None => continue,
        };

        let mut content_lines: Vec<&str> = Vec::new();
        let after_alias = &line[header_match.end()..];
        let after = after_alias.strip_prefix(':').unwrap_or(after_alias).trim_start();

        let mut next_idx = idx + 1;
        if after.is_empty() {
            // Header stands alone, content starts at the next non-blank line
            while next_idx < lines.len() && lines[next_idx].trim().is_empty() {
                next_idx += 1;
            }
            if next_idx < lines.len() {
                content_lines.push(lines[next_idx]);
                next_idx += 1;
            }
        } else {
            content_lines.push(after);
        }

        if content_lines.is_empty() {
            continue;
        }

        while next_idx < lines.len() {
            let candidate = lines[next_idx];
            let opens_with_capital = candidate
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_uppercase());
            if candidate.is_empty() || opens_with_capital {
                break;
            }
            content_lines.push(candidate);
            next_idx += 1;
        }

        let content = content_lines.join("\n").trim().to_string();
        let length = content.chars().count();
        return SectionAnalysis {
            found: true,
            content,
            length,
        };
    }

    SectionAnalysis::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> String {
        let body = "built data pipelines and dashboards for retail analytics teams \
            across many products and regions with measurable outcomes every quarter "
            .repeat(5);
        format!(
            "Jane Smith\nContact: jane@example.com\n\n\
             Summary: seasoned data engineer\n\n\
             Work Experience:\nsenior engineer at Initech Inc since Jan 2019\n{}\n\
             Education: Bachelor of Science, 2015\n\n\
             Skills: python, sql, airflow\n\n\
             Projects: warehouse migration\nAwards: team excellence 2021\n",
            body
        )
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = AtsScorer::new();

        let score = scorer.score("", None);

        assert_eq!(score.total_score, 0);
        assert_eq!(score.keyword_score, 0.0);
        assert!(score.keywords_found.is_empty());
    }

    #[test]
    fn test_structured_resume_outscores_fragment() {
        let scorer = AtsScorer::new();

        let structured = scorer.score(&sample_resume(), None);
        let fragment = scorer.score("I can write code", None);

        assert!(structured.total_score > fragment.total_score);
        assert!(structured.keyword_score > 0.0);
        assert!(structured.format_score > 0);
    }

    #[test]
    fn test_keyword_component() {
        let scorer = AtsScorer::new();
        let text = "experience education skills summary objective work \
                    projects certifications awards contact";

        let score = scorer.score(text, None);

        assert_eq!(score.keyword_score, 50.0);
        assert_eq!(score.keywords_found.len(), 10);
    }

    #[test]
    fn test_custom_keywords() {
        let scorer = AtsScorer::new();
        let keywords = vec!["rust".to_string(), "cobol".to_string()];

        let score = scorer.score("seasoned rust developer", Some(&keywords));

        assert_eq!(score.keyword_score, 25.0);
        assert_eq!(score.keywords_found, vec!["rust"]);
    }

    #[test]
    fn test_content_bands() {
        let scorer = AtsScorer::new();

        let short = "word ".repeat(50);
        let medium = "word ".repeat(150);
        let long = "word ".repeat(700);

        assert_eq!(scorer.score(&short, None).content_score, 0);
        assert_eq!(scorer.score(&medium, None).content_score, 10);
        assert_eq!(scorer.score(&long, None).content_score, 30);
    }

    #[test]
    fn test_format_indicators() {
        let scorer = AtsScorer::new();

        let score = scorer.score("John Smith, Bachelor, Initech Inc, Jan 2020", None);

        // Years, proper name, month, degree, and company suffix all hit
        assert_eq!(score.format_score, 15);
    }

    #[test]
    fn test_section_analysis() {
        let scorer = AtsScorer::new();

        let sections = scorer.analyze_sections(&sample_resume());

        assert!(sections.summary.found);
        assert_eq!(sections.summary.content, "seasoned data engineer");
        assert!(sections.experience.found);
        assert!(sections.experience.content.contains("Initech"));
        assert!(sections.education.found);
        assert_eq!(sections.education.content, "Bachelor of Science, 2015");
        assert!(sections.skills.found);
        assert_eq!(sections.skills.content, "python, sql, airflow");
        assert!(!sections.certifications.found);
        assert_eq!(sections.certifications.length, 0);
    }

    #[test]
    fn test_section_content_stops_at_capitalized_line() {
        let scorer = AtsScorer::new();
        let text = "Education: started somewhere\nstill going\nNext Chapter";

        let sections = scorer.analyze_sections(text);

        assert_eq!(sections.education.content, "started somewhere\nstill going");
    }
}
