//! Profile loading for resumes and job postings
//!
//! JSON files deserialize straight into profiles. Plain text and
//! markdown files get a profile synthesized from the raw text: skills
//! from the extractor, experience from a years-of-experience scan, and
//! education from degree keywords.

use crate::error::{JobFitError, Result};
use crate::input::file_detector::FileFormat;
use crate::processing::skill_extractor::SkillExtractor;
use crate::profile::{JobProfile, ResumeProfile, SkillInput};
use log::{debug, info};
use regex::Regex;
use std::path::Path;

pub struct ProfileLoader {
    extractor: SkillExtractor,
    years_regex: Regex,
}

impl ProfileLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new()?,
            years_regex: Regex::new(r"(?i)(\d+)\+?\s*years?").expect("Invalid years regex"),
        })
    }

    pub fn with_fuzzy_extraction(mut self, enabled: bool) -> Self {
        self.extractor.set_fuzzy_enabled(enabled);
        self
    }

    pub fn load_resume(&self, path: &Path) -> Result<ResumeProfile> {
        info!("Loading resume from: {}", path.display());
        let content = self.read_input(path)?;

        let mut resume = match self.detect_format(path)? {
            FileFormat::Json => serde_json::from_str::<ResumeProfile>(&content)?,
            FileFormat::Text | FileFormat::Markdown => self.resume_from_text(&content),
            FileFormat::Unknown => return Err(unsupported(path)),
        };

        if resume.id.is_none() {
            resume.id = Some(file_stem(path));
        }
        Ok(resume)
    }

    /// Load one or many resumes. A JSON array yields all of its
    /// entries, anything else yields a single profile.
    pub fn load_resumes(&self, path: &Path) -> Result<Vec<ResumeProfile>> {
        info!("Loading resumes from: {}", path.display());
        let content = self.read_input(path)?;

        let mut resumes = match self.detect_format(path)? {
            FileFormat::Json => match serde_json::from_str::<Vec<ResumeProfile>>(&content) {
                Ok(list) => list,
                Err(_) => vec![serde_json::from_str::<ResumeProfile>(&content)?],
            },
            FileFormat::Text | FileFormat::Markdown => vec![self.resume_from_text(&content)],
            FileFormat::Unknown => return Err(unsupported(path)),
        };

        let stem = file_stem(path);
        for (index, resume) in resumes.iter_mut().enumerate() {
            if resume.id.is_none() {
                resume.id = Some(format!("{}-{}", stem, index + 1));
            }
        }
        debug!("Loaded {} resume(s)", resumes.len());
        Ok(resumes)
    }

    pub fn load_job(&self, path: &Path) -> Result<JobProfile> {
        info!("Loading job from: {}", path.display());
        let content = self.read_input(path)?;

        let mut job = match self.detect_format(path)? {
            FileFormat::Json => serde_json::from_str::<JobProfile>(&content)?,
            FileFormat::Text | FileFormat::Markdown => self.job_from_text(&content),
            FileFormat::Unknown => return Err(unsupported(path)),
        };

        if job.id.is_none() {
            job.id = Some(file_stem(path));
        }
        Ok(job)
    }

    /// Load one or many job postings, mirroring [`Self::load_resumes`].
    pub fn load_jobs(&self, path: &Path) -> Result<Vec<JobProfile>> {
        info!("Loading jobs from: {}", path.display());
        let content = self.read_input(path)?;

        let mut jobs = match self.detect_format(path)? {
            FileFormat::Json => match serde_json::from_str::<Vec<JobProfile>>(&content) {
                Ok(list) => list,
                Err(_) => vec![serde_json::from_str::<JobProfile>(&content)?],
            },
            FileFormat::Text | FileFormat::Markdown => vec![self.job_from_text(&content)],
            FileFormat::Unknown => return Err(unsupported(path)),
        };

        let stem = file_stem(path);
        for (index, job) in jobs.iter_mut().enumerate() {
            if job.id.is_none() {
                job.id = Some(format!("{}-{}", stem, index + 1));
            }
        }
        debug!("Loaded {} job(s)", jobs.len());
        Ok(jobs)
    }

    fn read_input(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(JobFitError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        Ok(std::fs::read_to_string(path)?)
    }

    fn detect_format(&self, path: &Path) -> Result<FileFormat> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            JobFitError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        Ok(FileFormat::from_extension(extension))
    }

    fn resume_from_text(&self, text: &str) -> ResumeProfile {
        let extracted = self.extractor.extract(text);
        debug!("Extracted {} skills from resume text", extracted.count);

        ResumeProfile {
            id: None,
            text: text.to_string(),
            skills: SkillInput::List(extracted.all_skills),
            experience_years: self.scan_experience_years(text),
            education: scan_education(text),
        }
    }

    fn job_from_text(&self, text: &str) -> JobProfile {
        let extracted = self.extractor.extract(text);
        debug!("Extracted {} skills from job text", extracted.count);

        JobProfile {
            id: None,
            title: first_line(text),
            company: None,
            description: text.to_string(),
            skills_required: SkillInput::List(extracted.all_skills),
            min_experience_years: self.scan_experience_years(text),
            education_required: scan_education(text),
        }
    }

    /// Largest "N years" mention in the text, or 0 when none appears.
    fn scan_experience_years(&self, text: &str) -> f64 {
        self.years_regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
            .fold(0.0, f64::max)
    }
}

fn scan_education(text: &str) -> String {
    let lower = text.to_lowercase();
    if lower.contains("phd") || lower.contains("ph.d") || lower.contains("doctorate") {
        "PhD".to_string()
    } else if lower.contains("master") {
        "Master's degree".to_string()
    } else if lower.contains("bachelor") {
        "Bachelor's degree".to_string()
    } else {
        String::new()
    }
}

fn first_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("Untitled position")
        .to_string()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "profile".to_string())
}

fn unsupported(path: &Path) -> JobFitError {
    JobFitError::UnsupportedFormat(format!(
        "Unsupported file type for: {} (expected .json, .txt, or .md)",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_resume_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.json");
        fs::write(
            &path,
            r#"{"id": "r1", "text": "Built services", "skills": ["Python", "SQL"],
                "experience_years": 4, "education": "Bachelor of Science"}"#,
        )
        .unwrap();

        let loader = ProfileLoader::new().unwrap();
        let resume = loader.load_resume(&path).unwrap();

        assert_eq!(resume.id.as_deref(), Some("r1"));
        assert_eq!(resume.experience_years, 4.0);
        assert_eq!(resume.skills.normalized(), vec!["python", "sql"]);
    }

    #[test]
    fn test_load_resume_json_without_id_uses_file_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jane_doe.json");
        fs::write(&path, r#"{"text": "Short resume"}"#).unwrap();

        let loader = ProfileLoader::new().unwrap();
        let resume = loader.load_resume(&path).unwrap();

        assert_eq!(resume.id.as_deref(), Some("jane_doe"));
    }

    #[test]
    fn test_load_resume_from_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(
            &path,
            "Senior Data Engineer\n\
             8 years of experience building pipelines with Python and SQL.\n\
             Bachelor of Science in Computer Science.\n",
        )
        .unwrap();

        let loader = ProfileLoader::new().unwrap();
        let resume = loader.load_resume(&path).unwrap();

        let skills = resume.skills.normalized();
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"sql".to_string()));
        assert_eq!(resume.experience_years, 8.0);
        assert_eq!(resume.education, "Bachelor's degree");
        assert_eq!(resume.id.as_deref(), Some("resume"));
    }

    #[test]
    fn test_load_job_from_text_takes_title_from_first_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posting.md");
        fs::write(
            &path,
            "\nBackend Engineer\nWe need 3 years of experience with Java.\n",
        )
        .unwrap();

        let loader = ProfileLoader::new().unwrap();
        let job = loader.load_job(&path).unwrap();

        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.min_experience_years, 3.0);
        assert_eq!(job.id.as_deref(), Some("posting"));
    }

    #[test]
    fn test_load_jobs_array_backfills_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(
            &path,
            r#"[{"title": "One"}, {"id": "explicit", "title": "Two"}]"#,
        )
        .unwrap();

        let loader = ProfileLoader::new().unwrap();
        let jobs = loader.load_jobs(&path).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].id.as_deref(), Some("jobs-1"));
        assert_eq!(jobs[1].id.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_load_resumes_accepts_single_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.json");
        fs::write(&path, r#"{"text": "Solo profile"}"#).unwrap();

        let loader = ProfileLoader::new().unwrap();
        let resumes = loader.load_resumes(&path).unwrap();

        assert_eq!(resumes.len(), 1);
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let loader = ProfileLoader::new().unwrap();

        let result = loader.load_resume(Path::new("/nonexistent/resume.json"));

        assert!(matches!(
            result,
            Err(JobFitError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        fs::write(&path, "not really a docx").unwrap();

        let loader = ProfileLoader::new().unwrap();
        let result = loader.load_resume(&path);

        assert!(matches!(
            result,
            Err(JobFitError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_experience_scan_takes_the_largest_mention() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        fs::write(
            &path,
            "2 years at one shop, then 7+ years at another, 1 year freelancing.",
        )
        .unwrap();

        let loader = ProfileLoader::new().unwrap();
        let resume = loader.load_resume(&path).unwrap();

        assert_eq!(resume.experience_years, 7.0);
    }
}
