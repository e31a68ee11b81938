//! CLI interface for the matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobfit")]
#[command(about = "Resume and job matching with skill gap analysis")]
#[command(
    long_about = "Score resumes against job descriptions using text similarity, skill overlap, and experience and education checks. Rank jobs for a resume, match whole batches, analyze skill gaps, and check ATS readiness."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one resume against one job description
    Match {
        /// Path to resume file (JSON, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (JSON, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Include a skill gap analysis in the report
        #[arg(short, long)]
        gaps: bool,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Rank a set of jobs for one resume
    Rank {
        /// Path to resume file (JSON, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to jobs file (JSON array, or a single job)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Keep only the best N matches
        #[arg(short, long)]
        top: Option<usize>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Match every resume in a batch against every job
    Batch {
        /// Path to resumes file (JSON array, or a single resume)
        #[arg(short, long)]
        resumes: PathBuf,

        /// Path to jobs file (JSON array, or a single job)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Analyze skill gaps between a resume and a job
    Gaps {
        /// Path to resume file (JSON, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (JSON, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Months available for the improvement plan
        #[arg(short, long)]
        months: Option<u32>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Score a resume's ATS readiness
    Ats {
        /// Path to resume file (JSON, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.text_weight")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    crate::config::OutputFormat::from_name(format).map_err(|e| e.to_string())
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
