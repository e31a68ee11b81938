//! Report structures shared by every output format

use crate::gaps::analyzer::{GapAnalysis, MarketTrends};
use crate::gaps::plan::ImprovementPlan;
use crate::matching::ranker::{RankedJob, ResumeMatches};
use crate::matching::scorer::MatchResult;
use crate::processing::ats::{AtsScore, ResumeSections};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A finished analysis ready for formatting, tagged by the command
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub payload: ReportPayload,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "report_type", rename_all = "snake_case")]
pub enum ReportPayload {
    Match(MatchReport),
    Ranking(RankingReport),
    Batch(BatchReport),
    Gaps(GapReport),
    Ats(AtsReport),
}

/// One resume scored against one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub resume_id: Option<String>,
    pub job_title: String,
    pub company: Option<String>,
    pub result: MatchResult,
    /// Present when the match was requested with gap analysis.
    pub gap_analysis: Option<GapAnalysis>,
}

/// One resume ranked against a set of jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub resume_id: Option<String>,
    pub total_jobs: usize,
    pub ranked_jobs: Vec<RankedJob>,
}

/// Every resume ranked against every job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub total_resumes: usize,
    pub total_jobs: usize,
    pub results: Vec<ResumeMatches>,
}

/// Skill gaps with learning guidance and an improvement plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub resume_id: Option<String>,
    pub job_title: String,
    pub analysis: GapAnalysis,
    pub market_trends: MarketTrends,
    pub improvement_plan: ImprovementPlan,
}

/// ATS readiness of a single resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub resume_id: Option<String>,
    pub score: AtsScore,
    pub sections: ResumeSections,
    /// Most frequent non-stopword terms in the resume text.
    pub top_keywords: Vec<String>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: SystemTime,

    /// Version of the matcher used
    pub matcher_version: String,

    /// Input files analyzed
    pub input_files: Vec<String>,

    /// Total processing time
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(input_files: Vec<String>, processing_time_ms: u64) -> Self {
        Self {
            generated_at: SystemTime::now(),
            matcher_version: env!("CARGO_PKG_VERSION").to_string(),
            input_files,
            processing_time_ms,
        }
    }
}

impl Report {
    pub fn new(payload: ReportPayload, metadata: ReportMetadata) -> Self {
        Self { payload, metadata }
    }
}
