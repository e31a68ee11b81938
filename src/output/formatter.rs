//! Output formatters - console, JSON, and markdown renderings of reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::gaps::analyzer::{GapAnalysis, MarketTrends};
use crate::gaps::catalog::SalaryRange;
use crate::gaps::plan::ImprovementPlan;
use crate::matching::ranker::RankedJob;
use crate::matching::scorer::{MatchResult, WeightVector};
use crate::output::report::*;
use colored::{Color, Colorize};
use std::path::Path;

/// How many skills a console list shows before eliding the rest.
const CONSOLE_SKILL_LIMIT: usize = 10;
/// How many ranked jobs a batch section shows without `--detailed`.
const CONSOLE_BATCH_LIMIT: usize = 5;
/// How many learning recommendations show without `--detailed`.
const CONSOLE_RECOMMENDATION_LIMIT: usize = 6;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn generated_line(&self, metadata: &ReportMetadata) -> String {
        format!(
            "Generated: {} | Processing time: {}ms\n",
            chrono::DateTime::<chrono::Utc>::from(metadata.generated_at)
                .format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.processing_time_ms
        )
    }

    fn footer(&self, metadata: &ReportMetadata) -> String {
        format!(
            "\n{} Generated by jobfit v{}\n",
            self.colorize("ℹ️", Color::Blue),
            metadata.matcher_version
        )
    }

    fn skill_list(&self, skills: &[String], limit: usize) -> String {
        if skills.is_empty() {
            return "none".to_string();
        }
        if self.detailed || skills.len() <= limit {
            skills.join(", ")
        } else {
            format!(
                "{} (+{} more)",
                skills[..limit].join(", "),
                skills.len() - limit
            )
        }
    }

    fn format_breakdown(&self, result: &MatchResult) -> String {
        let scores = &result.detailed_scores;
        let weights = &result.weights_used;
        let mut output = String::new();
        output.push_str(&format!(
            "🎯 Text Similarity: {:.1}% (weight: {:.1}%)\n",
            scores.text_similarity,
            weights.text * 100.0
        ));
        output.push_str(&format!(
            "🔍 Skills Overlap: {:.1}% (weight: {:.1}%)\n",
            scores.skills_similarity,
            weights.skills * 100.0
        ));
        output.push_str(&format!(
            "📈 Experience: {:.1}% (weight: {:.1}%)\n",
            scores.experience_similarity,
            weights.experience * 100.0
        ));
        output.push_str(&format!(
            "🎓 Education: {:.1}% (weight: {:.1}%)\n",
            scores.education_similarity,
            weights.education * 100.0
        ));
        output
    }

    fn format_ranked_job(&self, index: usize, job: &RankedJob) -> String {
        let mut output = format!(
            "{}. {} at {}: {:.1}% {}\n",
            index,
            job.job_title,
            job.company,
            job.match_percentage,
            self.format_score_badge(job.match_percentage.round() as u8)
        );
        if self.detailed {
            let scores = &job.details.detailed_scores;
            output.push_str(&format!(
                "   Text {:.1}% | Skills {:.1}% | Experience {:.1}% | Education {:.1}%\n",
                scores.text_similarity,
                scores.skills_similarity,
                scores.experience_similarity,
                scores.education_similarity
            ));
        }
        output
    }

    fn format_match(&self, report: &MatchReport, metadata: &ReportMetadata) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 JOB FIT ANALYSIS", 1));
        output.push_str(&self.generated_line(metadata));

        output.push_str(&self.format_header("Match Summary", 2));
        match &report.company {
            Some(company) => output.push_str(&format!("Job: {} at {}\n", report.job_title, company)),
            None => output.push_str(&format!("Job: {}\n", report.job_title)),
        }
        if let Some(resume_id) = &report.resume_id {
            output.push_str(&format!("Resume: {}\n", resume_id));
        }
        let badge = self.format_score_badge(report.result.match_percentage.round() as u8);
        output.push_str(&format!(
            "Overall Score: {:.1}% {}\n",
            report.result.match_percentage, badge
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&self.format_breakdown(&report.result));

        output.push_str(&self.format_header("✅ Matched Skills", 3));
        output.push_str(&format!(
            "  {}\n",
            self.colorize(
                &self.skill_list(&report.result.matched_skills, CONSOLE_SKILL_LIMIT),
                Color::Green
            )
        ));

        output.push_str(&self.format_header("🚨 Missing Skills", 3));
        output.push_str(&format!(
            "  {}\n",
            self.colorize(
                &self.skill_list(&report.result.missing_skills, CONSOLE_SKILL_LIMIT),
                Color::Yellow
            )
        ));

        if let Some(gaps) = &report.gap_analysis {
            output.push_str(&self.format_gap_sections(gaps, None, None));
        }

        output.push_str(&self.footer(metadata));
        output
    }

    fn format_ranking(&self, report: &RankingReport, metadata: &ReportMetadata) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("🏆 JOB RANKING", 1));
        output.push_str(&self.generated_line(metadata));
        if let Some(resume_id) = &report.resume_id {
            output.push_str(&format!("Resume: {}\n", resume_id));
        }
        output.push_str(&format!("Jobs considered: {}\n", report.total_jobs));

        output.push_str(&self.format_header("Best Matches", 2));
        if report.ranked_jobs.is_empty() {
            output.push_str("No jobs to rank.\n");
        }
        for (i, job) in report.ranked_jobs.iter().enumerate() {
            output.push_str(&self.format_ranked_job(i + 1, job));
        }

        output.push_str(&self.footer(metadata));
        output
    }

    fn format_batch(&self, report: &BatchReport, metadata: &ReportMetadata) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 BATCH MATCH RESULTS", 1));
        output.push_str(&self.generated_line(metadata));
        output.push_str(&format!(
            "Resumes: {} | Jobs: {}\n",
            report.total_resumes, report.total_jobs
        ));

        for matches in &report.results {
            let resume_label = matches.resume_id.as_deref().unwrap_or("(unnamed resume)");
            output.push_str(&self.format_header(resume_label, 2));

            let shown = if self.detailed {
                matches.matched_jobs.len()
            } else {
                matches.matched_jobs.len().min(CONSOLE_BATCH_LIMIT)
            };
            for (i, job) in matches.matched_jobs.iter().take(shown).enumerate() {
                output.push_str(&self.format_ranked_job(i + 1, job));
            }
            if matches.matched_jobs.len() > shown {
                output.push_str(&format!(
                    "  (+{} more)\n",
                    matches.matched_jobs.len() - shown
                ));
            }
        }

        output.push_str(&self.footer(metadata));
        output
    }

    fn format_gaps(&self, report: &GapReport, metadata: &ReportMetadata) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 SKILL GAP ANALYSIS", 1));
        output.push_str(&self.generated_line(metadata));
        if let Some(resume_id) = &report.resume_id {
            output.push_str(&format!("Resume: {}\n", resume_id));
        }
        output.push_str(&format!("Job: {}\n", report.job_title));

        output.push_str(&self.format_gap_sections(
            &report.analysis,
            Some(&report.market_trends),
            Some(&report.improvement_plan),
        ));

        output.push_str(&self.footer(metadata));
        output
    }

    fn format_gap_sections(
        &self,
        analysis: &GapAnalysis,
        trends: Option<&MarketTrends>,
        plan: Option<&ImprovementPlan>,
    ) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("Gap Overview", 2));
        output.push_str(&format!(
            "Required skills: {} | Missing: {} ({:.1}% gap)\n",
            analysis.total_required_skills, analysis.total_missing_skills, analysis.gap_percentage
        ));
        output.push_str(&format!(
            "✅ Existing: {}\n",
            self.colorize(
                &self.skill_list(&analysis.existing_skills, CONSOLE_SKILL_LIMIT),
                Color::Green
            )
        ));
        output.push_str(&format!(
            "🚨 Missing: {}\n",
            self.colorize(
                &self.skill_list(&analysis.missing_skills, CONSOLE_SKILL_LIMIT),
                Color::Red
            )
        ));

        let categories = &analysis.categorized_gaps;
        if !analysis.missing_skills.is_empty() {
            output.push_str(&self.format_header("Gap Categories", 3));
            if !categories.technical.is_empty() {
                output.push_str(&format!("Technical: {}\n", categories.technical.join(", ")));
            }
            if !categories.soft.is_empty() {
                output.push_str(&format!("Soft: {}\n", categories.soft.join(", ")));
            }
            if !categories.other.is_empty() {
                output.push_str(&format!("Other: {}\n", categories.other.join(", ")));
            }
        }

        if !analysis.priority_skills.is_empty() {
            output.push_str(&self.format_header("📋 Priority Skills", 3));
            for (i, skill) in analysis.priority_skills.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, skill));
            }
        }

        if !analysis.learning_recommendations.is_empty() {
            output.push_str(&self.format_header("💡 Learning Recommendations", 3));
            let shown = if self.detailed {
                analysis.learning_recommendations.len()
            } else {
                analysis
                    .learning_recommendations
                    .len()
                    .min(CONSOLE_RECOMMENDATION_LIMIT)
            };
            for rec in analysis.learning_recommendations.iter().take(shown) {
                output.push_str(&format!(
                    "  • {}: {} ({}, {}, {})\n",
                    rec.skill, rec.title, rec.platform, rec.duration, rec.difficulty
                ));
            }
            if analysis.learning_recommendations.len() > shown {
                output.push_str(&format!(
                    "  (+{} more)\n",
                    analysis.learning_recommendations.len() - shown
                ));
            }
        }

        if !analysis.career_suggestions.is_empty() {
            output.push_str(&self.format_header("💼 Career Suggestions", 3));
            for (i, suggestion) in analysis.career_suggestions.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {}: {:.1}% match | {} | {}\n",
                    i + 1,
                    suggestion.career_path,
                    suggestion.match_percentage,
                    format_salary(&suggestion.salary_range),
                    suggestion.career_level
                ));
            }
        }

        if let Some(trends) = trends {
            output.push_str(&self.format_header("📈 Market Trends", 3));
            output.push_str(&format!(
                "Market relevance: {:.1}%\n",
                trends.market_relevance_score
            ));
            output.push_str(&format!(
                "Trending skills held: {}\n",
                self.skill_list(&trends.trending_skills_have, CONSOLE_SKILL_LIMIT)
            ));
            output.push_str(&format!(
                "Trending skills missing: {}\n",
                self.skill_list(&trends.trending_skills_missing, CONSOLE_SKILL_LIMIT)
            ));
        }

        if let Some(plan) = plan {
            output.push_str(&self.format_header("🚀 Improvement Plan", 2));
            output.push_str(&format!(
                "Time frame: {} months | Skills to learn: {} | Per month: {}\n",
                plan.time_frame_months, plan.total_skills_to_learn, plan.skills_per_month
            ));
            for milestone in &plan.monthly_milestones {
                output.push_str(&format!(
                    "  Month {}: {} ({})\n",
                    milestone.month,
                    milestone.skills_to_learn.join(", "),
                    milestone.estimated_time
                ));
            }
            if !plan.action_steps.is_empty() {
                output.push_str("Action steps:\n");
                for step in &plan.action_steps {
                    output.push_str(&format!("  {}\n", step));
                }
            }
        }

        output
    }

    fn format_ats(&self, report: &AtsReport, metadata: &ReportMetadata) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 ATS READINESS", 1));
        output.push_str(&self.generated_line(metadata));
        if let Some(resume_id) = &report.resume_id {
            output.push_str(&format!("Resume: {}\n", resume_id));
        }

        let badge = self.format_score_badge(report.score.total_score.min(100) as u8);
        output.push_str(&format!(
            "Overall: {} / 100 {}\n",
            report.score.total_score, badge
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!(
            "🔍 Keyword coverage: {:.1} / 50\n",
            report.score.keyword_score
        ));
        output.push_str(&format!(
            "📄 Content volume: {} / 30\n",
            report.score.content_score
        ));
        output.push_str(&format!(
            "🧱 Structure: {} / 20\n",
            report.score.format_score
        ));
        output.push_str(&format!(
            "Keywords found: {}\n",
            self.skill_list(&report.score.keywords_found, CONSOLE_SKILL_LIMIT)
        ));
        output.push_str(&format!(
            "🔑 Top keywords: {}\n",
            self.skill_list(&report.top_keywords, CONSOLE_SKILL_LIMIT)
        ));

        output.push_str(&self.format_header("Sections", 3));
        for (name, section) in section_rows(&report.sections) {
            if section.found {
                output.push_str(&format!(
                    "  {} {} ({} chars)\n",
                    self.colorize("✅", Color::Green),
                    name,
                    section.length
                ));
            } else {
                output.push_str(&format!(
                    "  {} {} not found\n",
                    self.colorize("🚨", Color::Red),
                    name
                ));
            }
        }

        output.push_str(&self.footer(metadata));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let output = match &report.payload {
            ReportPayload::Match(payload) => self.format_match(payload, &report.metadata),
            ReportPayload::Ranking(payload) => self.format_ranking(payload, &report.metadata),
            ReportPayload::Batch(payload) => self.format_batch(payload, &report.metadata),
            ReportPayload::Gaps(payload) => self.format_gaps(payload, &report.metadata),
            ReportPayload::Ats(payload) => self.format_ats(payload, &report.metadata),
        };
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn metadata_lines(&self, metadata: &ReportMetadata) -> String {
        if !self.include_metadata {
            return String::new();
        }
        let inputs: Vec<String> = metadata
            .input_files
            .iter()
            .map(|file| {
                format!(
                    "`{}`",
                    Path::new(file)
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| file.clone())
                )
            })
            .collect();
        format!(
            "**Generated:** {} | **Processing Time:** {}ms\n**Inputs:** {}\n\n",
            chrono::DateTime::<chrono::Utc>::from(metadata.generated_at)
                .format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.processing_time_ms,
            inputs.join(", ")
        )
    }

    fn markdown_footer(&self, metadata: &ReportMetadata) -> String {
        if !self.include_metadata {
            return String::new();
        }
        format!(
            "---\n\n*Generated by jobfit v{}*\n",
            metadata.matcher_version
        )
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn breakdown_table(result: &MatchResult) -> String {
        let mut output = String::new();
        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        let rows: [(&str, f64, f64); 4] = breakdown_rows(result);
        for (label, score, weight) in rows {
            output.push_str(&format!(
                "| {} | {:.1}% | {:.1}% |\n",
                label,
                score,
                weight * 100.0
            ));
        }
        output.push('\n');
        output
    }

    fn ranked_jobs_table(jobs: &[RankedJob]) -> String {
        let mut output = String::new();
        output.push_str("| # | Job | Company | Score |\n");
        output.push_str("|---|-----|---------|-------|\n");
        for (i, job) in jobs.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {:.1}% |\n",
                i + 1,
                job.job_title,
                job.company,
                job.match_percentage
            ));
        }
        output.push('\n');
        output
    }

    fn gap_sections(
        analysis: &GapAnalysis,
        trends: Option<&MarketTrends>,
        plan: Option<&ImprovementPlan>,
    ) -> String {
        let mut output = String::new();

        output.push_str("## 🎯 Skill Gaps\n\n");
        output.push_str(&format!(
            "**Required:** {} | **Missing:** {} | **Gap:** {:.1}%\n\n",
            analysis.total_required_skills, analysis.total_missing_skills, analysis.gap_percentage
        ));
        if !analysis.existing_skills.is_empty() {
            output.push_str(&format!(
                "**Existing skills:** {}\n\n",
                analysis.existing_skills.join(", ")
            ));
        }
        if !analysis.missing_skills.is_empty() {
            output.push_str(&format!(
                "**Missing skills:** {}\n\n",
                analysis.missing_skills.join(", ")
            ));
        }

        if !analysis.priority_skills.is_empty() {
            output.push_str("### 📋 Priority Order\n\n");
            for (i, skill) in analysis.priority_skills.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, skill));
            }
            output.push('\n');
        }

        if !analysis.learning_recommendations.is_empty() {
            output.push_str("### 💡 Learning Recommendations\n\n");
            output.push_str("| Skill | Course | Platform | Duration | Difficulty |\n");
            output.push_str("|-------|--------|----------|----------|------------|\n");
            for rec in &analysis.learning_recommendations {
                output.push_str(&format!(
                    "| {} | [{}]({}) | {} | {} | {} |\n",
                    rec.skill, rec.title, rec.url, rec.platform, rec.duration, rec.difficulty
                ));
            }
            output.push('\n');
        }

        if !analysis.career_suggestions.is_empty() {
            output.push_str("### 💼 Career Suggestions\n\n");
            output.push_str("| Path | Match | Salary | Level |\n");
            output.push_str("|------|-------|--------|-------|\n");
            for suggestion in &analysis.career_suggestions {
                output.push_str(&format!(
                    "| {} | {:.1}% | {} | {} |\n",
                    suggestion.career_path,
                    suggestion.match_percentage,
                    format_salary(&suggestion.salary_range),
                    suggestion.career_level
                ));
            }
            output.push('\n');
        }

        if let Some(trends) = trends {
            output.push_str("### 📈 Market Trends\n\n");
            output.push_str(&format!(
                "**Market relevance:** {:.1}%\n\n",
                trends.market_relevance_score
            ));
            if !trends.trending_skills_have.is_empty() {
                output.push_str(&format!(
                    "**Trending skills held:** {}\n\n",
                    trends.trending_skills_have.join(", ")
                ));
            }
            if !trends.trending_skills_missing.is_empty() {
                output.push_str(&format!(
                    "**Trending skills missing:** {}\n\n",
                    trends.trending_skills_missing.join(", ")
                ));
            }
        }

        if let Some(plan) = plan {
            output.push_str("## 🚀 Improvement Plan\n\n");
            output.push_str(&format!(
                "**Time frame:** {} months | **Skills to learn:** {} | **Per month:** {}\n\n",
                plan.time_frame_months, plan.total_skills_to_learn, plan.skills_per_month
            ));
            for milestone in &plan.monthly_milestones {
                output.push_str(&format!(
                    "- **Month {}:** {} ({})\n",
                    milestone.month,
                    milestone.skills_to_learn.join(", "),
                    milestone.estimated_time
                ));
            }
            output.push('\n');
            if !plan.action_steps.is_empty() {
                output.push_str("### Action Steps\n\n");
                for step in &plan.action_steps {
                    output.push_str(&format!("{}\n", step));
                }
                output.push('\n');
            }
        }

        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        match &report.payload {
            ReportPayload::Match(payload) => {
                output.push_str("# 📊 Job Fit Analysis\n\n");
                output.push_str(&self.metadata_lines(&report.metadata));
                match &payload.company {
                    Some(company) => {
                        output.push_str(&format!("**Job:** {} at {}\n\n", payload.job_title, company))
                    }
                    None => output.push_str(&format!("**Job:** {}\n\n", payload.job_title)),
                }
                if let Some(resume_id) = &payload.resume_id {
                    output.push_str(&format!("**Resume:** {}\n\n", resume_id));
                }
                output.push_str(&format!(
                    "**Overall Score:** {:.1}% {}\n\n",
                    payload.result.match_percentage,
                    Self::markdown_score_badge(payload.result.match_percentage.round() as u8)
                ));

                output.push_str("## Score Breakdown\n\n");
                output.push_str(&Self::breakdown_table(&payload.result));

                output.push_str("## Skills\n\n");
                output.push_str(&format!(
                    "**Matched:** {}\n\n",
                    if payload.result.matched_skills.is_empty() {
                        "none".to_string()
                    } else {
                        payload.result.matched_skills.join(", ")
                    }
                ));
                output.push_str(&format!(
                    "**Missing:** {}\n\n",
                    if payload.result.missing_skills.is_empty() {
                        "none".to_string()
                    } else {
                        payload.result.missing_skills.join(", ")
                    }
                ));

                if let Some(gaps) = &payload.gap_analysis {
                    output.push_str(&Self::gap_sections(gaps, None, None));
                }
            }
            ReportPayload::Ranking(payload) => {
                output.push_str("# 🏆 Job Ranking\n\n");
                output.push_str(&self.metadata_lines(&report.metadata));
                if let Some(resume_id) = &payload.resume_id {
                    output.push_str(&format!("**Resume:** {}\n\n", resume_id));
                }
                output.push_str(&format!("**Jobs considered:** {}\n\n", payload.total_jobs));
                output.push_str(&Self::ranked_jobs_table(&payload.ranked_jobs));
            }
            ReportPayload::Batch(payload) => {
                output.push_str("# 📊 Batch Match Results\n\n");
                output.push_str(&self.metadata_lines(&report.metadata));
                output.push_str(&format!(
                    "**Resumes:** {} | **Jobs:** {}\n\n",
                    payload.total_resumes, payload.total_jobs
                ));
                for matches in &payload.results {
                    output.push_str(&format!(
                        "## {}\n\n",
                        matches.resume_id.as_deref().unwrap_or("(unnamed resume)")
                    ));
                    output.push_str(&Self::ranked_jobs_table(&matches.matched_jobs));
                }
            }
            ReportPayload::Gaps(payload) => {
                output.push_str("# 🎯 Skill Gap Analysis\n\n");
                output.push_str(&self.metadata_lines(&report.metadata));
                if let Some(resume_id) = &payload.resume_id {
                    output.push_str(&format!("**Resume:** {}\n\n", resume_id));
                }
                output.push_str(&format!("**Job:** {}\n\n", payload.job_title));
                output.push_str(&Self::gap_sections(
                    &payload.analysis,
                    Some(&payload.market_trends),
                    Some(&payload.improvement_plan),
                ));
            }
            ReportPayload::Ats(payload) => {
                output.push_str("# 📄 ATS Readiness\n\n");
                output.push_str(&self.metadata_lines(&report.metadata));
                if let Some(resume_id) = &payload.resume_id {
                    output.push_str(&format!("**Resume:** {}\n\n", resume_id));
                }
                output.push_str(&format!(
                    "**Overall:** {} / 100 {}\n\n",
                    payload.score.total_score,
                    Self::markdown_score_badge(payload.score.total_score.min(100) as u8)
                ));
                output.push_str("| Component | Score | Out of |\n");
                output.push_str("|-----------|-------|--------|\n");
                output.push_str(&format!(
                    "| Keyword coverage | {:.1} | 50 |\n",
                    payload.score.keyword_score
                ));
                output.push_str(&format!(
                    "| Content volume | {} | 30 |\n",
                    payload.score.content_score
                ));
                output.push_str(&format!(
                    "| Structure | {} | 20 |\n\n",
                    payload.score.format_score
                ));
                if !payload.top_keywords.is_empty() {
                    output.push_str(&format!(
                        "**Top keywords:** {}\n\n",
                        payload.top_keywords.join(", ")
                    ));
                }

                output.push_str("## Sections\n\n");
                output.push_str("| Section | Found | Length |\n");
                output.push_str("|---------|-------|--------|\n");
                for (name, section) in section_rows(&payload.sections) {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        name,
                        if section.found { "yes" } else { "no" },
                        section.length
                    ));
                }
                output.push('\n');
            }
        }

        output.push_str(&self.markdown_footer(&report.metadata));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn breakdown_rows(result: &MatchResult) -> [(&'static str, f64, f64); 4] {
    let scores = &result.detailed_scores;
    let weights: &WeightVector = &result.weights_used;
    [
        ("🎯 Text Similarity", scores.text_similarity, weights.text),
        ("🔍 Skills Overlap", scores.skills_similarity, weights.skills),
        (
            "📈 Experience",
            scores.experience_similarity,
            weights.experience,
        ),
        (
            "🎓 Education",
            scores.education_similarity,
            weights.education,
        ),
    ]
}

fn section_rows(
    sections: &crate::processing::ats::ResumeSections,
) -> [(&'static str, &crate::processing::ats::SectionAnalysis); 7] {
    [
        ("Summary", &sections.summary),
        ("Experience", &sections.experience),
        ("Education", &sections.education),
        ("Skills", &sections.skills),
        ("Certifications", &sections.certifications),
        ("Projects", &sections.projects),
        ("Awards", &sections.awards),
    ]
}

fn format_salary(range: &SalaryRange) -> String {
    format!("${} - ${}", thousands(range.min), thousands(range.max))
}

fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
