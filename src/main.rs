//! Job fit analyzer: resume and job matching with skill gap analysis

mod cli;
mod config;
mod error;
mod gaps;
mod input;
mod matching;
mod output;
mod processing;
mod profile;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{JobFitError, Result};
use gaps::analyzer::GapAnalyzer;
use gaps::plan::generate_improvement_plan;
use indicatif::{ProgressBar, ProgressStyle};
use input::loader::ProfileLoader;
use log::{error, info};
use matching::ranker::JobRanker;
use matching::scorer::MatchScorer;
use output::formatter::{save_report_to_file, ReportGenerator};
use output::report::{
    AtsReport, BatchReport, GapReport, MatchReport, RankingReport, Report, ReportMetadata,
    ReportPayload,
};
use processing::ats::AtsScorer;
use processing::text_processor::TextNormalizer;
use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            gaps,
            detailed,
            output,
            save,
        } => {
            info!("Starting match analysis");

            // Validate input files
            cli::validate_file_extension(&resume, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Job file: {}", e)))?;

            let format = resolve_output_format(output.as_deref(), &config)?;
            let started = Instant::now();

            let loader =
                ProfileLoader::new()?.with_fuzzy_extraction(config.analysis.fuzzy_extraction);
            let resume_profile = loader.load_resume(&resume)?;
            let job_profile = loader.load_job(&job)?;

            let scorer = MatchScorer::new();
            let result = scorer.score(&resume_profile, &job_profile, &config.weight_vector());
            info!(
                "Match score for '{}': {:.1}%",
                job_profile.title, result.match_percentage
            );

            let gap_analysis = if gaps {
                Some(GapAnalyzer::new().analyze(&resume_profile.skills, &job_profile.skills_required))
            } else {
                None
            };

            let report = Report::new(
                ReportPayload::Match(MatchReport {
                    resume_id: resume_profile.id.clone(),
                    job_title: job_profile.title.clone(),
                    company: job_profile.company.clone(),
                    result,
                    gap_analysis,
                }),
                ReportMetadata::new(
                    vec![resume.display().to_string(), job.display().to_string()],
                    started.elapsed().as_millis() as u64,
                ),
            );

            emit_report(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Rank {
            resume,
            jobs,
            top,
            detailed,
            output,
            save,
        } => {
            info!("Starting job ranking");

            cli::validate_file_extension(&resume, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Jobs file: {}", e)))?;

            let format = resolve_output_format(output.as_deref(), &config)?;
            let started = Instant::now();

            let loader =
                ProfileLoader::new()?.with_fuzzy_extraction(config.analysis.fuzzy_extraction);
            let resume_profile = loader.load_resume(&resume)?;
            let job_list = loader.load_jobs(&jobs)?;
            info!("Ranking {} jobs", job_list.len());

            let ranker = JobRanker::new();
            let ranked_jobs =
                ranker.rank_jobs(&resume_profile, &job_list, &config.weight_vector(), top);

            let report = Report::new(
                ReportPayload::Ranking(RankingReport {
                    resume_id: resume_profile.id.clone(),
                    total_jobs: job_list.len(),
                    ranked_jobs,
                }),
                ReportMetadata::new(
                    vec![resume.display().to_string(), jobs.display().to_string()],
                    started.elapsed().as_millis() as u64,
                ),
            );

            emit_report(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Batch {
            resumes,
            jobs,
            detailed,
            output,
            save,
        } => {
            info!("Starting batch matching");

            cli::validate_file_extension(&resumes, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Resumes file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Jobs file: {}", e)))?;

            let format = resolve_output_format(output.as_deref(), &config)?;
            let started = Instant::now();

            let loader =
                ProfileLoader::new()?.with_fuzzy_extraction(config.analysis.fuzzy_extraction);
            let resume_list = loader.load_resumes(&resumes)?;
            let job_list = loader.load_jobs(&jobs)?;
            info!(
                "Matching {} resumes against {} jobs",
                resume_list.len(),
                job_list.len()
            );

            let spinner = create_spinner(&format!(
                "Matching {} resumes against {} jobs...",
                resume_list.len(),
                job_list.len()
            ));
            let ranker = JobRanker::new();
            let results = ranker.batch_match(&resume_list, &job_list, &config.weight_vector());
            spinner.finish_and_clear();

            let report = Report::new(
                ReportPayload::Batch(BatchReport {
                    total_resumes: resume_list.len(),
                    total_jobs: job_list.len(),
                    results,
                }),
                ReportMetadata::new(
                    vec![resumes.display().to_string(), jobs.display().to_string()],
                    started.elapsed().as_millis() as u64,
                ),
            );

            emit_report(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Gaps {
            resume,
            job,
            months,
            detailed,
            output,
            save,
        } => {
            info!("Starting skill gap analysis");

            cli::validate_file_extension(&resume, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Job file: {}", e)))?;

            let format = resolve_output_format(output.as_deref(), &config)?;
            let plan_months = months.unwrap_or(config.analysis.default_plan_months);
            let started = Instant::now();

            let loader =
                ProfileLoader::new()?.with_fuzzy_extraction(config.analysis.fuzzy_extraction);
            let resume_profile = loader.load_resume(&resume)?;
            let job_profile = loader.load_job(&job)?;

            let analyzer = GapAnalyzer::new();
            let analysis = analyzer.analyze(&resume_profile.skills, &job_profile.skills_required);
            let market_trends = analyzer.market_trends(&resume_profile.skills);
            let improvement_plan = generate_improvement_plan(&analysis, plan_months);
            info!(
                "Found {} missing skills, planning over {} months",
                analysis.total_missing_skills, plan_months
            );

            let report = Report::new(
                ReportPayload::Gaps(GapReport {
                    resume_id: resume_profile.id.clone(),
                    job_title: job_profile.title.clone(),
                    analysis,
                    market_trends,
                    improvement_plan,
                }),
                ReportMetadata::new(
                    vec![resume.display().to_string(), job.display().to_string()],
                    started.elapsed().as_millis() as u64,
                ),
            );

            emit_report(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Ats {
            resume,
            detailed,
            output,
            save,
        } => {
            info!("Starting ATS readiness check");

            cli::validate_file_extension(&resume, &["json", "txt", "md"])
                .map_err(|e| JobFitError::InvalidInput(format!("Resume file: {}", e)))?;

            let format = resolve_output_format(output.as_deref(), &config)?;
            let started = Instant::now();

            let loader =
                ProfileLoader::new()?.with_fuzzy_extraction(config.analysis.fuzzy_extraction);
            let resume_profile = loader.load_resume(&resume)?;

            let scorer = AtsScorer::new();
            let score = scorer.score(&resume_profile.text, None);
            let sections = scorer.analyze_sections(&resume_profile.text);
            let top_keywords = TextNormalizer::new().extract_keywords(&resume_profile.text, 10);
            info!("ATS score: {}/100", score.total_score);

            let report = Report::new(
                ReportPayload::Ats(AtsReport {
                    resume_id: resume_profile.id.clone(),
                    score,
                    sections,
                    top_keywords,
                }),
                ReportMetadata::new(
                    vec![resume.display().to_string()],
                    started.elapsed().as_millis() as u64,
                ),
            );

            emit_report(&report, format, &config, detailed, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("\nScoring Weights:");
                println!("  Text similarity: {:.1}%", config.scoring.text_weight * 100.0);
                println!("  Skills overlap: {:.1}%", config.scoring.skills_weight * 100.0);
                println!(
                    "  Experience: {:.1}%",
                    config.scoring.experience_weight * 100.0
                );
                println!(
                    "  Education: {:.1}%",
                    config.scoring.education_weight * 100.0
                );
                println!("\nAnalysis:");
                println!(
                    "  Default plan months: {}",
                    config.analysis.default_plan_months
                );
                println!(
                    "  Fuzzy skill extraction: {}",
                    config.analysis.fuzzy_extraction
                );
                println!("\nOutput:");
                println!("  Default format: {}", config.output.default_format);
                println!("  Detailed reports: {}", config.output.detailed);
                println!("  Colored output: {}", config.output.colored);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                println!("🔧 Setting {}: {}", key, value);
                let mut updated = config;
                updated.set(&key, &value)?;
                updated.save()?;
                println!(
                    "✅ Configuration saved to {}",
                    Config::config_path().display()
                );
            }
        },
    }

    Ok(())
}

/// Pick the output format from the CLI argument, falling back to the
/// configured default when none was given.
fn resolve_output_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(name) => cli::parse_output_format(name).map_err(JobFitError::InvalidInput),
        None => Ok(config.output.default_format),
    }
}

/// Render a report and either print it or write it to the requested file.
fn emit_report(
    report: &Report,
    format: OutputFormat,
    config: &Config,
    detailed: bool,
    save: Option<&Path>,
) -> Result<()> {
    let use_colors = config.output.colored && save.is_none();
    let generator =
        ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true, true);
    let rendered = generator.generate_report(report, &format)?;

    match save {
        Some(path) => {
            save_report_to_file(&rendered, path)?;
            println!("💾 Report saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Spinner shown while a batch run is matching.
fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
