//! Configuration management for the matcher

use crate::error::{JobFitError, Result};
use crate::matching::scorer::WeightVector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub text_weight: f64,
    pub skills_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Months assumed for an improvement plan when the CLI gives none.
    pub default_plan_months: u32,
    /// Whether skill extraction also runs the fuzzy matching pass.
    pub fuzzy_extraction: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: OutputFormat,
    pub detailed: bool,
    pub colored: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "console" | "text" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(JobFitError::Configuration(format!(
                "Unknown output format: {} (expected console, json, or markdown)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Console => "console",
            Self::Json => "json",
            Self::Markdown => "markdown",
        };
        write!(f, "{}", name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                text_weight: 0.4,
                skills_weight: 0.3,
                experience_weight: 0.2,
                education_weight: 0.1,
            },
            analysis: AnalysisConfig {
                default_plan_months: 6,
                fuzzy_extraction: true,
            },
            output: OutputConfig {
                default_format: OutputFormat::Console,
                detailed: false,
                colored: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing a fresh default file on
    /// first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit path, as given by `--config`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JobFitError::Configuration(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| JobFitError::Configuration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| JobFitError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("jobfit")
            .join("config.toml")
    }

    /// Update one value addressed by a dotted key, e.g.
    /// `scoring.text_weight` or `output.default_format`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scoring.text_weight" => self.scoring.text_weight = parse_weight(key, value)?,
            "scoring.skills_weight" => self.scoring.skills_weight = parse_weight(key, value)?,
            "scoring.experience_weight" => {
                self.scoring.experience_weight = parse_weight(key, value)?
            }
            "scoring.education_weight" => self.scoring.education_weight = parse_weight(key, value)?,
            "analysis.default_plan_months" => {
                self.analysis.default_plan_months = value.parse().map_err(|_| {
                    JobFitError::Configuration(format!("Expected a whole number for {}: {}", key, value))
                })?
            }
            "analysis.fuzzy_extraction" => self.analysis.fuzzy_extraction = parse_bool(key, value)?,
            "output.default_format" => self.output.default_format = OutputFormat::from_name(value)?,
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.colored" => self.output.colored = parse_bool(key, value)?,
            other => {
                return Err(JobFitError::Configuration(format!(
                    "Unknown configuration key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// The scoring weights in the form the match scorer consumes.
    pub fn weight_vector(&self) -> WeightVector {
        WeightVector {
            text: self.scoring.text_weight,
            skills: self.scoring.skills_weight,
            experience: self.scoring.experience_weight,
            education: self.scoring.education_weight,
        }
    }
}

fn parse_weight(key: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value.parse().map_err(|_| {
        JobFitError::Configuration(format!("Expected a number for {}: {}", key, value))
    })?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(JobFitError::Configuration(format!(
            "Weight {} must be between 0 and 1, got {}",
            key, parsed
        )));
    }
    Ok(parsed)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| {
        JobFitError::Configuration(format!("Expected true or false for {}: {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = Config::default();
        let sum = config.scoring.text_weight
            + config.scoring.skills_weight
            + config.scoring.experience_weight
            + config.scoring.education_weight;

        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_weight() {
        let mut config = Config::default();

        config.set("scoring.skills_weight", "0.5").unwrap();

        assert_eq!(config.scoring.skills_weight, 0.5);
    }

    #[test]
    fn test_set_rejects_out_of_range_weight() {
        let mut config = Config::default();

        assert!(config.set("scoring.text_weight", "1.5").is_err());
        assert!(config.set("scoring.text_weight", "abc").is_err());
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();

        assert!(config.set("scoring.mystery", "0.1").is_err());
    }

    #[test]
    fn test_set_format_and_flags() {
        let mut config = Config::default();

        config.set("output.default_format", "json").unwrap();
        config.set("output.detailed", "true").unwrap();
        config.set("analysis.default_plan_months", "3").unwrap();

        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(config.output.detailed);
        assert_eq!(config.analysis.default_plan_months, 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.scoring.text_weight, config.scoring.text_weight);
        assert_eq!(restored.output.default_format, config.output.default_format);
    }
}
