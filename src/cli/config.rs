use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cucumber::loader::DEFAULT_EXTENSION;
use crate::merge::merge_model::GroupingMode;
use crate::report::html::DEFAULT_TITLE;
use crate::report::report_model::OutputFormat;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "cucumber-matrix",
    version,
    about = "Merge Cucumber JSON reports from several runs into one comparison matrix"
)]
pub struct Cli {
    /// Directory containing one Cucumber JSON report per run
    pub input: PathBuf,

    /// File to write the merged report to
    pub output: PathBuf,

    /// Row grouping: by-feature or by-scenario-stream
    #[arg(long, value_enum)]
    pub grouping: Option<GroupingMode>,

    /// Output format: html or json
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Extension of report files in the input directory
    #[arg(long)]
    pub extension: Option<String>,

    /// Title of the generated document
    #[arg(long)]
    pub title: Option<String>,

    /// Append a JSONL trace of every ingested run to this file
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Exit with status 1 if any scenario failed in any run
    #[arg(long)]
    pub fail_on_failures: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file (default: cucumber-matrix.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

pub const DEFAULT_CONFIG_FILE: &str = "cucumber-matrix.yaml";

/// Optional YAML config file: `cucumber-matrix.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub grouping: GroupingMode,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            grouping: GroupingMode::default(),
            format: OutputFormat::default(),
            extension: default_extension(),
            title: default_title(),
        }
    }
}

// Serde default helpers
fn default_extension() -> String { DEFAULT_EXTENSION.to_string() }
fn default_title() -> String { DEFAULT_TITLE.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed; a malformed file is reported as a warning.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Option resolution (merge CLI args with config file)
// ============================================================================

/// Fully resolved settings for one merge invocation.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub grouping: GroupingMode,
    pub format: OutputFormat,
    pub extension: String,
    pub title: String,
    pub trace: Option<PathBuf>,
}

/// Resolve settings: CLI > config file > defaults.
pub fn build_merge_options(cli: &Cli, config: &AppConfig) -> MergeOptions {
    MergeOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        grouping: cli.grouping.unwrap_or(config.report.grouping),
        format: cli.format.unwrap_or(config.report.format),
        extension: cli
            .extension
            .clone()
            .unwrap_or_else(|| config.report.extension.clone())
            .trim_start_matches('.')
            .to_string(),
        title: cli
            .title
            .clone()
            .unwrap_or_else(|| config.report.title.clone()),
        trace: cli.trace.clone(),
    }
}
