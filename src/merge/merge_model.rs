use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cucumber::cucumber_model::Step;
use crate::merge::identity::{FeatureKey, ScenarioKey};

// ============================================================================
// Merged report model
// ============================================================================

/// The unified view of every ingested run.
///
/// Features and scenarios iterate in first-seen order across the whole input
/// sequence (`IndexMap` preserves insertion order). `run_ids` is the column
/// order: the order runs were ingested.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Aggregate {
    pub run_ids: Vec<String>,

    pub features: IndexMap<FeatureKey, FeatureGroup>,

    /// Global scenario encounter order as (feature index, scenario index)
    #[serde(skip)]
    pub(crate) encounter: Vec<(usize, usize)>,
}

/// A logical feature. Name and description come from the first run that
/// reported it.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureGroup {
    pub name: Option<String>,

    pub description: Option<String>,

    pub scenarios: IndexMap<ScenarioKey, ScenarioEntry>,
}

/// A logical scenario and what each run recorded for it.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioEntry {
    pub name: String,

    /// Run id → that run's record. Runs that did not execute the scenario
    /// have no entry.
    pub runs: IndexMap<String, ScenarioRun>,
}

/// One run's execution of one scenario. Never modified after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRun {
    pub status: RunStatus,

    pub steps: Vec<Step>,
}

/// Verdict of a scenario in a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Passed,
    Failed,
}

/// How rows are laid out in the rendered matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingMode {
    /// Each feature header once, followed by all of its scenarios
    #[default]
    ByFeature,

    /// Scenarios in encounter order; a feature header is repeated whenever the
    /// feature changes from one row to the next
    ByScenarioStream,
}

/// Per-run scenario counts, for the console summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    pub passed: usize,
    pub failed: usize,
    pub not_run: usize,
}

/// What a single `ingest` call contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestStats {
    pub features: usize,
    pub scenarios: usize,
    pub new_features: usize,
    pub new_scenarios: usize,
}

impl ScenarioRun {
    /// A run failed if any of its steps failed.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        let status = if steps.iter().any(Step::failed) {
            RunStatus::Failed
        } else {
            RunStatus::Passed
        };
        Self { status, steps }
    }

    pub fn failed(&self) -> bool {
        self.status == RunStatus::Failed
    }
}

impl ScenarioEntry {
    /// `None` when the run did not execute this scenario.
    pub fn status_for(&self, run_id: &str) -> Option<RunStatus> {
        self.runs.get(run_id).map(|r| r.status)
    }
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn scenario_count(&self) -> usize {
        self.features.values().map(|f| f.scenarios.len()).sum()
    }

    /// Iterate every scenario, feature by feature.
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioEntry> {
        self.features.values().flat_map(|f| f.scenarios.values())
    }

    /// Whether any scenario failed in any run.
    pub fn has_failures(&self) -> bool {
        self.scenarios()
            .any(|s| s.runs.values().any(ScenarioRun::failed))
    }

    /// Passed/failed/not-run counts for each run, in column order.
    pub fn run_summaries(&self) -> Vec<RunSummary> {
        self.run_ids
            .iter()
            .map(|run_id| {
                let mut summary = RunSummary {
                    run_id: run_id.clone(),
                    passed: 0,
                    failed: 0,
                    not_run: 0,
                };
                for scenario in self.scenarios() {
                    match scenario.status_for(run_id) {
                        Some(RunStatus::Passed) => summary.passed += 1,
                        Some(RunStatus::Failed) => summary.failed += 1,
                        None => summary.not_run += 1,
                    }
                }
                summary
            })
            .collect()
    }
}
