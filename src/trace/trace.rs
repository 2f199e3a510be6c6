use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cucumber::cucumber_model::RunReport;
use crate::merge::merge_model::IngestStats;

/// One line of the merge trace: what a single run contributed.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    /// Position of the run in the merge (column index)
    pub index: usize,

    pub run_id: String,
    pub source: String,
    pub digest: String,

    pub features: usize,
    pub scenarios: usize,

    pub new_features: usize,
    pub new_scenarios: usize,

    pub duplicate_of: Option<String>,
}

impl TraceEvent {
    pub fn now(index: usize, run: &RunReport) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            index,
            run_id: run.run_id.clone(),
            source: run.source.display().to_string(),
            digest: run.digest.clone(),
            features: 0,
            scenarios: 0,
            new_features: 0,
            new_scenarios: 0,
            duplicate_of: None,
        }
    }

    pub fn with_stats(mut self, stats: &IngestStats) -> Self {
        self.features = stats.features;
        self.scenarios = stats.scenarios;
        self.new_features = stats.new_features;
        self.new_scenarios = stats.new_scenarios;
        self
    }

    pub fn with_duplicate_of(mut self, run_id: impl ToString) -> Self {
        self.duplicate_of = Some(run_id.to_string());
        self
    }
}
