use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Cucumber JSON report model
// ============================================================================

/// A feature as recorded in one run's Cucumber JSON document.
///
/// `elements` is required: a feature without a scenario list is a malformed
/// report and fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Location of the feature file; the feature's identity across runs
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,

    pub name: Option<String>,

    pub description: Option<String>,

    /// Scenarios (and backgrounds) in document order
    pub elements: Vec<Scenario>,
}

/// A scenario (or background) element within a feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Cucumber's scenario id, e.g. `login;successful-login`
    pub id: Option<String>,

    /// Source line of the scenario in its feature file
    pub line: Option<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    pub keyword: Option<String>,

    /// `scenario`, `background`, ...
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub steps: Vec<Step>,
}

/// One step of a scenario with its recorded outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    #[serde(default, deserialize_with = "null_as_default")]
    pub keyword: String,

    pub name: Option<String>,

    pub result: StepResult,
}

impl Step {
    pub fn failed(&self) -> bool {
        self.result.status == StepStatus::Failed
    }

    /// Keyword followed by the step text, e.g. `Given I am logged in`.
    ///
    /// Cucumber keywords carry their own trailing space, so the two parts are
    /// concatenated as-is.
    pub fn description(&self) -> String {
        match &self.name {
            Some(name) => format!("{}{}", self.keyword, name),
            None => self.keyword.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepResult {
    pub status: StepStatus,

    /// Present when `status` is `failed`
    pub error_message: Option<String>,

    /// Step duration as reported; integer nanoseconds or fractional seconds
    /// depending on the Cucumber implementation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<serde_json::Number>,
}

/// Step outcome. Anything Cucumber reports that is not listed here maps to
/// `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
    Ambiguous,
    #[serde(other)]
    Unknown,
}

// ============================================================================
// A single loaded run
// ============================================================================

/// One test run: a parsed report document plus the identity it was loaded
/// under.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// File name without the report extension; used as the column label
    pub run_id: String,

    /// File the report was read from
    pub source: PathBuf,

    /// SHA-1 of the raw file contents
    pub digest: String,

    pub features: Vec<Feature>,

    /// Id of an earlier run with byte-identical contents, if any
    pub duplicate_of: Option<String>,
}

impl RunReport {
    /// Total number of scenario elements across all features.
    pub fn scenario_count(&self) -> usize {
        self.features.iter().map(|f| f.elements.len()).sum()
    }
}

/// Optional text fields: `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
