use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cucumber::cucumber_model::{Feature, Scenario};

/// Identity of a feature across runs: its `uri`, verbatim.
///
/// Unrelated suites that happen to share feature paths will merge; inputs are
/// expected to be executions of the same suite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureKey(String);

/// Identity of a scenario within a feature: `<id>+line:<line>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioKey(String);

pub const LINE_SEPARATOR: &str = "+line:";

pub fn feature_key(feature: &Feature) -> FeatureKey {
    FeatureKey(feature.uri.clone())
}

/// Missing id or line degrade to empty text and `0`; scenarios whose keys then
/// collide are merged.
pub fn scenario_key(scenario: &Scenario) -> ScenarioKey {
    ScenarioKey(format!(
        "{}{}{}",
        scenario.id.as_deref().unwrap_or(""),
        LINE_SEPARATOR,
        scenario.line.unwrap_or(0)
    ))
}

impl FeatureKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ScenarioKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
