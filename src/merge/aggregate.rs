use indexmap::IndexMap;
use tracing::debug;

use crate::cucumber::cucumber_model::RunReport;
use crate::merge::identity::{feature_key, scenario_key};
use crate::merge::merge_model::{
    Aggregate, FeatureGroup, IngestStats, ScenarioEntry, ScenarioRun,
};

// ============================================================================
// Aggregation engine
// ============================================================================

/// Merge runs, in the order given, into a single aggregate.
///
/// The supplied order becomes the column order of the result.
pub fn merge(runs: impl IntoIterator<Item = RunReport>) -> Aggregate {
    let mut aggregate = Aggregate::new();
    for run in runs {
        aggregate.ingest(run);
    }
    aggregate
}

impl Aggregate {
    /// Fold one run into the aggregate.
    ///
    /// - An unseen feature is appended with this run's name/description; a
    ///   known feature keeps the name/description it was first seen with.
    /// - An unseen scenario is appended to its feature with this run's name.
    /// - The run's record replaces any earlier record under the same run id,
    ///   so ingesting the same run twice changes nothing.
    pub fn ingest(&mut self, run: RunReport) -> IngestStats {
        let RunReport {
            run_id, features, ..
        } = run;

        if !self.run_ids.contains(&run_id) {
            self.run_ids.push(run_id.clone());
        }

        let mut stats = IngestStats {
            features: features.len(),
            scenarios: 0,
            new_features: 0,
            new_scenarios: 0,
        };

        for feature in features {
            let key = feature_key(&feature);
            let feature_index = match self.features.get_index_of(&key) {
                Some(index) => {
                    let group = &self.features[index];
                    if group.name != feature.name {
                        debug!(
                            feature = %key,
                            kept = ?group.name,
                            ignored = ?feature.name,
                            run = %run_id,
                            "feature name differs from first-seen name"
                        );
                    }
                    index
                }
                None => {
                    stats.new_features += 1;
                    let group = FeatureGroup {
                        name: feature.name.clone(),
                        description: feature.description.clone(),
                        scenarios: IndexMap::new(),
                    };
                    self.features.insert_full(key, group).0
                }
            };

            for scenario in feature.elements {
                stats.scenarios += 1;
                let key = scenario_key(&scenario);
                let group = &mut self.features[feature_index];

                let scenario_index = match group.scenarios.get_index_of(&key) {
                    Some(index) => index,
                    None => {
                        stats.new_scenarios += 1;
                        let entry = ScenarioEntry {
                            name: scenario.name.clone(),
                            runs: IndexMap::new(),
                        };
                        let index = group.scenarios.insert_full(key, entry).0;
                        self.encounter.push((feature_index, index));
                        index
                    }
                };

                group.scenarios[scenario_index]
                    .runs
                    .insert(run_id.clone(), ScenarioRun::from_steps(scenario.steps));
            }
        }

        debug!(
            run = %run_id,
            features = stats.features,
            scenarios = stats.scenarios,
            new_features = stats.new_features,
            new_scenarios = stats.new_scenarios,
            "ingested run"
        );
        stats
    }
}
