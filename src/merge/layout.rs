use crate::merge::identity::FeatureKey;
use crate::merge::merge_model::{Aggregate, FeatureGroup, GroupingMode, ScenarioEntry};

/// One row of the rendered matrix.
#[derive(Debug, Clone, Copy)]
pub enum Row<'a> {
    /// Group header: feature label plus one column header per run
    Feature(&'a FeatureKey, &'a FeatureGroup),

    Scenario(&'a ScenarioEntry),
}

/// Lay the aggregate out as rows under the given grouping policy.
pub fn rows(aggregate: &Aggregate, mode: GroupingMode) -> Vec<Row<'_>> {
    match mode {
        GroupingMode::ByFeature => rows_by_feature(aggregate),
        GroupingMode::ByScenarioStream => rows_by_scenario_stream(aggregate),
    }
}

fn rows_by_feature(aggregate: &Aggregate) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(aggregate.feature_count() + aggregate.scenario_count());
    for (key, group) in &aggregate.features {
        rows.push(Row::Feature(key, group));
        rows.extend(group.scenarios.values().map(Row::Scenario));
    }
    rows
}

fn rows_by_scenario_stream(aggregate: &Aggregate) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(aggregate.encounter.len() * 2);
    let mut current: Option<usize> = None;

    for &(feature_index, scenario_index) in &aggregate.encounter {
        let Some((key, group)) = aggregate.features.get_index(feature_index) else {
            continue;
        };
        if current != Some(feature_index) {
            rows.push(Row::Feature(key, group));
            current = Some(feature_index);
        }
        if let Some((_, scenario)) = group.scenarios.get_index(scenario_index) {
            rows.push(Row::Scenario(scenario));
        }
    }

    // Scenario-less features never appear in the encounter order.
    for (key, group) in &aggregate.features {
        if group.scenarios.is_empty() {
            rows.push(Row::Feature(key, group));
        }
    }

    rows
}
