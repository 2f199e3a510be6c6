use cucumber_matrix::merge::aggregate::merge;
use cucumber_matrix::merge::merge_model::{Aggregate, RunStatus, ScenarioRun};

mod common;
use common::{failed, failing_run, feature, passed, passing_run, run, scenario};

fn scenario_names(aggregate: &Aggregate) -> Vec<&str> {
    aggregate.scenarios().map(|s| s.name.as_str()).collect()
}

// ============================================================================
// 1. Columns follow ingestion order
// ============================================================================

#[test]
fn run_ids_follow_supplied_order() {
    let aggregate = merge(vec![passing_run("firefox"), passing_run("chrome"), passing_run("safari")]);
    assert_eq!(aggregate.run_ids, vec!["firefox", "chrome", "safari"]);
}

#[test]
fn runs_without_scenarios_still_get_a_column() {
    let aggregate = merge(vec![passing_run("run1"), run("empty", vec![])]);
    assert_eq!(aggregate.run_ids, vec!["run1", "empty"]);
    assert_eq!(aggregate.scenario_count(), 1);
}

// ============================================================================
// 2. Feature identity
// ============================================================================

#[test]
fn same_uri_merges_into_one_feature() {
    let aggregate = merge(vec![passing_run("run1"), failing_run("run2", "boom")]);
    assert_eq!(aggregate.feature_count(), 1);
    assert_eq!(aggregate.scenario_count(), 1);
}

#[test]
fn first_seen_feature_name_wins() {
    let first = run(
        "run1",
        vec![feature("features/f.feature", "Original", vec![scenario("s", 1, "S", vec![passed("x")])])],
    );
    let mut renamed = feature("features/f.feature", "Renamed", vec![scenario("s", 1, "S", vec![passed("x")])]);
    renamed.description = Some("later description".into());
    let second = run("run2", vec![renamed]);

    let aggregate = merge(vec![first, second]);
    let group = &aggregate.features[0];
    assert_eq!(group.name.as_deref(), Some("Original"));
    assert!(group.description.is_none());
}

#[test]
fn feature_order_is_first_seen_across_runs() {
    let run1 = run(
        "run1",
        vec![feature("b.feature", "B", vec![scenario("b", 1, "B1", vec![passed("x")])])],
    );
    let run2 = run(
        "run2",
        vec![
            feature("a.feature", "A", vec![scenario("a", 1, "A1", vec![passed("x")])]),
            feature("b.feature", "B", vec![scenario("b", 1, "B1", vec![passed("x")])]),
        ],
    );

    let aggregate = merge(vec![run1, run2]);
    let uris: Vec<&str> = aggregate.features.keys().map(|k| k.as_str()).collect();
    assert_eq!(uris, vec!["b.feature", "a.feature"]);
}

// ============================================================================
// 3. Scenario identity
// ============================================================================

#[test]
fn same_id_different_line_stays_separate() {
    let r = run(
        "run1",
        vec![feature(
            "f.feature",
            "F",
            vec![
                scenario("f;outline", 20, "Outline row 1", vec![passed("x")]),
                scenario("f;outline", 21, "Outline row 2", vec![passed("x")]),
            ],
        )],
    );
    let aggregate = merge(vec![r]);
    assert_eq!(scenario_names(&aggregate), vec!["Outline row 1", "Outline row 2"]);
}

#[test]
fn scenario_first_seen_in_later_run_is_appended() {
    let run1 = run("run1", vec![feature("f.feature", "F", vec![scenario("s1", 1, "S1", vec![passed("x")])])]);
    let run2 = run(
        "run2",
        vec![feature(
            "f.feature",
            "F",
            vec![
                scenario("s2", 5, "S2", vec![passed("x")]),
                scenario("s1", 1, "S1", vec![passed("x")]),
            ],
        )],
    );
    let aggregate = merge(vec![run1, run2]);
    assert_eq!(scenario_names(&aggregate), vec!["S1", "S2"]);
}

#[test]
fn missing_run_has_no_record() {
    let run_a = passing_run("a");
    let run_b = run("b", vec![feature("other.feature", "Other", vec![scenario("o", 1, "O", vec![passed("x")])])]);
    let run_c = failing_run("c", "nope");

    let aggregate = merge(vec![run_a, run_b, run_c]);
    let s1 = &aggregate.features[0].scenarios[0];
    assert_eq!(s1.status_for("a"), Some(RunStatus::Passed));
    assert_eq!(s1.status_for("b"), None);
    assert_eq!(s1.status_for("c"), Some(RunStatus::Failed));
}

// ============================================================================
// 4. Verdicts
// ============================================================================

#[test]
fn failed_iff_any_step_failed() {
    assert_eq!(
        ScenarioRun::from_steps(vec![passed("a"), passed("b")]).status,
        RunStatus::Passed
    );
    assert_eq!(
        ScenarioRun::from_steps(vec![failed("a", "x"), passed("b"), passed("c")]).status,
        RunStatus::Failed
    );
    assert_eq!(ScenarioRun::from_steps(vec![]).status, RunStatus::Passed);
}

#[test]
fn skipped_steps_do_not_fail_a_scenario() {
    use cucumber_matrix::cucumber::cucumber_model::StepStatus;
    let steps = vec![
        common::step("Given ", "a", StepStatus::Passed),
        common::step("When ", "b", StepStatus::Skipped),
        common::step("Then ", "c", StepStatus::Undefined),
    ];
    assert_eq!(ScenarioRun::from_steps(steps).status, RunStatus::Passed);
}

// ============================================================================
// 5. Re-ingestion
// ============================================================================

#[test]
fn reingesting_a_run_replaces_its_record() {
    let mut aggregate = merge(vec![passing_run("run1")]);
    aggregate.ingest(failing_run("run1", "second attempt"));

    assert_eq!(aggregate.run_ids, vec!["run1"]);
    let s1 = &aggregate.features[0].scenarios[0];
    assert_eq!(s1.runs.len(), 1);
    assert_eq!(s1.status_for("run1"), Some(RunStatus::Failed));
}

#[test]
fn ingest_reports_new_entities() {
    let mut aggregate = Aggregate::new();
    let first = aggregate.ingest(passing_run("run1"));
    assert_eq!((first.features, first.scenarios), (1, 1));
    assert_eq!((first.new_features, first.new_scenarios), (1, 1));

    let second = aggregate.ingest(failing_run("run2", "x"));
    assert_eq!((second.new_features, second.new_scenarios), (0, 0));
}

// ============================================================================
// 6. Summaries
// ============================================================================

#[test]
fn run_summaries_count_each_column() {
    let run3 = run("run3", vec![feature("other.feature", "Other", vec![scenario("o", 1, "O", vec![passed("x")])])]);
    let aggregate = merge(vec![passing_run("run1"), failing_run("run2", "x"), run3]);

    let summaries = aggregate.run_summaries();
    assert_eq!(summaries.len(), 3);
    assert_eq!((summaries[0].passed, summaries[0].failed, summaries[0].not_run), (1, 0, 1));
    assert_eq!((summaries[1].passed, summaries[1].failed, summaries[1].not_run), (0, 1, 1));
    assert_eq!((summaries[2].passed, summaries[2].failed, summaries[2].not_run), (1, 0, 1));
    assert!(aggregate.has_failures());
}

#[test]
fn all_passing_has_no_failures() {
    let aggregate = merge(vec![passing_run("run1"), passing_run("run2")]);
    assert!(!aggregate.has_failures());
}
