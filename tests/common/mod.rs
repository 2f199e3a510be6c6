#![allow(dead_code)]

use std::path::{Path, PathBuf};

use cucumber_matrix::cucumber::cucumber_model::{
    Feature, RunReport, Scenario, Step, StepResult, StepStatus,
};

// ============================================================================
// Report builders
// ============================================================================

pub fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn step(keyword: &str, name: &str, status: StepStatus) -> Step {
    Step {
        keyword: keyword.to_string(),
        name: Some(name.to_string()),
        result: StepResult {
            status,
            error_message: None,
            duration: None,
        },
    }
}

pub fn passed(name: &str) -> Step {
    step("Given ", name, StepStatus::Passed)
}

pub fn failed(name: &str, message: &str) -> Step {
    let mut step = step("Then ", name, StepStatus::Failed);
    step.result.error_message = Some(message.to_string());
    step
}

pub fn scenario(id: &str, line: u64, name: &str, steps: Vec<Step>) -> Scenario {
    Scenario {
        id: Some(id.to_string()),
        line: Some(line),
        name: name.to_string(),
        keyword: Some("Scenario".to_string()),
        kind: Some("scenario".to_string()),
        steps,
    }
}

pub fn feature(uri: &str, name: &str, elements: Vec<Scenario>) -> Feature {
    Feature {
        uri: uri.to_string(),
        name: Some(name.to_string()),
        description: None,
        elements,
    }
}

pub fn run(run_id: &str, features: Vec<Feature>) -> RunReport {
    RunReport {
        run_id: run_id.to_string(),
        source: PathBuf::from(format!("{}.json", run_id)),
        digest: String::new(),
        features,
        duplicate_of: None,
    }
}

/// F1/S1@10 with every step passing.
pub fn passing_run(run_id: &str) -> RunReport {
    run(
        run_id,
        vec![feature(
            "features/f1.feature",
            "F1",
            vec![scenario("f1;s1", 10, "S1", vec![passed("a step"), passed("another step")])],
        )],
    )
}

/// F1/S1@10 with the second step failing with `message`.
pub fn failing_run(run_id: &str, message: &str) -> RunReport {
    run(
        run_id,
        vec![feature(
            "features/f1.feature",
            "F1",
            vec![scenario("f1;s1", 10, "S1", vec![passed("a step"), failed("it works", message)])],
        )],
    )
}
