use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cucumber::cucumber_model::{Feature, RunReport};
use crate::error::MergeError;

/// Default extension of Cucumber JSON report files.
pub const DEFAULT_EXTENSION: &str = "json";

/// Load every report with the given extension from `dir`.
///
/// Files are returned sorted by file name; this order becomes the column
/// order of the merged report. Sub-directories and files with any other
/// extension are ignored. The first unreadable or malformed file aborts the
/// load.
pub fn load_runs(dir: &Path, extension: &str) -> Result<Vec<RunReport>, MergeError> {
    let paths = discover_reports(dir, extension)?;
    info!(dir = %dir.display(), count = paths.len(), "discovered report files");

    let mut runs = Vec::with_capacity(paths.len());
    for path in paths {
        runs.push(load_run(&path)?);
    }

    mark_duplicates(&mut runs);
    Ok(runs)
}

/// List report files in `dir` with the given extension, sorted by name.
pub fn discover_reports(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, MergeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| MergeError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| MergeError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            paths.push(path);
        }
    }

    // read_dir order is platform-dependent
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Read and parse a single report file.
pub fn load_run(path: &Path) -> Result<RunReport, MergeError> {
    let content = std::fs::read_to_string(path).map_err(|e| MergeError::io(path, e))?;
    let run = parse_run(&run_id_for(path), path, &content)?;
    debug!(
        run = %run.run_id,
        features = run.features.len(),
        scenarios = run.scenario_count(),
        "loaded report"
    );
    Ok(run)
}

/// Parse a Cucumber JSON document into a run.
///
/// Only structural problems are fatal: a non-array document, or a feature or
/// scenario without its `elements`/`steps` list.
pub fn parse_run(run_id: &str, source: &Path, json: &str) -> Result<RunReport, MergeError> {
    let features: Vec<Feature> =
        serde_json::from_str(json).map_err(|e| MergeError::parse(source, e))?;
    Ok(RunReport {
        run_id: run_id.to_string(),
        source: source.to_path_buf(),
        digest: content_digest(json),
        features,
        duplicate_of: None,
    })
}

/// Run identifier for a report path: its file name without the extension.
pub fn run_id_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// SHA-1 hex digest of a report's raw contents.
pub fn content_digest(content: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Flag runs whose contents are byte-identical to an earlier run. This is
/// usually a copy/paste mistake in the input directory; such runs still merge
/// normally.
pub fn mark_duplicates(runs: &mut [RunReport]) {
    for i in 0..runs.len() {
        let earlier = runs[..i]
            .iter()
            .find(|r| r.digest == runs[i].digest)
            .map(|r| r.run_id.clone());

        if let Some(earlier) = earlier {
            warn!(
                run = %runs[i].run_id,
                duplicate_of = %earlier,
                "report contents are identical to an earlier run"
            );
            runs[i].duplicate_of = Some(earlier);
        }
    }
}
