use std::path::Path;

use crate::{
    cucumber::loader::load_runs,
    error::MergeError,
    merge::{aggregate::merge, merge_model::Aggregate},
};

pub mod cli;
pub mod cucumber;
pub mod error;
pub mod merge;
pub mod report;
pub mod trace;

/// Load every report with `extension` from `dir` and merge them, in file-name
/// order, into one aggregate.
pub fn merge_directory(dir: &Path, extension: &str) -> Result<Aggregate, MergeError> {
    let runs = load_runs(dir, extension)?;
    Ok(merge(runs))
}
