use crate::error::MergeError;
use crate::merge::merge_model::Aggregate;

/// Serialize the merged report as pretty-printed JSON.
///
/// Features and scenarios keep their first-seen order; each scenario's `runs`
/// map holds only the runs that executed it.
pub fn generate_json_report(aggregate: &Aggregate) -> Result<String, MergeError> {
    let mut json = serde_json::to_string_pretty(aggregate)?;
    json.push('\n');
    Ok(json)
}
