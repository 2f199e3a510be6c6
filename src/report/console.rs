use crate::merge::merge_model::Aggregate;

// ============================================================================
// Console reporter — per-run summary for the terminal
// ============================================================================

/// Format a per-run summary of the merged report.
///
/// Produces output like:
/// ```text
/// === Merged 2 runs: 3 features, 7 scenarios ===
///
/// ✓ chrome   7 passed, 0 failed, 0 not run
/// ✗ firefox  5 passed, 1 failed, 1 not run
///
/// === Results: 1 failed across 2 runs ===
/// ```
pub fn format_console_summary(aggregate: &Aggregate) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Merged {} runs: {} features, {} scenarios ===\n\n",
        aggregate.run_ids.len(),
        aggregate.feature_count(),
        aggregate.scenario_count()
    ));

    let summaries = aggregate.run_summaries();
    // `{:<width$}` pads by chars, so measure in chars too
    let width = summaries
        .iter()
        .map(|s| s.run_id.chars().count())
        .max()
        .unwrap_or(0);

    for summary in &summaries {
        let marker = if summary.failed == 0 {
            "\u{2713}"
        } else {
            "\u{2717}"
        };
        out.push_str(&format!(
            "{} {:<width$}  {} passed, {} failed, {} not run\n",
            marker,
            summary.run_id,
            summary.passed,
            summary.failed,
            summary.not_run,
            width = width
        ));
    }

    let failed: usize = summaries.iter().map(|s| s.failed).sum();
    out.push_str(&format!(
        "\n=== Results: {} failed across {} runs ===\n",
        failed,
        summaries.len()
    ));

    out
}
