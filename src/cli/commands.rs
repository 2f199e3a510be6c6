use tracing::info;

use crate::cli::config::MergeOptions;
use crate::cucumber::cucumber_model::RunReport;
use crate::cucumber::loader::load_runs;
use crate::error::MergeError;
use crate::merge::aggregate::merge;
use crate::merge::merge_model::Aggregate;
use crate::report::html::{HtmlOptions, generate_html_report};
use crate::report::json::generate_json_report;
use crate::report::report_model::OutputFormat;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// merge command
// ============================================================================

/// Load every report in the input directory, merge them, and write the
/// rendered result to the output file.
///
/// The output file is only written once rendering has fully succeeded, and the
/// trace file only once the output is on disk, so a failed merge leaves
/// neither behind.
pub fn cmd_merge(options: &MergeOptions) -> Result<Aggregate, MergeError> {
    let runs = load_runs(&options.input, &options.extension)?;

    let mut tracer = match &options.trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };
    let aggregate = merge_traced(runs, &mut tracer);

    info!(
        runs = aggregate.run_ids.len(),
        features = aggregate.feature_count(),
        scenarios = aggregate.scenario_count(),
        "merged reports"
    );

    let content = render(&aggregate, options)?;
    std::fs::write(&options.output, content).map_err(|e| MergeError::io(&options.output, e))?;
    info!(output = %options.output.display(), format = ?options.format, "wrote report");

    tracer.flush();

    Ok(aggregate)
}

/// Render the aggregate in the requested format.
pub fn render(aggregate: &Aggregate, options: &MergeOptions) -> Result<String, MergeError> {
    match options.format {
        OutputFormat::Html => {
            let html_options = HtmlOptions {
                title: options.title.clone(),
                grouping: options.grouping,
            };
            Ok(generate_html_report(aggregate, &html_options))
        }
        OutputFormat::Json => generate_json_report(aggregate),
    }
}

/// Merge runs in order, recording one trace event per run.
fn merge_traced(runs: Vec<RunReport>, tracer: &mut TraceLogger) -> Aggregate {
    if !tracer.is_enabled() {
        return merge(runs);
    }

    let mut aggregate = Aggregate::new();
    for (index, run) in runs.into_iter().enumerate() {
        let mut event = TraceEvent::now(index, &run);
        if let Some(earlier) = &run.duplicate_of {
            event = event.with_duplicate_of(earlier);
        }

        let stats = aggregate.ingest(run);
        tracer.record(event.with_stats(&stats));
    }
    aggregate
}
