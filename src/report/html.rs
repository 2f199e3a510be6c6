use crate::cucumber::cucumber_model::StepStatus;
use crate::merge::identity::FeatureKey;
use crate::merge::layout::{Row, rows};
use crate::merge::merge_model::{
    Aggregate, FeatureGroup, GroupingMode, RunStatus, ScenarioEntry, ScenarioRun,
};

// ============================================================================
// HTML reporter — cross-run comparison matrix
// ============================================================================

const REPORT_CSS: &str = include_str!("../../assets/report.css");
const TOOLTIP_CSS: &str = include_str!("../../assets/tooltip.css");

pub const DEFAULT_TITLE: &str = "Cucumber Report Matrix";

/// Rendering options for the HTML matrix.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Document title and page heading
    pub title: String,

    pub grouping: GroupingMode,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            grouping: GroupingMode::ByFeature,
        }
    }
}

/// Generate a self-contained HTML matrix of every scenario against every run.
///
/// Layout:
/// - one table
/// - a header row per feature: feature name (and description), then one
///   column header per run id
/// - a row per scenario: scenario name, then one status cell per run in the
///   same order as the header
/// - failed cells reveal the run's step list (with error messages) on hover
/// - both bundled stylesheets are inlined
///
/// Output depends only on the aggregate and the options, so identical input
/// renders byte-identical documents.
pub fn generate_html_report(aggregate: &Aggregate, options: &HtmlOptions) -> String {
    let mut table = String::new();
    for row in rows(aggregate, options.grouping) {
        match row {
            Row::Feature(key, group) => {
                table.push_str(&feature_row(key, group, &aggregate.run_ids))
            }
            Row::Scenario(scenario) => {
                table.push_str(&scenario_row(scenario, &aggregate.run_ids))
            }
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
{report_css}</style>
<style>
{tooltip_css}</style>
</head>
<body>
<h1>{title}</h1>
<table>
{table}</table>
</body>
</html>
"#,
        title = escape_html(&options.title),
        report_css = REPORT_CSS,
        tooltip_css = TOOLTIP_CSS,
        table = table,
    )
}

/// Label for a feature header; falls back to the uri when the feature has no name.
fn feature_label<'a>(key: &'a FeatureKey, group: &'a FeatureGroup) -> &'a str {
    match group.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => key.as_str(),
    }
}

fn feature_row(key: &FeatureKey, group: &FeatureGroup, run_ids: &[String]) -> String {
    let mut html = format!(
        "<tr class=\"feature-row\"><th>{}",
        escape_html(feature_label(key, group))
    );
    if let Some(description) = group.description.as_deref().filter(|d| !d.trim().is_empty()) {
        html.push_str(&format!(
            "<div class=\"feature-description\">{}</div>",
            escape_html(description)
        ));
    }
    html.push_str("</th>");
    for run_id in run_ids {
        html.push_str(&format!("<th class=\"report-id\">{}</th>", escape_html(run_id)));
    }
    html.push_str("</tr>\n");
    html
}

fn scenario_row(scenario: &ScenarioEntry, run_ids: &[String]) -> String {
    let mut html = format!(
        "<tr class=\"scenario-row\"><td class=\"scenario-description\">{}</td>",
        escape_html(&scenario.name)
    );
    for run_id in run_ids {
        match scenario.runs.get(run_id) {
            Some(run) => html.push_str(&status_cell(run)),
            None => html.push_str("<td></td>"),
        }
    }
    html.push_str("</tr>\n");
    html
}

fn status_cell(run: &ScenarioRun) -> String {
    match run.status {
        RunStatus::Passed => {
            "<td class=\"scenario-status scenario-status-passed\">&#10003;</td>".to_string()
        }
        RunStatus::Failed => format!(
            "<td class=\"scenario-status scenario-status-failed tooltip\">&#10008;<div class=\"tooltiptext\">{}</div></td>",
            step_list(run)
        ),
    }
}

/// Every step in original order; failed steps are followed by their error message.
fn step_list(run: &ScenarioRun) -> String {
    let lines: Vec<String> = run
        .steps
        .iter()
        .map(|step| {
            let class = match step.result.status {
                StepStatus::Passed => "scenario-status-passed",
                StepStatus::Failed => "scenario-status-failed",
                _ => "scenario-status-other",
            };
            let mut line = format!(
                "<span class=\"{}\">{}</span>",
                class,
                escape_html(&step.description())
            );
            if step.failed() {
                line.push_str(&format!(
                    "<br><span class=\"step-error\">{}</span>",
                    escape_html(step.result.error_message.as_deref().unwrap_or(""))
                ));
            }
            line
        })
        .collect();

    format!("<div>{}</div>", lines.join("<br>"))
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
