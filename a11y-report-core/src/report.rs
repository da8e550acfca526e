//! Report synthesis and rendering.
//!
//! [`Report`] is the data contract handed to downstream consumers. Its text
//! sections are Markdown fragments built from the aggregated groupings; the
//! `render_*` helpers wrap a finished report for JSON files, pull-request
//! comments, or the terminal.

use std::cmp::Reverse;
use std::fmt::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::aggregate::{AggregatedState, FileIssue, RuleInstance};
use crate::catalog::RuleCatalog;
use crate::score::{ERROR_GRADE_LABEL, Grade, compute_compliance, compute_score};

/// Maximum number of recommendations listed in a report.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Issue breakdown shown when no accessibility diagnostics were found.
pub const NO_ISSUES_BREAKDOWN: &str = "✅ No accessibility issues found!";
/// Recommendations shown when no accessibility diagnostics were found.
pub const NO_ISSUES_RECOMMENDATIONS: &str =
    "🎉 Great job! Your code follows accessibility best practices.";
/// Detailed issues shown when no accessibility diagnostics were found.
pub const NO_ISSUES_DETAILS: &str = "✅ No issues to display!";

/// Issue breakdown placeholder for failed runs.
pub const ERROR_BREAKDOWN: &str = "❌ Error analyzing results. Please check the ESLint output.";
/// Recommendations placeholder for failed runs.
pub const ERROR_RECOMMENDATIONS: &str = "🔧 Fix ESLint configuration and re-run the analysis.";
/// Detailed issues placeholder for failed runs.
pub const ERROR_DETAILS: &str = "No detailed analysis available due to error.";

/// Accessibility compliance report for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Overall score, 0-100.
    pub overall_score: u8,
    /// Grade label for the score, or `Error` for failed runs.
    pub grade_label: String,
    /// Number of accessibility diagnostics.
    pub total_issues: usize,
    /// Critical diagnostics.
    pub critical: usize,
    /// Major diagnostics.
    pub major: usize,
    /// Minor diagnostics.
    pub minor: usize,
    /// Files with at least one accessibility diagnostic.
    pub files_affected: usize,
    /// Percentage of level A rules without violations.
    pub wcag_a: u8,
    /// Percentage of level AA rules without violations.
    #[serde(rename = "wcagAA")]
    pub wcag_aa: u8,
    /// Per-rule breakdown (Markdown).
    pub issue_breakdown: String,
    /// Prioritized fixes (Markdown).
    pub recommendations: String,
    /// Per-file diagnostics (Markdown).
    pub detailed_issues: String,
    /// Failure message; only present on failed runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Generation instant, ISO-8601 UTC.
    pub timestamp: String,
}

impl Report {
    /// Score an aggregated run and synthesize its sections.
    pub fn from_state(
        state: &AggregatedState,
        catalog: &RuleCatalog,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let overall_score = compute_score(&state.severity_counts);
        let compliance = compute_compliance(&state.by_rule, catalog);
        Self {
            overall_score,
            grade_label: Grade::from_score(overall_score).label().to_string(),
            total_issues: state.total_issues(),
            critical: state.severity_counts.critical,
            major: state.severity_counts.major,
            minor: state.severity_counts.minor,
            files_affected: state.files_affected(),
            wcag_a: compliance.level_a,
            wcag_aa: compliance.level_aa,
            issue_breakdown: render_issue_breakdown(&state.by_rule, catalog),
            recommendations: render_recommendations(&state.by_rule, catalog),
            detailed_issues: render_detailed_issues(&state.by_file, catalog),
            error: None,
            timestamp: format_timestamp(generated_at),
        }
    }

    /// Create the degenerate report for a failed run.
    pub fn failed(error: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            overall_score: 0,
            grade_label: ERROR_GRADE_LABEL.to_string(),
            total_issues: 0,
            critical: 0,
            major: 0,
            minor: 0,
            files_affected: 0,
            wcag_a: 0,
            wcag_aa: 0,
            issue_breakdown: ERROR_BREAKDOWN.to_string(),
            recommendations: ERROR_RECOMMENDATIONS.to_string(),
            detailed_issues: ERROR_DETAILS.to_string(),
            error: Some(error.into()),
            timestamp: format_timestamp(generated_at),
        }
    }

    /// Whether this report was produced on the failure path.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Format an instant the way the report stores it, e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Order rules by severity, then by descending occurrence count. Ties keep
/// the order of `by_rule`.
pub fn rank_rules<'a>(
    by_rule: &'a IndexMap<String, Vec<RuleInstance>>,
    catalog: &RuleCatalog,
) -> Vec<(&'a str, &'a [RuleInstance])> {
    let mut ranked: Vec<(&str, &[RuleInstance])> = by_rule
        .iter()
        .map(|(rule_id, instances)| (rule_id.as_str(), instances.as_slice()))
        .collect();
    ranked.sort_by_key(|(rule_id, instances)| {
        (catalog.severity_of(rule_id), Reverse(instances.len()))
    });
    ranked
}

/// Render one line pair per violated rule, most severe first.
pub fn render_issue_breakdown(
    by_rule: &IndexMap<String, Vec<RuleInstance>>,
    catalog: &RuleCatalog,
) -> String {
    if by_rule.is_empty() {
        return NO_ISSUES_BREAKDOWN.to_string();
    }

    let mut output = String::new();
    for (rule_id, instances) in rank_rules(by_rule, catalog) {
        let count = instances.len();
        let _ = writeln!(
            output,
            "\n{} **{}** ({} {})",
            catalog.severity_of(rule_id).icon(),
            catalog.title_of(rule_id),
            count,
            plural(count, "issue", "issues")
        );
        let _ = writeln!(
            output,
            "   └ WCAG {} • {}",
            catalog.conformance_ref_of(rule_id),
            catalog.description_of(rule_id)
        );
    }
    output
}

/// Render the top [`MAX_RECOMMENDATIONS`] fixes in breakdown order.
pub fn render_recommendations(
    by_rule: &IndexMap<String, Vec<RuleInstance>>,
    catalog: &RuleCatalog,
) -> String {
    if by_rule.is_empty() {
        return NO_ISSUES_RECOMMENDATIONS.to_string();
    }

    let mut output = String::new();
    let ranked = rank_rules(by_rule, catalog);
    for (position, (rule_id, instances)) in ranked.into_iter().take(MAX_RECOMMENDATIONS).enumerate()
    {
        let count = instances.len();
        let _ = writeln!(output, "\n{}. **{}**", position + 1, catalog.fix_of(rule_id));
        let _ = writeln!(
            output,
            "   └ Affects {} {}",
            count,
            plural(count, "location", "locations")
        );
    }
    output
}

/// Render diagnostics grouped by file, with fix hints for recognized rules.
pub fn render_detailed_issues(
    by_file: &IndexMap<String, Vec<FileIssue>>,
    catalog: &RuleCatalog,
) -> String {
    if by_file.is_empty() {
        return NO_ISSUES_DETAILS.to_string();
    }

    let mut output = String::new();
    for (file_path, issues) in by_file {
        let _ = writeln!(output, "\n### 📁 {}", file_name(file_path));
        for issue in issues {
            let _ = writeln!(
                output,
                "- **Line {}**: {} {}",
                issue.line,
                issue.severity.icon(),
                issue.message
            );
            if let Some(rule) = catalog.get(&issue.rule_id) {
                let _ = writeln!(output, "  └ *{}*", rule.fix);
            }
        }
    }
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

/// Short human summary of a report, one line per fact.
pub fn render_status(report: &Report) -> String {
    if let Some(error) = &report.error {
        return format!("❌ Error generating accessibility report: {error}\n");
    }
    let mut output = String::new();
    let _ = writeln!(output, "✅ Accessibility report generated");
    let _ = writeln!(
        output,
        "📊 Overall Score: {}/100 ({})",
        report.overall_score, report.grade_label
    );
    let _ = writeln!(
        output,
        "🔍 Issues Found: {} (Critical: {}, Major: {}, Minor: {})",
        report.total_issues, report.critical, report.major, report.minor
    );
    output
}

/// Render a report as a Markdown document, e.g. for a pull-request comment.
pub fn render_markdown(report: &Report) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# ♿ Accessibility Report\n");
    if let Some(error) = &report.error {
        let _ = writeln!(output, "> ❌ **Error:** {error}\n");
    }
    let _ = writeln!(output, "| Metric | Value |");
    let _ = writeln!(output, "| --- | --- |");
    let _ = writeln!(
        output,
        "| Overall score | {}/100 ({}) |",
        report.overall_score, report.grade_label
    );
    let _ = writeln!(
        output,
        "| Issues | {} (Critical: {}, Major: {}, Minor: {}) |",
        report.total_issues, report.critical, report.major, report.minor
    );
    let _ = writeln!(output, "| Files affected | {} |", report.files_affected);
    let _ = writeln!(output, "| WCAG Level A | {}% |", report.wcag_a);
    let _ = writeln!(output, "| WCAG Level AA | {}% |", report.wcag_aa);
    let _ = writeln!(output);
    append_section(&mut output, "Issue Breakdown", &report.issue_breakdown);
    append_section(&mut output, "Recommendations", &report.recommendations);
    append_section(&mut output, "Detailed Issues", &report.detailed_issues);
    let _ = writeln!(output, "_Generated at {}_", report.timestamp);
    output
}

/// Render a report for the terminal: the status summary followed by the sections.
pub fn render_text(report: &Report) -> String {
    let mut output = render_status(report);
    if !report.is_error() {
        let _ = writeln!(
            output,
            "📁 Files Affected: {} | WCAG A: {}% | WCAG AA: {}%",
            report.files_affected, report.wcag_a, report.wcag_aa
        );
    }
    let _ = writeln!(output);
    append_section(&mut output, "Issue Breakdown", &report.issue_breakdown);
    append_section(&mut output, "Recommendations", &report.recommendations);
    append_section(&mut output, "Detailed Issues", &report.detailed_issues);
    output
}

/// Render the rule catalog as a Markdown table.
pub fn render_catalog_markdown(catalog: &RuleCatalog) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "| Rule | WCAG | Level | Severity | Fix |");
    let _ = writeln!(output, "| --- | --- | --- | --- | --- |");
    for rule in catalog.iter() {
        let _ = writeln!(
            output,
            "| `{}` | {} | {} | {} {} | {} |",
            rule.id,
            rule.conformance_ref,
            rule.conformance_level,
            rule.severity.icon(),
            rule.severity,
            rule.fix
        );
    }
    output
}

fn append_section(output: &mut String, title: &str, body: &str) {
    let _ = writeln!(output, "## {title}");
    let _ = writeln!(output, "{}\n", body.trim_end());
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn file_name(file_path: &str) -> String {
    Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string())
}
