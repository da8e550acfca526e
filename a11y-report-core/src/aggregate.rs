//! Grouping of raw lint diagnostics into severity counts, per-rule and
//! per-file buckets.

use indexmap::IndexMap;
use log::debug;

use crate::catalog::{RuleCatalog, is_a11y_rule};
use crate::domain::{LintFileResult, Severity};

/// Number of in-scope diagnostics per severity class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    /// Critical diagnostics.
    pub critical: usize,
    /// Major diagnostics.
    pub major: usize,
    /// Minor diagnostics, including unrecognized rules.
    pub minor: usize,
}

impl SeverityCounts {
    /// Count one diagnostic of `severity`.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::Major => self.major += 1,
            Severity::Minor => self.minor += 1,
        }
    }

    /// Total across all classes.
    pub fn total(&self) -> usize {
        self.critical + self.major + self.minor
    }
}

/// One occurrence of a rule, as listed under `byRule`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInstance {
    /// File the diagnostic was reported in.
    pub file: String,
    /// Line of the diagnostic.
    pub line: u32,
    /// Column of the diagnostic.
    pub column: u32,
    /// Linter message.
    pub message: String,
}

/// One diagnostic of a file, as listed under `byFile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIssue {
    /// Rule that fired.
    pub rule_id: String,
    /// Line of the diagnostic.
    pub line: u32,
    /// Linter message.
    pub message: String,
    /// Resolved severity class.
    pub severity: Severity,
}

/// Derived groupings for one run. Both maps keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedState {
    /// Counts per severity class.
    pub severity_counts: SeverityCounts,
    /// Occurrences grouped by rule id.
    pub by_rule: IndexMap<String, Vec<RuleInstance>>,
    /// Diagnostics grouped by file path; never holds an empty bucket.
    pub by_file: IndexMap<String, Vec<FileIssue>>,
}

impl AggregatedState {
    /// Total number of in-scope diagnostics.
    pub fn total_issues(&self) -> usize {
        self.severity_counts.total()
    }

    /// Number of files with at least one in-scope diagnostic.
    pub fn files_affected(&self) -> usize {
        self.by_file.len()
    }
}

/// Group the in-scope diagnostics of `results`.
///
/// Diagnostics without a rule id or outside the `jsx-a11y/` namespace are
/// dropped before anything is counted. A file is only added to `by_file`
/// once it is known to hold at least one in-scope diagnostic.
pub fn aggregate(results: &[LintFileResult], catalog: &RuleCatalog) -> AggregatedState {
    let mut state = AggregatedState::default();

    for result in results {
        let mut file_issues = Vec::new();
        for message in &result.messages {
            let Some(rule_id) = message.rule_id.as_deref().filter(|id| is_a11y_rule(id)) else {
                continue;
            };
            let severity = catalog.severity_of(rule_id);
            if catalog.get(rule_id).is_none() {
                debug!("rule {rule_id} is not in the catalog; treating it as {severity}");
            }
            state.severity_counts.record(severity);
            state
                .by_rule
                .entry(rule_id.to_string())
                .or_default()
                .push(RuleInstance {
                    file: result.file_path.clone(),
                    line: message.line.unwrap_or_default(),
                    column: message.column.unwrap_or_default(),
                    message: message.message.clone(),
                });
            file_issues.push(FileIssue {
                rule_id: rule_id.to_string(),
                line: message.line.unwrap_or_default(),
                message: message.message.clone(),
                severity,
            });
        }

        if !file_issues.is_empty() {
            state
                .by_file
                .entry(result.file_path.clone())
                .or_default()
                .extend(file_issues);
        }
    }

    debug!(
        "aggregated {} accessibility diagnostics across {} files",
        state.total_issues(),
        state.files_affected()
    );
    state
}
