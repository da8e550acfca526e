//! Domain entities for accessibility reporting.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity class of a rule, used for scoring weight and sort order.
///
/// Variants are declared most severe first so the derived ordering doubles
/// as the breakdown rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks access outright; heaviest penalty.
    Critical,
    /// Significant barrier.
    Major,
    /// Minor barrier; also the fallback for unrecognized rules.
    Minor,
}

impl Severity {
    /// Points deducted from the score for each diagnostic of this class.
    pub fn penalty(self) -> u64 {
        match self {
            Self::Critical => 20,
            Self::Major => 10,
            Self::Minor => 5,
        }
    }

    /// Marker used in the human-facing report sections.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::Major => "🟠",
            Self::Minor => "🟡",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// WCAG conformance level a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ConformanceLevel {
    /// Level A.
    A,
    /// Level AA.
    AA,
}

impl fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::AA => write!(f, "AA"),
        }
    }
}

/// Display and scoring metadata for a recognized rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RuleMetadata {
    /// Rule identifier, e.g. `jsx-a11y/alt-text`.
    pub id: String,
    /// WCAG success criterion, e.g. `1.1.1`.
    #[serde(rename = "wcag")]
    pub conformance_ref: String,
    /// Conformance level of the success criterion.
    #[serde(rename = "level")]
    pub conformance_level: ConformanceLevel,
    /// Severity class.
    pub severity: Severity,
    /// Short human title.
    pub title: String,
    /// One-line description of the barrier.
    pub description: String,
    /// Suggested fix.
    pub fix: String,
}

/// Lint results for one source file, as emitted by ESLint's JSON formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintFileResult {
    /// Path of the linted file.
    pub file_path: String,
    /// Diagnostics in detection order.
    pub messages: Vec<LintMessage>,
}

/// A single diagnostic reported by the linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// Rule that fired; absent for parser errors.
    #[serde(default)]
    pub rule_id: Option<String>,
    /// 1-based line; absent on file-level notices such as ignored files.
    #[serde(default)]
    pub line: Option<u32>,
    /// 1-based column.
    #[serde(default)]
    pub column: Option<u32>,
    /// Linter message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::{ConformanceLevel, LintFileResult, LintMessage, Severity};

    #[test]
    fn severity_orders_most_severe_first() {
        let mut ranks = vec![Severity::Minor, Severity::Critical, Severity::Major];
        ranks.sort();
        assert_eq!(
            ranks,
            vec![Severity::Critical, Severity::Major, Severity::Minor]
        );
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).expect("serialize");
        assert_eq!(json, "\"critical\"");
        assert_eq!(Severity::Major.to_string(), "major");
    }

    #[test]
    fn conformance_level_round_trips_names() {
        let level: ConformanceLevel = serde_json::from_str("\"AA\"").expect("parse");
        assert_eq!(level, ConformanceLevel::AA);
        assert_eq!(ConformanceLevel::A.to_string(), "A");
    }

    #[test]
    fn lint_result_accepts_null_rule_and_extra_fields() {
        let raw = r#"{
            "filePath": "/src/App.js",
            "errorCount": 1,
            "messages": [
                {"ruleId": null, "severity": 2, "line": 3, "column": 7, "message": "Parsing error"}
            ]
        }"#;
        let result: LintFileResult = serde_json::from_str(raw).expect("parse");
        assert_eq!(result.file_path, "/src/App.js");
        assert_eq!(result.messages[0].rule_id, None);
        assert_eq!(result.messages[0].line, Some(3));
    }

    #[test]
    fn file_level_notice_has_no_location() {
        let raw = r#"{"fatal": false, "severity": 1,
            "message": "File ignored because of a matching ignore pattern. Use \"--no-ignore\" to override."}"#;
        let message: LintMessage = serde_json::from_str(raw).expect("parse");
        assert_eq!(message.rule_id, None);
        assert_eq!((message.line, message.column), (None, None));
    }
}
