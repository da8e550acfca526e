#![deny(missing_docs)]
//! Accessibility report core library.
//!
//! Turns ESLint `jsx-a11y` diagnostics into a compliance report: a score and
//! grade, WCAG level coverage, and Markdown sections listing what to fix.
//! Data flows from [`aggregate`] through [`score`] into [`report`], with the
//! [`catalog`] consulted at every stage.

pub mod aggregate;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod fs;
pub mod generator;
pub mod input;
pub mod report;
pub mod schema;
pub mod score;

pub use aggregate::{AggregatedState, FileIssue, RuleInstance, SeverityCounts, aggregate};
pub use catalog::{A11Y_RULE_PREFIX, RuleCatalog, is_a11y_rule, load_catalog};
pub use domain::{ConformanceLevel, LintFileResult, LintMessage, RuleMetadata, Severity};
pub use error::{A11yReportError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use generator::{ReportGenerator, analyze};
pub use input::{load_lint_results, parse_lint_results};
pub use report::{
    Report, render_catalog_markdown, render_json, render_markdown, render_status, render_text,
};
pub use schema::{ReportSchema, render_schema};
pub use score::{Compliance, Grade, compute_compliance, compute_score};
