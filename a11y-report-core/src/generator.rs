//! End-to-end report generation: load, aggregate, score, synthesize, persist.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::aggregate::aggregate;
use crate::catalog::{RuleCatalog, load_catalog};
use crate::domain::LintFileResult;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::input::load_lint_results;
use crate::report::{Report, render_json};

/// Build a report from already-loaded lint results.
///
/// Pure apart from the supplied timestamp: identical inputs produce identical
/// reports.
pub fn analyze(
    results: &[LintFileResult],
    catalog: &RuleCatalog,
    generated_at: DateTime<Utc>,
) -> Report {
    let state = aggregate(results, catalog);
    Report::from_state(&state, catalog, generated_at)
}

/// Generates accessibility reports from lint result files.
pub struct ReportGenerator<F: FileSystem> {
    fs: F,
    catalog_extension: Option<PathBuf>,
}

impl<F: FileSystem> ReportGenerator<F> {
    /// Create a generator that uses the built-in rule catalog.
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            catalog_extension: None,
        }
    }

    /// Create a generator that merges a JSON catalog extension into the
    /// built-in catalog on every run.
    pub fn with_catalog_extension(fs: F, extension: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            catalog_extension: Some(extension.into()),
        }
    }

    /// Generate a report for `input`, stamped with the current time.
    pub fn generate(&self, input: &Path) -> Report {
        self.generate_at(input, Utc::now())
    }

    /// Generate a report for `input`.
    ///
    /// Never fails: a fatal error yields [`Report::failed`] carrying the
    /// error message.
    pub fn generate_at(&self, input: &Path, generated_at: DateTime<Utc>) -> Report {
        match self.try_generate_at(input, generated_at) {
            Ok(report) => report,
            Err(err) => {
                warn!("accessibility report failed: {err}");
                Report::failed(err.to_string(), generated_at)
            }
        }
    }

    /// Generate a report for `input`, surfacing fatal errors to the caller.
    pub fn try_generate_at(&self, input: &Path, generated_at: DateTime<Utc>) -> Result<Report> {
        let catalog = load_catalog(&self.fs, self.catalog_extension.as_deref())?;
        let results = load_lint_results(&self.fs, input)?;
        debug!(
            "loaded {} lint file results from {}",
            results.len(),
            input.display()
        );
        Ok(analyze(&results, &catalog, generated_at))
    }

    /// Persist `report` as JSON at `output`, replacing any previous report atomically.
    pub fn write(&self, report: &Report, output: &Path) -> Result<()> {
        let mut contents = render_json(report).map_err(std::io::Error::from)?;
        contents.push('\n');
        self.fs.write_atomic(output, &contents)?;
        debug!("wrote accessibility report to {}", output.display());
        Ok(())
    }
}
