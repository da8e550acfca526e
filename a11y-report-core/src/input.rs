//! Loading of ESLint JSON results.

use std::path::Path;

use crate::catalog::is_a11y_rule;
use crate::domain::LintFileResult;
use crate::error::{A11yReportError, Result};
use crate::fs::FileSystem;

/// Read and parse the lint results stored at `path`.
pub fn load_lint_results<F: FileSystem>(fs: &F, path: &Path) -> Result<Vec<LintFileResult>> {
    let contents = fs.read_to_string(path)?;
    parse_lint_results(&contents, path)
}

/// Parse ESLint's JSON formatter output.
///
/// Fields the engine does not use are ignored; missing required fields or
/// values of the wrong type are rejected rather than coerced. Messages
/// outside the `jsx-a11y/` namespace may omit their location, as ESLint's
/// file-level notices do.
pub fn parse_lint_results(contents: &str, path: &Path) -> Result<Vec<LintFileResult>> {
    let results: Vec<LintFileResult> = serde_json::from_str(contents)
        .map_err(|err| A11yReportError::malformed(path, err.to_string()))?;
    validate_locations(&results, path)?;
    Ok(results)
}

fn validate_locations(results: &[LintFileResult], path: &Path) -> Result<()> {
    for result in results {
        for message in &result.messages {
            let Some(rule_id) = message.rule_id.as_deref().filter(|id| is_a11y_rule(id)) else {
                continue;
            };
            let missing = match (message.line, message.column) {
                (None, _) => "line",
                (_, None) => "column",
                _ => continue,
            };
            return Err(A11yReportError::malformed(
                path,
                format!("{rule_id} diagnostic in {} has no {missing}", result.file_path),
            ));
        }
    }
    Ok(())
}
