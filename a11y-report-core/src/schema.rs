//! OpenAPI component document describing the report contract.

use utoipa::OpenApi;

use crate::domain::{ConformanceLevel, RuleMetadata, Severity};
use crate::report::Report;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "a11y-report",
        description = "Accessibility compliance report produced from ESLint jsx-a11y diagnostics."
    ),
    components(schemas(Report, RuleMetadata, Severity, ConformanceLevel))
)]
/// OpenAPI document for the report and rule catalog schemas.
pub struct ReportSchema;

/// Render the schema document as pretty JSON.
pub fn render_schema() -> Result<String, serde_json::Error> {
    ReportSchema::openapi().to_pretty_json()
}

#[cfg(test)]
mod tests {
    use super::{ReportSchema, render_schema};
    use utoipa::OpenApi;

    #[test]
    fn schema_includes_report_components() {
        let doc = ReportSchema::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("Report"));
        assert!(components.schemas.contains_key("RuleMetadata"));
        assert!(components.schemas.contains_key("Severity"));
    }

    #[test]
    fn rendered_schema_uses_contract_field_names() {
        let json = render_schema().expect("schema json");
        assert!(json.contains("\"overallScore\""));
        assert!(json.contains("\"wcagAA\""));
    }
}
