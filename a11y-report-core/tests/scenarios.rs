//! End-to-end behaviour of the report engine on representative lint outputs.

use std::path::{Path, PathBuf};

use a11y_report_core::{
    LintFileResult, LintMessage, Report, ReportGenerator, RuleCatalog, StdFileSystem, analyze,
    parse_lint_results, render_json,
};
use chrono::{DateTime, TimeZone, Utc};

fn instant(seconds: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, seconds)
        .single()
        .expect("valid instant")
}

fn message(rule_id: &str, line: u32) -> LintMessage {
    LintMessage {
        rule_id: Some(rule_id.to_string()),
        line: Some(line),
        column: Some(5),
        message: format!("{rule_id} violated"),
    }
}

fn file(path: &str, messages: Vec<LintMessage>) -> LintFileResult {
    LintFileResult {
        file_path: path.to_string(),
        messages,
    }
}

fn temp_path(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    std::env::temp_dir()
        .join(format!("a11y_report_scenarios_{nanos}"))
        .join(name)
}

#[test]
fn empty_input_is_a_perfect_report() {
    let report = analyze(&[], RuleCatalog::builtin(), instant(0));
    assert_eq!(report.overall_score, 100);
    assert_eq!(report.grade_label, "🏆 Excellent");
    assert_eq!(report.wcag_a, 100);
    assert_eq!(report.wcag_aa, 100);
    assert_eq!(report.issue_breakdown, "✅ No accessibility issues found!");
    assert_eq!(
        report.recommendations,
        "🎉 Great job! Your code follows accessibility best practices."
    );
    assert_eq!(report.detailed_issues, "✅ No issues to display!");
    assert!(report.error.is_none());
}

#[test]
fn single_missing_alt_text_is_needs_improvement() {
    let results = vec![file("/src/Gallery.js", vec![message("jsx-a11y/alt-text", 12)])];
    let report = analyze(&results, RuleCatalog::builtin(), instant(0));
    assert_eq!(report.critical, 1);
    assert_eq!(report.overall_score, 80);
    assert_eq!(report.grade_label, "🟡 Needs Improvement");
    assert!(report.wcag_a < 100);
    assert_eq!(report.wcag_aa, 100);
}

#[test]
fn unknown_namespaced_rule_counts_as_minor() {
    let results = vec![file(
        "/src/Form.js",
        vec![message("jsx-a11y/no-autofocus", 3)],
    )];
    let report = analyze(&results, RuleCatalog::builtin(), instant(0));
    assert_eq!(report.minor, 1);
    assert_eq!(report.overall_score, 95);
    assert_eq!(report.grade_label, "🏆 Excellent");
    assert!(report.issue_breakdown.contains("**jsx-a11y/no-autofocus**"));
    assert!(report.recommendations.contains("**Fix jsx-a11y/no-autofocus**"));
    assert!(report.error.is_none());
}

#[test]
fn missing_input_produces_error_report_on_disk() {
    let input = temp_path("missing-eslint-report.json");
    let output = input.with_file_name("accessibility-report.json");

    let generator = ReportGenerator::new(StdFileSystem::new());
    let report = generator.generate(&input);
    assert_eq!(report.overall_score, 0);
    assert_eq!(report.grade_label, "Error");
    assert!(report.error.as_deref().is_some_and(|error| !error.is_empty()));
    assert_eq!(
        (report.total_issues, report.critical, report.major, report.minor),
        (0, 0, 0, 0)
    );
    assert_eq!(report.files_affected, 0);

    generator.write(&report, &output).expect("write error report");
    let written = std::fs::read_to_string(&output).expect("read report");
    let parsed: Report = serde_json::from_str(&written).expect("report json");
    assert_eq!(parsed, report);

    std::fs::remove_dir_all(output.parent().expect("parent")).expect("cleanup");
}

#[test]
fn out_of_namespace_files_do_not_count() {
    let results = vec![
        file(
            "/src/Legacy.js",
            vec![LintMessage {
                rule_id: Some("react/prop-types".to_string()),
                line: Some(2),
                column: Some(1),
                message: "missing prop types".to_string(),
            }],
        ),
        file("/src/App.js", vec![message("jsx-a11y/html-has-lang", 1)]),
    ];
    let report = analyze(&results, RuleCatalog::builtin(), instant(0));
    assert_eq!(report.total_issues, 1);
    assert_eq!(report.files_affected, 1);
    assert!(!report.detailed_issues.contains("Legacy.js"));
}

#[test]
fn recommendations_never_exceed_five() {
    let messages = RuleCatalog::builtin()
        .iter()
        .enumerate()
        .map(|(index, rule)| message(&rule.id, index as u32 + 1))
        .collect();
    let report = analyze(
        &[file("/src/Everything.js", messages)],
        RuleCatalog::builtin(),
        instant(0),
    );
    assert_eq!(report.recommendations.matches("   └ Affects").count(), 5);
    assert_eq!(report.overall_score, 0);
    assert_eq!(report.grade_label, "🔴 Critical Issues");
}

#[test]
fn rerunning_is_identical_except_timestamp() {
    let raw = r#"[
        {"filePath": "/src/TestAccessibility.js", "messages": [
            {"ruleId": "jsx-a11y/alt-text", "line": 7, "column": 7, "message": "img elements must have an alt prop"},
            {"ruleId": "jsx-a11y/anchor-has-content", "line": 10, "column": 7, "message": "Anchors must have content"},
            {"ruleId": "jsx-a11y/heading-has-content", "line": 16, "column": 7, "message": "Headings must have content"},
            {"ruleId": "jsx-a11y/label-has-associated-control", "line": 19, "column": 7, "message": "A form label must be associated with a control."}
        ]},
        {"filePath": "/src/App.js", "messages": [
            {"ruleId": "jsx-a11y/control-has-associated-label", "line": 7, "column": 7, "message": "A control must be associated with a text label."}
        ]}
    ]"#;
    let results = parse_lint_results(raw, Path::new("eslint-report.json")).expect("parse");

    let first = analyze(&results, RuleCatalog::builtin(), instant(1));
    let mut second = analyze(&results, RuleCatalog::builtin(), instant(2));
    assert_ne!(first.timestamp, second.timestamp);
    second.timestamp = first.timestamp.clone();
    assert_eq!(
        render_json(&first).expect("json"),
        render_json(&second).expect("json")
    );

    assert_eq!(first.overall_score, 20);
    assert_eq!((first.critical, first.major), (3, 2));
    assert_eq!(first.files_affected, 2);
    assert_eq!(first.wcag_aa, 0);
}

#[test]
fn ignored_file_notices_do_not_fail_the_run() {
    let raw = r#"[
        {"filePath": "/repo/build/bundle.js", "messages": [
            {"fatal": false, "severity": 1, "message": "File ignored because of a matching ignore pattern. Use \"--no-ignore\" to override."}
        ]},
        {"filePath": "/repo/src/App.js", "messages": [
            {"ruleId": "jsx-a11y/alt-text", "severity": 2, "line": 6, "column": 7, "message": "img elements must have an alt prop"}
        ]}
    ]"#;
    let results = parse_lint_results(raw, Path::new("eslint-report.json")).expect("parse");
    let report = analyze(&results, RuleCatalog::builtin(), instant(0));
    assert!(report.error.is_none());
    assert_eq!(report.critical, 1);
    assert_eq!(report.overall_score, 80);
    assert_eq!(report.files_affected, 1);
    assert!(!report.detailed_issues.contains("bundle.js"));
}
