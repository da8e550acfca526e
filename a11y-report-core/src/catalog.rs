//! Static rule catalog mapping `jsx-a11y` rule ids to WCAG metadata.
//!
//! The table is pure data. New rules are added either to [`BUILTIN_RULES`] or
//! through a JSON extension file, and every consumer handles lookups that
//! miss via the fallback helpers here.

use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;

use crate::domain::{ConformanceLevel, RuleMetadata, Severity};
use crate::error::{A11yReportError, Result};
use crate::fs::FileSystem;

/// Namespace prefix of the accessibility rules the engine reasons about.
pub const A11Y_RULE_PREFIX: &str = "jsx-a11y/";
/// Conformance reference shown for rules missing from the catalog.
pub const UNKNOWN_CONFORMANCE: &str = "Unknown";
/// Description shown for rules missing from the catalog.
pub const UNKNOWN_DESCRIPTION: &str = "See ESLint documentation";

struct BuiltinRule {
    id: &'static str,
    wcag: &'static str,
    level: ConformanceLevel,
    severity: Severity,
    title: &'static str,
    description: &'static str,
    fix: &'static str,
}

const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        id: "jsx-a11y/alt-text",
        wcag: "1.1.1",
        level: ConformanceLevel::A,
        severity: Severity::Critical,
        title: "Images must have alt text",
        description: "Images need alternative text for screen readers",
        fix: "Add alt=\"description\" to <img> tags",
    },
    BuiltinRule {
        id: "jsx-a11y/anchor-has-content",
        wcag: "2.4.4",
        level: ConformanceLevel::A,
        severity: Severity::Critical,
        title: "Links must have content",
        description: "Links need visible text or accessible names",
        fix: "Add text content or aria-label to <a> tags",
    },
    BuiltinRule {
        id: "jsx-a11y/control-has-associated-label",
        wcag: "4.1.2",
        level: ConformanceLevel::A,
        severity: Severity::Critical,
        title: "Form controls need labels",
        description: "Interactive elements need accessible names",
        fix: "Add aria-label or associate with <label>",
    },
    BuiltinRule {
        id: "jsx-a11y/heading-has-content",
        wcag: "2.4.6",
        level: ConformanceLevel::AA,
        severity: Severity::Major,
        title: "Headings must have content",
        description: "Heading elements need descriptive text",
        fix: "Add text content to heading elements",
    },
    BuiltinRule {
        id: "jsx-a11y/label-has-associated-control",
        wcag: "1.3.1",
        level: ConformanceLevel::A,
        severity: Severity::Major,
        title: "Labels must be associated with controls",
        description: "Labels need to be connected to form inputs",
        fix: "Use htmlFor attribute or wrap input in label",
    },
    BuiltinRule {
        id: "jsx-a11y/click-events-have-key-events",
        wcag: "2.1.1",
        level: ConformanceLevel::A,
        severity: Severity::Major,
        title: "Clickable elements need keyboard support",
        description: "Elements with click handlers need keyboard events",
        fix: "Add onKeyDown/onKeyUp handlers",
    },
    BuiltinRule {
        id: "jsx-a11y/interactive-supports-focus",
        wcag: "2.1.1",
        level: ConformanceLevel::A,
        severity: Severity::Major,
        title: "Interactive elements must be focusable",
        description: "Interactive elements need to receive keyboard focus",
        fix: "Add tabIndex=\"0\" or use semantic HTML",
    },
    BuiltinRule {
        id: "jsx-a11y/no-noninteractive-element-interactions",
        wcag: "4.1.2",
        level: ConformanceLevel::A,
        severity: Severity::Minor,
        title: "Non-interactive elements with interactions",
        description: "Semantic elements should match their behavior",
        fix: "Use button/link elements for interactive content",
    },
    BuiltinRule {
        id: "jsx-a11y/html-has-lang",
        wcag: "3.1.1",
        level: ConformanceLevel::A,
        severity: Severity::Major,
        title: "Page must have language declared",
        description: "HTML element needs lang attribute",
        fix: "Add lang=\"en\" to <html> element",
    },
    BuiltinRule {
        id: "jsx-a11y/media-has-caption",
        wcag: "1.2.2",
        level: ConformanceLevel::A,
        severity: Severity::Major,
        title: "Media needs captions",
        description: "Video/audio content needs captions or transcripts",
        fix: "Add captions, transcripts, or muted attribute",
    },
];

static BUILTIN: LazyLock<RuleCatalog> = LazyLock::new(|| {
    RuleCatalog::from_rules(BUILTIN_RULES.iter().map(|rule| RuleMetadata {
        id: rule.id.to_string(),
        conformance_ref: rule.wcag.to_string(),
        conformance_level: rule.level,
        severity: rule.severity,
        title: rule.title.to_string(),
        description: rule.description.to_string(),
        fix: rule.fix.to_string(),
    }))
});

/// Whether `rule_id` belongs to the accessibility namespace.
pub fn is_a11y_rule(rule_id: &str) -> bool {
    rule_id.starts_with(A11Y_RULE_PREFIX)
}

/// Read-only lookup table from rule id to [`RuleMetadata`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: IndexMap<String, RuleMetadata>,
}

impl RuleCatalog {
    /// The built-in catalog, initialised once per process.
    pub fn builtin() -> &'static RuleCatalog {
        &BUILTIN
    }

    /// Build a catalog from rules; later duplicates replace earlier ones in place.
    pub fn from_rules(rules: impl IntoIterator<Item = RuleMetadata>) -> Self {
        let mut catalog = Self::default();
        catalog.extend(rules);
        catalog
    }

    /// Merge `rules` into the catalog.
    ///
    /// Known ids keep their position and take the new metadata; unknown ids
    /// are appended.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = RuleMetadata>) {
        for rule in rules {
            self.rules.insert(rule.id.clone(), rule);
        }
    }

    /// Look up a rule.
    pub fn get(&self, rule_id: &str) -> Option<&RuleMetadata> {
        self.rules.get(rule_id)
    }

    /// Severity of a rule, falling back to [`Severity::Minor`] for unknown ids.
    pub fn severity_of(&self, rule_id: &str) -> Severity {
        self.get(rule_id)
            .map(|rule| rule.severity)
            .unwrap_or(Severity::Minor)
    }

    /// Title of a rule, falling back to the raw id.
    pub fn title_of<'a>(&'a self, rule_id: &'a str) -> &'a str {
        self.get(rule_id)
            .map(|rule| rule.title.as_str())
            .unwrap_or(rule_id)
    }

    /// Conformance reference of a rule, falling back to [`UNKNOWN_CONFORMANCE`].
    pub fn conformance_ref_of(&self, rule_id: &str) -> &str {
        self.get(rule_id)
            .map(|rule| rule.conformance_ref.as_str())
            .unwrap_or(UNKNOWN_CONFORMANCE)
    }

    /// Description of a rule, falling back to [`UNKNOWN_DESCRIPTION`].
    pub fn description_of(&self, rule_id: &str) -> &str {
        self.get(rule_id)
            .map(|rule| rule.description.as_str())
            .unwrap_or(UNKNOWN_DESCRIPTION)
    }

    /// Suggested fix for a rule, falling back to a generic `Fix <id>`.
    pub fn fix_of(&self, rule_id: &str) -> String {
        match self.get(rule_id) {
            Some(rule) => rule.fix.clone(),
            None => format!("Fix {rule_id}"),
        }
    }

    /// Rules at the given conformance level, in catalog order.
    pub fn rules_at(&self, level: ConformanceLevel) -> impl Iterator<Item = &RuleMetadata> {
        self.rules
            .values()
            .filter(move |rule| rule.conformance_level == level)
    }

    /// All rules in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleMetadata> {
        self.rules.values()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Load the built-in catalog, merged with an optional JSON extension file.
pub fn load_catalog<F: FileSystem>(fs: &F, extension: Option<&Path>) -> Result<RuleCatalog> {
    let mut catalog = RuleCatalog::builtin().clone();
    if let Some(path) = extension {
        let rules = load_extension(fs, path)?;
        debug!(
            "merging {} catalog entries from {}",
            rules.len(),
            path.display()
        );
        catalog.extend(rules);
    }
    Ok(catalog)
}

/// Parse a catalog extension: a JSON array of rule metadata records.
pub fn load_extension<F: FileSystem>(fs: &F, path: &Path) -> Result<Vec<RuleMetadata>> {
    let contents = fs.read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|err| A11yReportError::malformed(path, err.to_string()))
}
