//! Scoring model: overall score, grade bands and WCAG level compliance.

use std::fmt;

use indexmap::IndexMap;

use crate::aggregate::SeverityCounts;
use crate::catalog::RuleCatalog;
use crate::domain::{ConformanceLevel, Severity};

/// Grade label used by reports produced on the failure path.
pub const ERROR_GRADE_LABEL: &str = "Error";

/// Grade band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// 95 and above.
    Excellent,
    /// 85 to 94.
    Good,
    /// 70 to 84.
    NeedsImprovement,
    /// 50 to 69.
    Poor,
    /// Below 50.
    CriticalIssues,
}

impl Grade {
    /// Map a score to its band. Each lower bound is inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            95.. => Self::Excellent,
            85..=94 => Self::Good,
            70..=84 => Self::NeedsImprovement,
            50..=69 => Self::Poor,
            _ => Self::CriticalIssues,
        }
    }

    /// Label shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "🏆 Excellent",
            Self::Good => "🟢 Good",
            Self::NeedsImprovement => "🟡 Needs Improvement",
            Self::Poor => "🟠 Poor",
            Self::CriticalIssues => "🔴 Critical Issues",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the overall score: 100 minus the weighted severity penalties,
/// floored at 0.
pub fn compute_score(counts: &SeverityCounts) -> u8 {
    let deductions = [
        (Severity::Critical, counts.critical),
        (Severity::Major, counts.major),
        (Severity::Minor, counts.minor),
    ]
    .into_iter()
    .fold(0u64, |acc, (severity, count)| {
        acc.saturating_add(severity.penalty().saturating_mul(count as u64))
    });

    100u64.saturating_sub(deductions) as u8
}

/// Percentage of catalog rules with zero violations, per conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compliance {
    /// Level A coverage, 0 to 100.
    pub level_a: u8,
    /// Level AA coverage, 0 to 100.
    pub level_aa: u8,
}

/// Compute per-level rule coverage for the rules violated in `by_rule`.
///
/// A rule counts as violated as soon as it has one occurrence; the number of
/// occurrences does not matter.
pub fn compute_compliance<V>(by_rule: &IndexMap<String, V>, catalog: &RuleCatalog) -> Compliance {
    Compliance {
        level_a: level_compliance(by_rule, catalog, ConformanceLevel::A),
        level_aa: level_compliance(by_rule, catalog, ConformanceLevel::AA),
    }
}

fn level_compliance<V>(
    by_rule: &IndexMap<String, V>,
    catalog: &RuleCatalog,
    level: ConformanceLevel,
) -> u8 {
    let (total, violated) = catalog
        .rules_at(level)
        .fold((0usize, 0usize), |(total, violated), rule| {
            let hit = usize::from(by_rule.contains_key(&rule.id));
            (total + 1, violated + hit)
        });
    if total == 0 {
        return 100;
    }

    let clean = total.saturating_sub(violated);
    let percent = (clean as f64 / total as f64) * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}
