#[cfg(test)]
#[path = "advisor_test.rs"]
mod tests;

use crate::domain::models::Advisory;
use crate::domain::models::AdvisoryReport;
use crate::domain::models::RawReport;

use super::tips;

const SYNTAX_OK: &str = "OK";

/// Turns a raw analysis report into the advisory view: every finding gets
/// a line locator and a remediation tip, plus the blocking verdict.
///
/// Pure and deterministic. Language and syntax sections are dropped on
/// non-blocking reports; the three advisory categories survive regardless
/// so warnings-only rendering still has them.
pub fn classify(report: &RawReport) -> AdvisoryReport {
    let is_blocking = report
        .aborted
        .as_ref()
        .is_some_and(|reason| return !reason.trim().is_empty());

    let mut advisory = AdvisoryReport {
        is_blocking,
        ..AdvisoryReport::default()
    };

    if is_blocking {
        advisory.aborted = report.aborted.clone();
        advisory.language = report.language_check.clone();

        if let Some(text) = &report.syntax_error {
            if !text.trim().is_empty() && text != SYNTAX_OK {
                advisory.syntax = Some(Advisory {
                    text: text.to_string(),
                    line: tips::extract_line(text),
                    tip: tips::syntax_tip(text).to_string(),
                });
            }
        }
    }

    advisory.security = report
        .security_issues
        .iter()
        .map(|issue| {
            return Advisory {
                text: issue.to_string(),
                line: tips::extract_line(issue),
                tip: tips::security_tip(issue).to_string(),
            };
        })
        .collect();

    advisory.runtime = report
        .runtime_risks
        .iter()
        .map(|risk| {
            return Advisory {
                text: risk.to_string(),
                line: tips::extract_line(risk),
                tip: tips::runtime_tip(risk).to_string(),
            };
        })
        .collect();

    if let Some(findings) = &report.optimization_findings {
        advisory.optimization = findings
            .iter()
            .map(|finding| {
                return Advisory {
                    text: finding.suggestion.to_string(),
                    line: Some(finding.line.to_string()),
                    tip: tips::optimization_tip(finding.category).to_string(),
                };
            })
            .collect();
    }

    return advisory;
}
