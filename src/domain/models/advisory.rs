use serde_derive::Serialize;

use super::LanguageCheck;

/// One classified diagnostic: the original text, the best-effort line
/// locator, and the remediation tip resolved from the rule tables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Advisory {
    pub text: String,
    pub line: Option<String>,
    pub tip: String,
}

/// Classifier output for a single analysis result. Recomputed fresh per
/// result, never cached or merged across results.
///
/// The language and syntax sections are only populated on a blocking
/// report; security, runtime and optimization advisories are kept
/// regardless so they can render in warnings-only mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AdvisoryReport {
    pub is_blocking: bool,
    pub aborted: Option<String>,
    pub language: Option<LanguageCheck>,
    pub syntax: Option<Advisory>,
    pub security: Vec<Advisory>,
    pub runtime: Vec<Advisory>,
    pub optimization: Vec<Advisory>,
}

impl AdvisoryReport {
    pub fn advisory_count(&self) -> usize {
        return self.security.len() + self.runtime.len() + self.optimization.len();
    }

    /// True when there is nothing at all to render. An empty report is a
    /// valid value, not an error.
    pub fn is_empty(&self) -> bool {
        return !self.is_blocking
            && self.language.is_none()
            && self.syntax.is_none()
            && self.advisory_count() == 0;
    }
}
