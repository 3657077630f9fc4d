#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::SessionRecord;

/// Category tag on an optimization finding. Tags the classifier does not
/// know fall through to `Unknown` rather than failing deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCategory {
    NestedLoop,
    LargeFunction,
    NestedBinaryOperation,
    #[serde(other)]
    Unknown,
}

/// The analyzer reports line locators either as a number or as free text
/// such as a range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineRef {
    Number(u64),
    Text(String),
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineRef::Number(n) => return write!(f, "{n}"),
            LineRef::Text(text) => return write!(f, "{text}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub line: LineRef,
    pub suggestion: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageCheck {
    pub accepted: bool,
    pub reason: String,
}

/// Raw diagnostic report as produced by the analysis pipeline, consumed
/// as-is. `syntax_error` uses the sentinel "OK" for no error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReport {
    #[serde(default)]
    pub language_check: Option<LanguageCheck>,
    #[serde(default)]
    pub syntax_error: Option<String>,
    #[serde(default)]
    pub security_issues: Vec<String>,
    #[serde(default)]
    pub runtime_risks: Vec<String>,
    #[serde(default)]
    pub optimization_findings: Option<Vec<Finding>>,
    #[serde(default)]
    pub aborted: Option<String>,
}

/// Result of submitting code for analysis. When the run passed the error
/// check the authority auto-saves it and echoes the persisted record back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyseResponse {
    #[serde(default)]
    pub passed_error_check: bool,
    #[serde(default)]
    pub original_code: String,
    #[serde(default)]
    pub optimized_code: String,
    #[serde(default)]
    pub changes: Vec<String>,
    #[serde(default)]
    pub error_report: RawReport,
    #[serde(default)]
    pub session: Option<SessionRecord>,
    #[serde(default)]
    pub error: Option<String>,
}
