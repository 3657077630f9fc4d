#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OptimizationLevel {
    None,
    Level1,
    Level2,
}

impl OptimizationLevel {
    /// Accepts the wire spellings plus the `LEVEL_1`/`level_2` aliases the
    /// authority tolerates.
    pub fn parse(text: &str) -> Option<OptimizationLevel> {
        let normalized = text.trim().to_lowercase().replace('_', "");
        return OptimizationLevel::iter().find(|e| return e.to_string() == normalized);
    }
}

/// One persisted optimization run, exactly as the authority serializes it.
/// Records only enter the cache fully formed from a fetch or an analyse
/// response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub original_code: String,
    pub optimized_code: String,
    pub level: OptimizationLevel,
    pub changes: Vec<String>,
    pub original_analysis: Option<serde_json::Value>,
    pub optimized_analysis: Option<serde_json::Value>,
    pub error: Option<String>,
    pub starred: bool,
    pub created_at: String,
}

impl SessionRecord {
    /// Case-insensitive substring search over name, both code payloads and
    /// every change description. The query must already be lowercased.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return true;
        }
        if self.name.to_lowercase().contains(query_lower) {
            return true;
        }
        if self.original_code.to_lowercase().contains(query_lower) {
            return true;
        }
        if self.optimized_code.to_lowercase().contains(query_lower) {
            return true;
        }

        return self
            .changes
            .iter()
            .any(|change| return change.to_lowercase().contains(query_lower));
    }
}
