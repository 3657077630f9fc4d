#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

use strum::EnumIter;
use strum::IntoEnumIterator;

use super::OptimizationLevel;
use super::SessionRecord;

/// Closed set of history filters offered by the view. `AnalysisOnly`
/// selects runs that were analysed without optimization (level "none").
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum HistoryFilter {
    All,
    Starred,
    Level1,
    Level2,
    AnalysisOnly,
}

impl HistoryFilter {
    pub fn parse(text: &str) -> Option<HistoryFilter> {
        let normalized = text.trim().to_lowercase();
        return HistoryFilter::iter().find(|e| return e.to_string() == normalized);
    }

    pub fn accepts(&self, record: &SessionRecord) -> bool {
        match self {
            HistoryFilter::All => return true,
            HistoryFilter::Starred => return record.starred,
            HistoryFilter::Level1 => return record.level == OptimizationLevel::Level1,
            HistoryFilter::Level2 => return record.level == OptimizationLevel::Level2,
            HistoryFilter::AnalysisOnly => return record.level == OptimizationLevel::None,
        }
    }
}
