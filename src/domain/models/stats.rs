#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;

use chrono::NaiveDateTime;
use serde_derive::Serialize;

use super::OptimizationLevel;
use super::SessionRecord;

/// Aggregated profile figures, derived purely from a cache snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total: usize,
    pub level1_count: usize,
    pub level2_count: usize,
    pub starred_count: usize,
    pub last_active: Option<String>,
}

impl HistoryStats {
    pub fn from_records(records: &[SessionRecord]) -> HistoryStats {
        let mut stats = HistoryStats {
            total: records.len(),
            ..HistoryStats::default()
        };

        for record in records {
            match record.level {
                OptimizationLevel::Level1 => stats.level1_count += 1,
                OptimizationLevel::Level2 => stats.level2_count += 1,
                OptimizationLevel::None => {}
            }

            if record.starred {
                stats.starred_count += 1;
            }
        }

        stats.last_active = records
            .iter()
            .filter_map(|record| {
                return parse_timestamp(&record.created_at)
                    .map(|parsed| return (parsed, record.created_at.to_string()));
            })
            .max_by_key(|(parsed, _)| return *parsed)
            .map(|(_, raw)| return raw);

        return stats;
    }
}

// The authority serializes naive UTC timestamps, with or without a
// fractional part.
fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    return NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").ok();
}
