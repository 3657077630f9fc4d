use anyhow::Result;
use test_utils::sessions_fixture;

use super::HistoryStats;
use super::SessionRecord;

#[test]
fn it_aggregates_counts_and_last_activity() -> Result<()> {
    let records: Vec<SessionRecord> = serde_json::from_str(sessions_fixture())?;

    let stats = HistoryStats::from_records(&records);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.level1_count, 1);
    assert_eq!(stats.level2_count, 1);
    assert_eq!(stats.starred_count, 1);
    assert_eq!(stats.last_active.as_deref(), Some("2024-03-27T14:02:11.482910"));

    return Ok(());
}

#[test]
fn it_returns_zeroes_for_an_empty_snapshot() {
    let stats = HistoryStats::from_records(&[]);

    assert_eq!(stats.total, 0);
    assert_eq!(stats.level1_count, 0);
    assert_eq!(stats.level2_count, 0);
    assert_eq!(stats.starred_count, 0);
    assert_eq!(stats.last_active, None);
}
