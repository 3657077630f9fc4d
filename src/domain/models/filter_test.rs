use anyhow::Result;
use test_utils::sessions_fixture;

use super::HistoryFilter;
use super::SessionRecord;

#[test]
fn it_parses_filter_names() {
    assert_eq!(HistoryFilter::parse("all"), Some(HistoryFilter::All));
    assert_eq!(HistoryFilter::parse("starred"), Some(HistoryFilter::Starred));
    assert_eq!(HistoryFilter::parse("level1"), Some(HistoryFilter::Level1));
    assert_eq!(HistoryFilter::parse("Level2"), Some(HistoryFilter::Level2));
    assert_eq!(HistoryFilter::parse("analysis-only"), Some(HistoryFilter::AnalysisOnly));
    assert_eq!(HistoryFilter::parse("weekly"), None);
}

#[test]
fn it_accepts_records_per_filter() -> Result<()> {
    let records: Vec<SessionRecord> = serde_json::from_str(sessions_fixture())?;

    assert!(records.iter().all(|record| return HistoryFilter::All.accepts(record)));
    assert!(HistoryFilter::Starred.accepts(&records[1]));
    assert!(!HistoryFilter::Starred.accepts(&records[0]));
    assert!(HistoryFilter::Level1.accepts(&records[0]));
    assert!(HistoryFilter::Level2.accepts(&records[1]));
    assert!(HistoryFilter::AnalysisOnly.accepts(&records[2]));
    assert!(!HistoryFilter::AnalysisOnly.accepts(&records[1]));

    return Ok(());
}
