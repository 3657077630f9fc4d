#[cfg(test)]
#[path = "projector_test.rs"]
mod tests;

use crate::domain::models::HistoryFilter;
use crate::domain::models::SessionRecord;

use super::History;

struct Memo {
    revision: u64,
    filter: HistoryFilter,
    query: String,
    records: Vec<SessionRecord>,
}

/// Derives the display list from the cache as a pure function of
/// (snapshot, filter, query), memoized on the cache revision plus the
/// lowercased query so unchanged inputs reuse the previous derivation.
#[derive(Default)]
pub struct Projector {
    memo: Option<Memo>,
    derivations: u64,
}

impl Projector {
    pub fn new() -> Projector {
        return Projector::default();
    }

    /// Filter and search compose by intersection; ordering is inherited
    /// from the cache untouched.
    pub fn project(
        &mut self,
        history: &History,
        filter: HistoryFilter,
        query: &str,
    ) -> &[SessionRecord] {
        let query_lower = query.trim().to_lowercase();

        let fresh = match &self.memo {
            Some(memo) => {
                memo.revision == history.revision()
                    && memo.filter == filter
                    && memo.query == query_lower
            }
            None => false,
        };

        if !fresh {
            let records = history
                .records()
                .iter()
                .filter(|record| {
                    return filter.accepts(record) && record.matches_query(&query_lower);
                })
                .cloned()
                .collect::<Vec<SessionRecord>>();

            tracing::debug!(
                revision = history.revision(),
                filter = %filter,
                query = query_lower,
                matched = records.len(),
                "Recomputed history projection"
            );

            self.memo = Some(Memo {
                revision: history.revision(),
                filter,
                query: query_lower,
                records,
            });
            self.derivations += 1;
        }

        return &self.memo.as_ref().unwrap().records;
    }
}
