#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use futures::future::join_all;

use crate::domain::models::AnalyseResponse;
use crate::domain::models::AuthorityBox;
use crate::domain::models::HistoryError;
use crate::domain::models::HistoryStats;
use crate::domain::models::OptimizationLevel;
use crate::domain::models::SessionRecord;

/// Write-through cache over the owner's session records. Local state never
/// leads the authority: every mutation is confirmed remotely first and
/// committed here in a single assignment afterwards, so no caller can
/// observe a half-applied change.
///
/// Ordering is newest-first as delivered by the authority and is preserved
/// across mutations; only `analyse` inserts, and it prepends.
pub struct History {
    authority: AuthorityBox,
    records: Vec<SessionRecord>,
    last_error: Option<String>,
    revision: u64,
}

impl History {
    pub fn new(authority: AuthorityBox) -> History {
        return History {
            authority,
            records: vec![],
            last_error: None,
            revision: 0,
        };
    }

    pub fn records(&self) -> &[SessionRecord] {
        return &self.records;
    }

    /// The last load failure, kept for the top-level banner. Mutation
    /// failures are reported to their callers instead and never land here.
    pub fn last_error(&self) -> Option<&str> {
        return self.last_error.as_deref();
    }

    /// Bumped on every committed change. Memoization key for projections.
    pub fn revision(&self) -> u64 {
        return self.revision;
    }

    pub fn stats(&self) -> HistoryStats {
        return HistoryStats::from_records(&self.records);
    }

    fn commit(&mut self) {
        self.revision += 1;
    }

    /// Replaces the cache wholesale from the authority. On failure the
    /// cache is left empty and the error is surfaced for display; there is
    /// no automatic retry.
    pub async fn load(&mut self) -> Result<(), HistoryError> {
        match self.authority.list_sessions().await {
            Ok(records) => {
                self.records = records;
                self.last_error = None;
                self.commit();
                return Ok(());
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load session history");
                self.records = vec![];
                self.last_error = Some(err.to_string());
                self.commit();
                return Err(err);
            }
        }
    }

    /// Renames a record after the authority confirms. Empty, unchanged and
    /// unknown-id renames are rejected locally without a network call.
    pub async fn rename(&mut self, id: &str, new_name: &str) -> Result<(), HistoryError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(HistoryError::ValidationRejected(
                "session name cannot be empty".to_string(),
            ));
        }

        let record = match self.records.iter().find(|record| return record.id == id) {
            Some(record) => record,
            None => {
                return Err(HistoryError::ValidationRejected(format!(
                    "no session with id {id}"
                )));
            }
        };
        if record.name == trimmed {
            return Err(HistoryError::ValidationRejected(
                "session name is unchanged".to_string(),
            ));
        }

        self.authority.rename_session(id, trimmed).await?;

        if let Some(record) = self.records.iter_mut().find(|record| return record.id == id) {
            record.name = trimmed.to_string();
            self.commit();
        }

        return Ok(());
    }

    /// Adopts the authority's returned value rather than flipping blindly,
    /// so overlapping toggles settle on what the authority last stored.
    pub async fn toggle_star(&mut self, id: &str) -> Result<bool, HistoryError> {
        if !self.records.iter().any(|record| return record.id == id) {
            return Err(HistoryError::ValidationRejected(format!(
                "no session with id {id}"
            )));
        }

        let new_value = match self.authority.toggle_star(id).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, id, "Failed to toggle star");
                return Err(err);
            }
        };

        if let Some(record) = self.records.iter_mut().find(|record| return record.id == id) {
            record.starred = new_value;
            self.commit();
        }

        return Ok(new_value);
    }

    /// Removes a record once the authority confirms deletion. An id that
    /// is already gone is a no-op, so repeated removes stay harmless.
    pub async fn remove(&mut self, id: &str) -> Result<(), HistoryError> {
        if !self.records.iter().any(|record| return record.id == id) {
            return Ok(());
        }

        self.authority.delete_session(id).await?;

        self.records.retain(|record| return record.id != id);
        self.commit();
        return Ok(());
    }

    /// Issues one independent deletion per cached record, concurrently and
    /// with no ordering or batch-atomicity guarantee. Afterwards the cache
    /// holds exactly the records whose remote deletion failed. Returns the
    /// number removed.
    pub async fn remove_all(&mut self) -> usize {
        let ids = self
            .records
            .iter()
            .map(|record| return record.id.to_string())
            .collect::<Vec<String>>();

        let results = join_all(ids.iter().map(|id| return self.authority.delete_session(id))).await;

        let mut removed = 0;
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(()) => {
                    self.records.retain(|record| return &record.id != id);
                    removed += 1;
                }
                Err(err) => {
                    tracing::warn!(error = %err, id = id.as_str(), "Failed to delete session");
                }
            }
        }

        if removed > 0 {
            self.commit();
        }

        return removed;
    }

    /// Submits code for analysis. When the authority auto-saved the run,
    /// the echoed record is prepended so the cache stays newest-first.
    pub async fn analyse(
        &mut self,
        code: &str,
        level: OptimizationLevel,
    ) -> Result<AnalyseResponse, HistoryError> {
        if code.trim().is_empty() {
            return Err(HistoryError::ValidationRejected(
                "code cannot be empty".to_string(),
            ));
        }

        let response = self.authority.analyse(code, level).await?;

        if let Some(record) = &response.session {
            self.records.insert(0, record.clone());
            self.commit();
        }

        return Ok(response);
    }
}
