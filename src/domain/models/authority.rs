use async_trait::async_trait;

use super::AnalyseResponse;
use super::HistoryError;
use super::OptimizationLevel;
use super::SessionRecord;

pub type AuthorityBox = Box<dyn Authority + Send + Sync>;

/// The remote system of record for session data. Transport-agnostic; the
/// cache only ever commits a mutation after one of these calls succeeds.
#[async_trait]
pub trait Authority {
    /// Used at startup to verify the remote store is reachable before the
    /// first load.
    async fn health_check(&self) -> Result<(), HistoryError>;

    /// Full record set for the authenticated owner, newest first.
    async fn list_sessions(&self) -> Result<Vec<SessionRecord>, HistoryError>;

    async fn delete_session(&self, id: &str) -> Result<(), HistoryError>;

    async fn rename_session(&self, id: &str, name: &str) -> Result<(), HistoryError>;

    /// Flips the starred flag remotely and returns the new value.
    async fn toggle_star(&self, id: &str) -> Result<bool, HistoryError>;

    /// Submits code for analysis. The diagnostic report arrives embedded
    /// in the response rather than through a separate call.
    async fn analyse(
        &self,
        code: &str,
        level: OptimizationLevel,
    ) -> Result<AnalyseResponse, HistoryError>;
}
