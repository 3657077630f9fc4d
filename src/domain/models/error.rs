use thiserror::Error;

/// Failure taxonomy for the session cache. Nothing here is fatal: every
/// path leaves the cache in a previously valid state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The remote store could not be reached or refused the identity.
    /// Surfaced as a load banner, never retried automatically.
    #[error("authority unavailable: {0}")]
    AuthorityUnavailable(String),

    /// Rejected locally before any request was made.
    #[error("{0}")]
    ValidationRejected(String),

    /// The authority answered a write with a failure. Local state is left
    /// untouched.
    #[error("mutation failed: {0}")]
    MutationFailed(String),
}
