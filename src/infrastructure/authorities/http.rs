#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalyseResponse;
use crate::domain::models::Authority;
use crate::domain::models::HistoryError;
use crate::domain::models::OptimizationLevel;
use crate::domain::models::SessionRecord;

fn unavailable(err: reqwest::Error) -> HistoryError {
    return HistoryError::AuthorityUnavailable(err.to_string());
}

fn failed(err: reqwest::Error) -> HistoryError {
    return HistoryError::MutationFailed(err.to_string());
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
struct HistoryResponse {
    sessions: Vec<SessionRecord>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RenameRequest {
    name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StarResponse {
    starred: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AnalyseRequest {
    code: String,
    optimization_level: String,
}

/// REST implementation of the session authority. Every request carries the
/// configured bearer token; the server scopes records to that identity.
pub struct HttpAuthority {
    url: String,
    token: String,
    timeout: String,
}

impl Default for HttpAuthority {
    fn default() -> HttpAuthority {
        return HttpAuthority {
            url: Config::get(ConfigKey::AuthorityUrl),
            token: Config::get(ConfigKey::AuthToken),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl HttpAuthority {
    fn bearer(&self) -> String {
        return format!("Bearer {token}", token = self.token);
    }
}

#[async_trait]
impl Authority for HttpAuthority {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<(), HistoryError> {
        let timeout = self
            .timeout
            .parse::<u64>()
            .map_err(|err| return HistoryError::AuthorityUnavailable(err.to_string()))?;

        let res = reqwest::Client::new()
            .get(format!("{url}/api/health", url = self.url))
            .timeout(Duration::from_millis(timeout))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Authority is not reachable");
            return Err(HistoryError::AuthorityUnavailable(
                "authority is not reachable".to_string(),
            ));
        }

        let res = res.unwrap();
        if res.status() != 200 {
            tracing::error!(status = res.status().as_u16(), "Authority health check failed");
            return Err(HistoryError::AuthorityUnavailable(
                "authority health check failed".to_string(),
            ));
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn list_sessions(&self) -> Result<Vec<SessionRecord>, HistoryError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/api/history", url = self.url))
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(unavailable)?;

        if res.status() == 401 {
            tracing::error!("Authority rejected the auth token");
            return Err(HistoryError::AuthorityUnavailable(
                "not authenticated".to_string(),
            ));
        }
        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to fetch session history"
            );
            return Err(HistoryError::AuthorityUnavailable(
                "failed to fetch session history".to_string(),
            ));
        }

        let body = res.json::<HistoryResponse>().await.map_err(unavailable)?;
        tracing::debug!(count = body.sessions.len(), "Fetched session history");
        return Ok(body.sessions);
    }

    #[allow(clippy::implicit_return)]
    async fn delete_session(&self, id: &str) -> Result<(), HistoryError> {
        let res = reqwest::Client::new()
            .delete(format!("{url}/api/history/{id}", url = self.url))
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(failed)?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), id, "Failed to delete session");
            return Err(HistoryError::MutationFailed(format!(
                "delete failed for session {id}"
            )));
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn rename_session(&self, id: &str, name: &str) -> Result<(), HistoryError> {
        let req = RenameRequest {
            name: name.to_string(),
        };

        let res = reqwest::Client::new()
            .patch(format!("{url}/api/history/{id}/rename", url = self.url))
            .header("Authorization", self.bearer())
            .json(&req)
            .send()
            .await
            .map_err(failed)?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), id, "Failed to rename session");
            return Err(HistoryError::MutationFailed(format!(
                "rename failed for session {id}"
            )));
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn toggle_star(&self, id: &str) -> Result<bool, HistoryError> {
        let res = reqwest::Client::new()
            .patch(format!("{url}/api/history/{id}/star", url = self.url))
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(failed)?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), id, "Failed to toggle star");
            return Err(HistoryError::MutationFailed(format!(
                "star toggle failed for session {id}"
            )));
        }

        let body = res.json::<StarResponse>().await.map_err(failed)?;
        return Ok(body.starred);
    }

    #[allow(clippy::implicit_return)]
    async fn analyse(
        &self,
        code: &str,
        level: OptimizationLevel,
    ) -> Result<AnalyseResponse, HistoryError> {
        let req = AnalyseRequest {
            code: code.to_string(),
            optimization_level: level.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/analyse", url = self.url))
            .header("Authorization", self.bearer())
            .json(&req)
            .send()
            .await
            .map_err(unavailable)?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Analysis request failed");
            return Err(HistoryError::AuthorityUnavailable(
                "analysis request failed".to_string(),
            ));
        }

        let body = res.json::<AnalyseResponse>().await.map_err(unavailable)?;
        tracing::debug!(body = ?body.passed_error_check, "Analysis response");
        return Ok(body);
    }
}
