use crate::archive::config::SharePointConfig;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Why a Graph call failed. Every variant degrades to a soft
/// "not saved" outcome upstream; nothing here reaches the submitter.
#[derive(Debug, Error)]
pub enum ArchiveFailure {
    #[error("transport_error={0}")]
    Transport(String),
    #[error("http_status={status} body={body}")]
    Http { status: StatusCode, body: String },
    #[error("invalid_json_error={error} body={body}")]
    InvalidJson { error: String, body: String },
    #[error("config_error={0}")]
    Config(String),
}

impl ArchiveFailure {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArchiveFailure::Http { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// An authenticated Microsoft Graph session. Construction performs the
/// client-credentials exchange; the bearer token lives as long as the
/// client (one submission's pipeline, well within token expiry).
pub struct GraphClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GraphClient {
    pub async fn connect(config: &SharePointConfig) -> Result<GraphClient, ArchiveFailure> {
        let (Some(tenant_id), Some(client_id), Some(client_secret)) =
            (&config.tenant_id, &config.client_id, &config.client_secret)
        else {
            return Err(ArchiveFailure::Config("missing azure credentials".to_string()));
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| ArchiveFailure::Transport(err.to_string()))?;

        let url = format!("{}/{}/oauth2/v2.0/token", config.login_base_url.trim_end_matches('/'), tenant_id);
        let form = [
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("scope", "https://graph.microsoft.com/.default"),
            ("grant_type", "client_credentials"),
        ];
        let resp = client.post(&url).form(&form).send().await.map_err(|err| ArchiveFailure::Transport(err.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ArchiveFailure::Http { status, body });
        }
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|err| ArchiveFailure::InvalidJson { error: err.to_string(), body })?;

        Ok(GraphClient { client, base_url: config.graph_base_url.trim_end_matches('/').to_string(), token: token.access_token })
    }

    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ArchiveFailure> {
        let req = self.client.get(self.url(path));
        self.send_json(req).await
    }

    pub async fn post_json(&self, path: &str, payload: &serde_json::Value) -> Result<serde_json::Value, ArchiveFailure> {
        let req = self.client.post(self.url(path)).json(payload);
        self.send_json(req).await
    }

    pub async fn patch_json(&self, path: &str, payload: &serde_json::Value) -> Result<serde_json::Value, ArchiveFailure> {
        let req = self.client.patch(self.url(path)).json(payload);
        self.send_json(req).await
    }

    pub async fn put_bytes(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<serde_json::Value, ArchiveFailure> {
        let req = self.client.put(self.url(path)).header(header::CONTENT_TYPE, content_type).body(bytes);
        self.send_json(req).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json(&self, req: reqwest::RequestBuilder) -> Result<serde_json::Value, ArchiveFailure> {
        let resp = req
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(|err| ArchiveFailure::Transport(err.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ArchiveFailure::Http { status, body });
        }
        if body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|err| ArchiveFailure::InvalidJson { error: err.to_string(), body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let failure = ArchiveFailure::Http { status: StatusCode::NOT_FOUND, body: String::new() };
        assert!(failure.is_not_found());
        let failure = ArchiveFailure::Http { status: StatusCode::FORBIDDEN, body: String::new() };
        assert!(!failure.is_not_found());
        assert!(!ArchiveFailure::Transport("refused".to_string()).is_not_found());
    }
}
