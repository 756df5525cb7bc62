use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use waiver_core::form::SubmitTransport;
use waiver_core::foundation::{Result, WaiverError};
use waiver_core::model::{SubmissionResult, WaiverSubmission};

/// The client half of the submission endpoint: posts the waiver to a
/// running service. Hosts hand this to the orchestrator.
pub struct HttpSubmitTransport {
    client: Client,
    base_url: String,
}

impl HttpSubmitTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| WaiverError::Transport(err.to_string()))?;
        Ok(HttpSubmitTransport { client, base_url: base_url.trim_end_matches('/').to_string() })
    }
}

#[async_trait]
impl SubmitTransport for HttpSubmitTransport {
    async fn submit(&self, waiver: &WaiverSubmission) -> Result<SubmissionResult> {
        let url = format!("{}/api/submit-waiver", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(waiver)
            .send()
            .await
            .map_err(|err| WaiverError::Transport(err.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        // The endpoint answers 500 with a decodable body for malformed
        // input; anything undecodable is a transport-level failure.
        serde_json::from_str(&body)
            .map_err(|err| WaiverError::Transport(format!("undecodable response status={} error={}", status, err)))
    }
}
