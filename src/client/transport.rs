use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::Submission;

/// One attempt to hand a submission to the ingestion endpoint. Any failure
/// (network error, non-success status, malformed response body) leaves the
/// entry queued; only an explicit acceptance removes it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), TransportError>;
}

#[derive(Debug)]
pub struct TransportError(pub String);

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `endpoint` is the full URL of the contact route. Every request runs
    /// under `timeout`; exceeding it counts as a delivery failure.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, submission: &Submission) -> Result<(), TransportError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError(format!("Request failed: {e}")))?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| TransportError(format!("Malformed response: {e}")))?;

        if status.is_success() && body["status"] == "ok" {
            Ok(())
        } else {
            let message = body["message"].as_str().unwrap_or("unknown error");
            Err(TransportError(format!(
                "Server rejected submission ({status}): {message}"
            )))
        }
    }
}
