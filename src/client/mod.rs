//! HTTP client for the Squeeze Server REST API.
//!
//! Three operations, each a single request/response round trip:
//! submit a job (POST), query its status (GET), delete it (DELETE).
//! Deletion is not idempotent: the server rejects a delete for a job it no
//! longer holds, and that rejection is surfaced, not swallowed.

mod types;

pub use types::{JobState, JobStatus};

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::config::ServerConfig;
use crate::error::SorensonError;
use types::{
    CompressionPreset, Destination, JobMediaInfo, SourceMedia, StatusResponse, SubmitJob,
    SubmitResponse,
};

pub struct SorensonClient {
    client: Client,
    base_url: String,
    queue_id: String,
    username: Option<String>,
    password: Option<String>,
}

impl SorensonClient {
    pub fn new(config: &ServerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            queue_id: config.queue_id.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/jobs{}", self.base_url, path)
    }

    /// Submit a transcoding job and return the server-assigned job id.
    pub async fn start(
        &self,
        source_uri: &str,
        destination_uri: &str,
        preset_id: &str,
    ) -> Result<String, SorensonError> {
        let job = SubmitJob {
            name: job_name(source_uri),
            queue_id: self.queue_id.clone(),
            job_media_info: JobMediaInfo {
                source_media_list: vec![SourceMedia {
                    file_uri: source_uri.to_string(),
                    user_name: self.username.clone(),
                    password: self.password.clone(),
                }],
                destination_list: vec![Destination {
                    file_uri: destination_uri.to_string(),
                    user_name: self.username.clone(),
                    password: self.password.clone(),
                }],
                compression_preset_list: vec![CompressionPreset {
                    preset_id: preset_id.to_string(),
                }],
            },
        };

        let url = self.url("");
        tracing::debug!(url = %url, preset_id, "submitting transcoding job");

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(&job)
            .send()
            .await?;
        let body = expect_success(response).await?;

        let parsed: SubmitResponse =
            serde_json::from_str(&body).map_err(|e| SorensonError::MalformedResponse {
                message: format!("submit response carried no job id: {e}"),
            })?;

        Ok(parsed.job_id)
    }

    /// Fetch the current state and progress of a job.
    pub async fn status(&self, job_id: &str) -> Result<JobStatus, SorensonError> {
        let url = self.url(&format!("/status/{job_id}"));
        tracing::debug!(url = %url, "querying job status");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let body = expect_success(response).await?;

        let parsed: StatusResponse =
            serde_json::from_str(&body).map_err(|e| SorensonError::MalformedResponse {
                message: format!("status response for job {job_id} unreadable: {e}"),
            })?;

        Ok(JobStatus {
            state: JobState::from_code(parsed.status.status),
            progress: parsed.status.progress,
        })
    }

    /// Delete a job from the server.
    ///
    /// Success is any 2xx; the response body is not consulted. A job the
    /// server already removed cannot be deleted again; the second call
    /// comes back non-2xx and errors.
    pub async fn stop(&self, job_id: &str) -> Result<(), SorensonError> {
        let url = self.url(&format!("/{job_id}"));
        tracing::debug!(url = %url, "deleting job");

        let response = self
            .client
            .delete(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        expect_success(response).await?;

        Ok(())
    }
}

/// Check the response status and hand back the body text.
async fn expect_success(response: reqwest::Response) -> Result<String, SorensonError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !status.is_success() {
        return Err(SorensonError::Status { status, body });
    }
    Ok(body)
}

/// Job name shown in the server's queue, taken from the source file name.
fn job_name(source_uri: &str) -> String {
    source_uri
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(source_uri)
        .to_string()
}
