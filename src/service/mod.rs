//! Encoding orchestration over the preset catalog and the job client.
//!
//! [`EncodingService`] is the surface hosts call: it resolves
//! (quality, aspect ratio) against the catalog, then drives the remote
//! server through [`SorensonClient`]. It holds no job state of its own;
//! the server arbitrates concurrent operations on the same job.

use crate::catalog::PresetCatalog;
use crate::client::{JobStatus, SorensonClient};
use crate::config::Config;
use crate::error::Result;

pub struct EncodingService {
    catalog: PresetCatalog,
    client: SorensonClient,
}

impl EncodingService {
    pub fn new(catalog: PresetCatalog, client: SorensonClient) -> Self {
        Self { catalog, client }
    }

    /// Build the catalog and client from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = PresetCatalog::new(&config.presets)?;
        let client = SorensonClient::new(&config.server);
        Ok(Self::new(catalog, client))
    }

    /// The preset catalog backing this service.
    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    /// Start encoding the source into the destination with the preset
    /// matching (quality, aspect ratio). Returns the server-assigned job id.
    ///
    /// Catalog errors ([`Error::InvalidAspectRatio`],
    /// [`Error::InvalidResolution`]) propagate unchanged, before any request
    /// is issued.
    ///
    /// [`Error::InvalidAspectRatio`]: crate::error::Error::InvalidAspectRatio
    /// [`Error::InvalidResolution`]: crate::error::Error::InvalidResolution
    pub async fn start_encoding(
        &self,
        source_uri: &str,
        destination_uri: &str,
        quality: &str,
        aspect_ratio: &str,
    ) -> Result<String> {
        let preset_id = self.catalog.preset_id(quality, aspect_ratio)?;
        let job_id = self.client.start(source_uri, destination_uri, preset_id).await?;
        tracing::info!(job_id = %job_id, quality, aspect_ratio, "started encoding");
        Ok(job_id)
    }

    /// Fetch the remote-reported state and progress for a job.
    pub async fn encoding_status(&self, job_id: &str) -> Result<JobStatus> {
        Ok(self.client.status(job_id).await?)
    }

    /// Stop a running job. Stopping a job the server no longer holds fails,
    /// and that failure is surfaced to the caller.
    pub async fn stop_encoding(&self, job_id: &str) -> Result<()> {
        self.client.stop(job_id).await?;
        tracing::info!(job_id, "stopped encoding");
        Ok(())
    }

    /// Stop a job, then start a replacement with the given parameters.
    ///
    /// Strictly sequential: when the stop fails, the replacement is never
    /// submitted and the stop error propagates.
    pub async fn restart_encoding(
        &self,
        job_id: &str,
        source_uri: &str,
        destination_uri: &str,
        quality: &str,
        aspect_ratio: &str,
    ) -> Result<String> {
        self.stop_encoding(job_id).await?;
        self.start_encoding(source_uri, destination_uri, quality, aspect_ratio)
            .await
    }
}
