use anyhow::{Context, Result};

use crate::client::TranscriptClient;
use crate::config::Config;
use crate::extract::{extract_transcript, parse_response, Extraction};
use crate::params::build_params;
use crate::request::TranscriptRequest;

/// Encode, send, extract
pub struct TranscriptPipeline {
    config: Config,
    client: TranscriptClient,
}

impl TranscriptPipeline {
    pub fn new(config: Config) -> Result<Self> {
        let client = TranscriptClient::new(&config).context("Failed to create HTTP client")?;
        Ok(Self { config, client })
    }

    /// Compact JSON body for one video/language pair
    pub fn build_payload(&self, video_id: &str, language: &str) -> Result<String> {
        let params = build_params(video_id, language)?;
        let payload = TranscriptRequest::new(&self.config.client, params)
            .to_json()
            .context("Failed to serialize request payload")?;

        tracing::debug!("Built payload for video {} ({})", video_id, language);
        Ok(payload)
    }

    /// Fetch and extract the transcript of a video
    pub async fn fetch(&self, video_id: &str, language: &str) -> Result<Extraction> {
        let payload = self.build_payload(video_id, language)?;

        tracing::info!("Requesting {} transcript for video {}", language, video_id);
        let body = self.client.post(payload).await?;

        let root = parse_response(&body)?;
        let extraction = extract_transcript(&root);

        match &extraction {
            Extraction::Lines(lines) => tracing::debug!("Extracted {} segments", lines.len()),
            other => tracing::debug!("No transcript extracted: {:?}", other),
        }

        Ok(extraction)
    }
}
