//! yt-transcript - fetch the auto-generated transcript of a YouTube video
//!
//! The library mimics the iOS YouTube client: it hand-encodes the request parameters,
//! posts them to the internal `get_transcript` endpoint and walks the JSON reply for
//! transcript segments.

pub mod cli;
pub mod client;
pub mod config;
pub mod extract;
pub mod output;
pub mod params;
pub mod request;
pub mod transcript;
pub mod utils;

pub use cli::{Cli, OutputFormat};
pub use client::TranscriptClient;
pub use config::Config;
pub use extract::Extraction;
pub use transcript::TranscriptPipeline;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the transcript fetcher
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("{field} is {len} bytes long; record fields are limited to 255 bytes")]
    FieldTooLong { field: &'static str, len: usize },

    /// The transport's own message; reqwest already folds its causes into it
    #[error("{0}")]
    Transport(String),

    #[error("Failed to parse JSON response. ({0})")]
    MalformedResponse(serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TranscriptError {
    fn from(err: reqwest::Error) -> Self {
        TranscriptError::Transport(err.to_string())
    }
}
