use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "yt-transcript",
    about = "Fetch the auto-generated transcript of a YouTube video",
    version,
    long_about = "Fetches the automatic speech recognition transcript of a public YouTube video through the iOS client API and prints one segment per line."
)]
pub struct Cli {
    /// Video identifier or a youtube.com / youtu.be URL
    #[arg(value_name = "VIDEO_ID", allow_hyphen_values = true)]
    pub video_id: String,

    /// Transcript language code
    #[arg(value_name = "LANGUAGE_CODE", default_value = "en")]
    pub language: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// YAML file overriding the built-in client configuration
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the get_transcript endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One transcript segment per line
    Text,
    /// JSON array of segment strings
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
