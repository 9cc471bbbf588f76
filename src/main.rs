use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_transcript::utils::normalize_video_id;
use yt_transcript::{output, Cli, Config, Extraction, TranscriptPipeline};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{}", err);
                    ExitCode::SUCCESS
                }
                _ => {
                    eprint!("{}", err);
                    ExitCode::from(1)
                }
            };
        }
    };

    // Initialize tracing; stdout is reserved for the transcript
    let default_filter = if cli.verbose { "yt_transcript=debug" } else { "yt_transcript=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref(), cli.endpoint.as_deref()).await?;
    let pipeline = TranscriptPipeline::new(config)?;

    let video_id = normalize_video_id(&cli.video_id);

    match pipeline.fetch(&video_id, &cli.language).await? {
        Extraction::Lines(lines) => output::print_to_console(&lines, cli.format)?,
        soft => {
            if let Some(message) = soft.diagnostic() {
                eprintln!("{}", message);
            }
        }
    }

    Ok(())
}
