use url::Url;

use crate::{Result, TranscriptError};

/// Validate an endpoint URL and return the parsed form
pub fn validate_endpoint_url(endpoint: &str) -> Result<Url> {
    let parsed = Url::parse(endpoint)
        .map_err(|_| TranscriptError::InvalidEndpoint(endpoint.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(TranscriptError::InvalidEndpoint(format!(
            "{} (must use HTTP or HTTPS)",
            endpoint
        ))
        .into());
    }

    Ok(parsed)
}

fn is_youtube_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == "youtube.com" || host == "youtu.be" || host.ends_with(".youtube.com")
}

/// Pull the video id out of a YouTube URL.
///
/// Anything that is not a recognised YouTube URL is returned unchanged.
pub fn normalize_video_id(input: &str) -> String {
    let trimmed = input.trim();

    let parsed = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(_) => return input.to_string(),
    };

    let host = match parsed.host_str() {
        Some(host) if is_youtube_host(host) => host.to_ascii_lowercase(),
        _ => return input.to_string(),
    };

    let mut segments = parsed
        .path_segments()
        .map(|segs| segs.filter(|s| !s.is_empty()).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter();

    let id = if host == "youtu.be" {
        segments.next().map(str::to_string)
    } else {
        match segments.next() {
            Some("watch") => parsed
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
            Some("shorts") | Some("embed") | Some("v") | Some("live") => {
                segments.next().map(str::to_string)
            }
            _ => None,
        }
    };

    match id.filter(|id| !id.trim().is_empty()) {
        Some(id) => {
            tracing::debug!("Extracted video id {} from {}", id, trimmed);
            id
        }
        None => input.to_string(),
    }
}
