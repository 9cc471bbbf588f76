use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::validate_endpoint_url;

pub const DEFAULT_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/get_transcript";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// API settings
    pub api: ApiConfig,

    /// Identity of the simulated mobile client
    pub client: ClientIdentity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// get_transcript endpoint
    pub endpoint: String,
}

/// Values sent in the request context and mirrored in the HTTP headers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientIdentity {
    /// Interface language
    pub hl: String,

    /// Region
    pub gl: String,

    /// Client name as it appears in the request body
    pub client_name: String,

    /// Numeric client id sent in `X-Youtube-Client-Name`
    pub client_name_id: String,

    pub client_version: String,

    pub device_model: String,

    pub user_agent: String,

    pub time_zone: String,

    /// `Origin` header value
    pub origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            hl: "en".to_string(),
            gl: "US".to_string(),
            client_name: "IOS".to_string(),
            client_name_id: "3".to_string(),
            client_version: "19.45.4".to_string(),
            device_model: "iPhone16,2".to_string(),
            user_agent: "com.google.ios.youtube/19.45.4 (iPhone16,2; U; CPU iOS 18_1_0 like Mac OS X;)"
                .to_string(),
            time_zone: "UTC".to_string(),
            origin: "https://youtube.com".to_string(),
        }
    }
}

impl Config {
    /// Build the runtime configuration.
    ///
    /// Defaults are used unless a YAML file is given; the endpoint override wins over both.
    pub async fn load(path: Option<&Path>, endpoint: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(endpoint) = endpoint {
            config.api.endpoint = endpoint.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path).context("Failed to read config file")?;

        let config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_endpoint_url(&self.api.endpoint)?;

        if self.client.user_agent.is_empty() {
            return Err(crate::TranscriptError::Config("client user_agent must not be empty".into()).into());
        }

        Ok(())
    }
}
