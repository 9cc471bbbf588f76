use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, ORIGIN, USER_AGENT};
use reqwest::Client;

use crate::config::{ClientIdentity, Config};
use crate::{Result, TranscriptError};

const CLIENT_NAME_HEADER: &str = "x-youtube-client-name";
const CLIENT_VERSION_HEADER: &str = "x-youtube-client-version";

/// HTTP transport for the `get_transcript` endpoint
pub struct TranscriptClient {
    client: Client,
    endpoint: String,
}

impl TranscriptClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::identity_headers(&config.client)?)
            .build()
            .map_err(TranscriptError::from)?;

        Ok(Self {
            client,
            endpoint: config.api.endpoint.clone(),
        })
    }

    /// Headers that make the request look like it came from the mobile app
    fn identity_headers(identity: &ClientIdentity) -> Result<HeaderMap> {
        let value = |v: &str| {
            HeaderValue::from_str(v)
                .map_err(|_| TranscriptError::Config(format!("invalid header value: {:?}", v)))
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, value(&identity.user_agent)?);
        headers.insert(
            HeaderName::from_static(CLIENT_NAME_HEADER),
            value(&identity.client_name_id)?,
        );
        headers.insert(
            HeaderName::from_static(CLIENT_VERSION_HEADER),
            value(&identity.client_version)?,
        );
        headers.insert(ORIGIN, value(&identity.origin)?);
        Ok(headers)
    }

    /// POST the JSON payload and return the whole response body.
    ///
    /// Non-success statuses are only logged; the body is handed back either way.
    pub async fn post(&self, payload: String) -> std::result::Result<String, TranscriptError> {
        tracing::debug!("POST {} ({} bytes)", self.endpoint, payload.len());

        let response = self.client.post(&self.endpoint).body(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("get_transcript responded with HTTP {}", status);
        } else {
            tracing::warn!("get_transcript responded with HTTP {}", status);
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
