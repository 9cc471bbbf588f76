use serde::Serialize;

use crate::config::ClientIdentity;

/// Body of a `get_transcript` call
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptRequest<'a> {
    pub context: RequestContext<'a>,

    /// Base64 of the encoded parameter record
    pub params: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContext<'a> {
    pub client: ClientContext<'a>,
}

/// Client identity block, field names as the API expects them
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContext<'a> {
    pub hl: &'a str,
    pub gl: &'a str,
    pub client_name: &'a str,
    pub client_version: &'a str,
    pub device_model: &'a str,
    pub user_agent: &'a str,
    pub time_zone: &'a str,
}

impl<'a> TranscriptRequest<'a> {
    pub fn new(identity: &'a ClientIdentity, params: String) -> Self {
        Self {
            context: RequestContext {
                client: ClientContext {
                    hl: &identity.hl,
                    gl: &identity.gl,
                    client_name: &identity.client_name,
                    client_version: &identity.client_version,
                    device_model: &identity.device_model,
                    user_agent: &identity.user_agent,
                    time_zone: &identity.time_zone,
                },
            },
            params,
        }
    }

    /// Compact JSON serialization
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
