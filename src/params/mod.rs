//! Request parameter encoding for the `get_transcript` endpoint.
//!
//! The endpoint expects a protobuf-shaped record in its `params` field. Only two fixed
//! record shapes are ever needed, so they are written out byte by byte: every field is a
//! one-byte tag (field number and wire type) followed by a one-byte length and the value.
//!
//! The language selector is base64-encoded and then percent-encoded before it is nested
//! inside the outer record as plain text. The upstream API rejects the request without
//! that second layer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::TranscriptError;

/// Track kind for auto-generated captions.
const ASR_KIND: &str = "asr";

const TAG_KIND: u8 = 0x0A;
const TAG_LANGUAGE: u8 = 0x12;
const TAG_NAME: u8 = 0x1A;

const TAG_VIDEO_ID: u8 = 0x0A;
const TAG_SELECTOR: u8 = 0x12;
const TAG_FLAG: u8 = 0x18;
const FLAG_VALUE: u8 = 0x01;

fn field_len(field: &'static str, value: &[u8]) -> Result<u8, TranscriptError> {
    u8::try_from(value.len()).map_err(|_| TranscriptError::FieldTooLong {
        field,
        len: value.len(),
    })
}

fn push_field(buf: &mut Vec<u8>, tag: u8, len: u8, value: &[u8]) {
    buf.push(tag);
    buf.push(len);
    buf.extend_from_slice(value);
}

/// Encode the language selector record: `kind = "asr"`, `language`, empty `name`.
pub fn encode_language_selector(language: &str) -> Result<Vec<u8>, TranscriptError> {
    let language = language.as_bytes();
    let len = field_len("language code", language)?;

    let mut buf = Vec::with_capacity(2 + ASR_KIND.len() + 2 + language.len() + 2);
    push_field(&mut buf, TAG_KIND, ASR_KIND.len() as u8, ASR_KIND.as_bytes());
    push_field(&mut buf, TAG_LANGUAGE, len, language);
    push_field(&mut buf, TAG_NAME, 0, &[]);
    Ok(buf)
}

/// Encode the outer parameter record around an already-encoded selector.
pub fn encode_request_params(video_id: &str, selector: &str) -> Result<Vec<u8>, TranscriptError> {
    let video_id = video_id.as_bytes();
    let selector = selector.as_bytes();
    let video_len = field_len("video id", video_id)?;
    let selector_len = field_len("language selector", selector)?;

    let mut buf = Vec::with_capacity(2 + video_id.len() + 2 + selector.len() + 2);
    push_field(&mut buf, TAG_VIDEO_ID, video_len, video_id);
    push_field(&mut buf, TAG_SELECTOR, selector_len, selector);
    buf.push(TAG_FLAG);
    buf.push(FLAG_VALUE);
    Ok(buf)
}

/// Standard base64 with padding.
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Percent-encode everything except ASCII alphanumerics and `-._~`.
pub fn percent_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Build the value of the request's `params` field.
pub fn build_params(video_id: &str, language: &str) -> Result<String, TranscriptError> {
    let selector = encode_language_selector(language)?;
    let selector = percent_encode(&encode_base64(&selector));
    tracing::debug!(language, selector = %selector, "Encoded language selector");

    let params = encode_request_params(video_id, &selector)?;
    Ok(encode_base64(&params))
}
