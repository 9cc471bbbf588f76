use serde_json::Value;

use crate::TranscriptError;

const SEGMENTS_POINTER: &str = "/elementsCommand/transformEntityCommand/arguments/transformTranscriptSegmentListArguments/overwrite/initialSegments";
const CONTENT_POINTER: &str = "/transcriptSegmentRenderer/snippet/elementsAttributedString/content";

/// What a `get_transcript` reply yielded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Segment texts in response order
    Lines(Vec<String>),

    /// The top-level `actions` array is missing
    NoActions,

    /// `actions` exists but carries no segment list
    NoSegments,
}

impl Extraction {
    /// Diagnostic for the soft-failure cases
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            Extraction::Lines(_) => None,
            Extraction::NoActions => Some("Could not find 'actions' array in API response."),
            Extraction::NoSegments => Some(
                "Could not find transcript in API response. The video may not have a transcript for the selected language.",
            ),
        }
    }
}

pub fn parse_response(body: &str) -> Result<Value, TranscriptError> {
    serde_json::from_str(body).map_err(TranscriptError::MalformedResponse)
}

/// Walk the fixed path down to the transcript segments.
///
/// Segments without a string `content` are skipped.
pub fn extract_transcript(root: &Value) -> Extraction {
    let actions = match root.get("actions").and_then(Value::as_array) {
        Some(actions) => actions,
        None => return Extraction::NoActions,
    };

    let segments = actions
        .first()
        .and_then(|action| action.pointer(SEGMENTS_POINTER))
        .and_then(Value::as_array);

    match segments {
        Some(segments) => Extraction::Lines(
            segments
                .iter()
                .filter_map(|segment| segment.pointer(CONTENT_POINTER).and_then(Value::as_str))
                .map(str::to_string)
                .collect(),
        ),
        None => Extraction::NoSegments,
    }
}
