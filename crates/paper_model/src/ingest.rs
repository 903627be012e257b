//! Reading structured papers from JSON and from raw collaborator output

use crate::error::ModelResult;
use crate::paper::ExamPaper;
use std::io::Read;

impl ExamPaper {
    /// Parse a paper from a JSON string
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a paper from a JSON reader
    pub fn from_json_reader<R: Read>(reader: R) -> ModelResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize the paper as pretty-printed JSON
    pub fn to_json_pretty(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse the structuring collaborator's response into a paper
///
/// Models are asked for bare JSON but often wrap it in a markdown code
/// fence anyway. A leading ```` ```json ```` or ```` ``` ```` line and a trailing
/// fence are removed before parsing. A parse failure is returned to the
/// caller, which owns any re-request policy.
pub fn parse_structured_response(response: &str) -> ModelResult<ExamPaper> {
    let cleaned = strip_code_fence(response);
    tracing::debug!("Parsing structured response ({} bytes)", cleaned.len());
    ExamPaper::from_json_str(cleaned)
}

/// Remove a surrounding markdown code fence, if any
pub fn strip_code_fence(text: &str) -> &str {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    } else if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }

    body = body.trim_start();

    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }

    body.trim()
}
