use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Map side of a team on the end screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Blue,
    Red,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub friend_id: String,
    pub riot_game_name: Option<String>,
    pub riot_tag_line: Option<String>,
}

/// Payload the match service sends through `--input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    pub attachment_id: String,
    pub match_id: String,
    pub s3_key: String,
    pub team_a: Vec<TeamMember>,
    pub team_b: Vec<TeamMember>,
}

impl ExtractionRequest {
    /// Reads an already parsed payload as a request, if it has that shape.
    pub fn recognize(value: &Value) -> Option<Self> {
        match Self::deserialize(value) {
            Ok(request) => {
                tracing::debug!(
                    "Recognized extraction request: match={} attachment={} teams={}v{}",
                    request.match_id,
                    request.attachment_id,
                    request.team_a.len(),
                    request.team_b.len()
                );
                Some(request)
            }
            Err(e) => {
                tracing::debug!("Input is not an extraction request: {e}");
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOutput {
    pub winner_side: Side,
    pub team_a_side: Side,
    pub confidence: BTreeMap<String, f64>,
    pub result: Map<String, Value>,
}

impl ExtractionOutput {
    /// Record reported until end screens are actually read.
    pub fn placeholder() -> Self {
        Self {
            winner_side: Side::Unknown,
            team_a_side: Side::Unknown,
            confidence: BTreeMap::new(),
            result: Map::new(),
        }
    }
}

/// One line of `extract` output.
///
/// Any record carrying an `error` key is a failure, whatever else it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Failure { error: String },
    Success(ExtractionOutput),
}

impl Response {
    pub fn from_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line.trim_end())
    }

    pub fn into_result(self) -> anyhow::Result<ExtractionOutput> {
        match self {
            Self::Failure { error } => Err(anyhow::anyhow!(error)),
            Self::Success(output) => Ok(output),
        }
    }
}

impl From<ExtractionOutput> for Response {
    fn from(output: ExtractionOutput) -> Self {
        Self::Success(output)
    }
}

impl From<&crate::ExtractError> for Response {
    fn from(error: &crate::ExtractError) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }
}
