use std::str::FromStr;

use strum_macros::EnumString;

/// Execution state carried in `detail.state`.
///
/// Only the three states the relay styles differently get their own variant;
/// everything else CodePipeline emits (`CANCELED`, `SUPERSEDED`, ...) is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineState {
    Started,
    Succeeded,
    Failed,
    #[strum(default)]
    Other(String),
}

impl PipelineState {
    /// Never fails: unrecognised values land in [`PipelineState::Other`].
    pub fn parse(value: &str) -> Self {
        PipelineState::from_str(value).unwrap_or_else(|_| PipelineState::Other(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            PipelineState::Started => "STARTED",
            PipelineState::Succeeded => "SUCCEEDED",
            PipelineState::Failed => "FAILED",
            PipelineState::Other(state) => state,
        }
    }
}

/// A decoded CodePipeline status change.
///
/// Every field the source event may omit is an `Option`; the presenter decides
/// how an absent value is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineEvent {
    pub pipeline_name: Option<String>,
    pub execution_id: Option<String>,
    pub stage_name: Option<String>,
    pub action_name: Option<String>,
    pub state: Option<PipelineState>,
    /// `execution-result.external-execution-summary`
    pub summary: Option<String>,
    /// Event `time`, or the decode time when the event had none.
    pub timestamp: String,
}
