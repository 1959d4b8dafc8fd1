//! Turns an SNS record into a pipeline event, or a degraded record when the
//! embedded message is not JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use error_stack::ResultExt;
use relay_models::models::{
    pipeline::{PipelineEvent, PipelineState},
    sns::SnsMessage,
};
use serde_json::Value;

use crate::error::{Error, RelayResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedRecord {
    Event(PipelineEvent),
    Degraded(DegradedRecord),
}

/// What is left of a record whose `Message` could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedRecord {
    pub subject: Option<String>,
    /// The unparsed `Message`, byte for byte.
    pub raw_message: String,
}

/// Never fails; parse errors are logged and produce [`DecodedRecord::Degraded`].
pub fn decode(record: &SnsMessage) -> DecodedRecord {
    decode_with_clock(record, Utc::now)
}

pub(crate) fn decode_with_clock(
    record: &SnsMessage,
    now: impl FnOnce() -> DateTime<Utc>,
) -> DecodedRecord {
    match parse_pipeline_event(&record.message, now) {
        Ok(event) => {
            tracing::debug!(
                message_id = ?record.message_id,
                "Parsed CodePipeline Event: {event:?}"
            );
            DecodedRecord::Event(event)
        }
        Err(e) => {
            tracing::error!(
                message_id = ?record.message_id,
                "Failed to parse SNS Message as CodePipeline Event JSON: {e:?}"
            );
            DecodedRecord::Degraded(DegradedRecord {
                subject: record.subject.clone(),
                raw_message: record.message.clone(),
            })
        }
    }
}

/// Parses the JSON `Message` of a CodePipeline notification.
///
/// Only JSON syntax is checked. Every field is optional and looked up
/// leniently, so `{}` or even `42` decode to an event with nothing but a
/// timestamp.
pub fn parse_pipeline_event(
    message: &str,
    now: impl FnOnce() -> DateTime<Utc>,
) -> RelayResult<PipelineEvent> {
    let value: Value = serde_json::from_str(message)
        .change_context(Error::Decode)
        .attach_printable("SNS Message is not valid JSON")?;

    let detail = value.get("detail");
    let detail_text = |key: &str| detail.and_then(|d| d.get(key)).and_then(scalar_text);

    let summary = detail
        .and_then(|d| d.get("execution-result"))
        .and_then(|result| result.get("external-execution-summary"))
        .and_then(scalar_text);

    let timestamp = value
        .get("time")
        .and_then(scalar_text)
        .unwrap_or_else(|| now().to_rfc3339_opts(SecondsFormat::Millis, true));

    Ok(PipelineEvent {
        pipeline_name: detail_text("pipeline"),
        execution_id: detail_text("execution-id"),
        stage_name: detail_text("stage"),
        action_name: detail_text("action"),
        state: detail_text("state").map(|state| PipelineState::parse(&state)),
        summary,
        timestamp,
    })
}

/// Text of a scalar JSON value. Empty strings, `null`, arrays and objects
/// count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
