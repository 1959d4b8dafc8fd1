//! Maps decoded records to presentation cards. Pure; no I/O.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use relay_models::models::{
    card::{CardTone, Fact, PresentationCard},
    pipeline::{PipelineEvent, PipelineState},
};

use crate::decoder::{DecodedRecord, DegradedRecord};

pub const NOT_AVAILABLE: &str = "N/A";
pub const FALLBACK_SUBJECT: &str = "SNS Notification Error";
pub const PARSE_ERROR_HEADLINE: &str = "Error parsing CodePipeline event from SNS";

/// Same shape as `Date::toLocaleString` in an en-US locale.
const LOCAL_DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// ISO 8601 date-times without an offset; read as wall-clock time in the
/// display timezone.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn present(decoded: &DecodedRecord) -> PresentationCard {
    match decoded {
        DecodedRecord::Event(event) => status_card(event),
        DecodedRecord::Degraded(record) => error_card(record),
    }
}

pub fn status_card(event: &PipelineEvent) -> PresentationCard {
    let (icon, tone) = status_style(event.state.as_ref());
    let pipeline = or_not_available(event.pipeline_name.as_deref());

    let facts = vec![
        Fact::new("Pipeline", pipeline),
        Fact::new("Execution ID", or_not_available(event.execution_id.as_deref())),
        Fact::new("Stage", or_not_available(event.stage_name.as_deref())),
        Fact::new("Action", or_not_available(event.action_name.as_deref())),
        Fact::new(
            "Status",
            or_not_available(event.state.as_ref().map(PipelineState::as_str)),
        ),
        Fact::new("Timestamp", format_local_timestamp(&event.timestamp)),
    ];

    let sections = match event.summary.as_deref() {
        Some(summary) if !summary.is_empty() => vec![format!("**Summary:** {summary}")],
        _ => vec![],
    };

    PresentationCard {
        title: format!("{icon} Pipeline: {pipeline}"),
        tone,
        facts,
        sections,
    }
}

pub fn error_card(record: &DegradedRecord) -> PresentationCard {
    let title = match record.subject.as_deref() {
        Some(subject) if !subject.is_empty() => subject.to_string(),
        _ => FALLBACK_SUBJECT.to_string(),
    };

    PresentationCard {
        title,
        tone: CardTone::Attention,
        facts: vec![],
        sections: vec![PARSE_ERROR_HEADLINE.to_string(), record.raw_message.clone()],
    }
}

fn status_style(state: Option<&PipelineState>) -> (&'static str, CardTone) {
    match state {
        Some(PipelineState::Succeeded) => ("✅", CardTone::Good),
        Some(PipelineState::Failed) => ("❌", CardTone::Attention),
        _ => ("ℹ️", CardTone::Default),
    }
}

fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Renders an ISO 8601 timestamp in the process's local timezone. Anything
/// that does not parse is shown as received.
pub fn format_local_timestamp(timestamp: &str) -> String {
    format_timestamp_in(timestamp, &Local)
}

fn format_timestamp_in<Tz>(timestamp: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_iso8601(timestamp, tz) {
        Some(parsed) => parsed.format(LOCAL_DISPLAY_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

/// Offset-less date-times are wall-clock time in `tz`; a bare date is UTC
/// midnight.
fn parse_iso8601<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.with_timezone(tz));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(timestamp, format).ok())
    {
        return tz.from_local_datetime(&naive).earliest();
    }
    NaiveDate::parse_from_str(timestamp, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight).with_timezone(tz))
}
