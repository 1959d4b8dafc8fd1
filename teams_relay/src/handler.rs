//! Invocation entry points: raw payload in, aggregate outcome out.

use error_stack::ResultExt;
use relay_models::models::sns::SnsEvent;

use crate::{
    config::RelayConfig,
    dispatcher::{CardDispatcher, TeamsDispatcher},
    error::{Error, RelayResult},
    orchestrator::{BatchSummary, process_batch},
};

/// Parses the raw invocation payload and relays every record.
///
/// A payload that is not JSON or has no `Records` array is rejected with
/// [`Error::InvalidEvent`] instead of being treated as an empty batch.
pub async fn handle_payload<D>(payload: &str, dispatcher: &D) -> RelayResult<BatchSummary>
where
    D: CardDispatcher + ?Sized,
{
    let event: SnsEvent = serde_json::from_str(payload)
        .change_context(Error::InvalidEvent)
        .attach_printable("Invocation payload must be an object with a Records array")?;
    handle_event(&event, dispatcher).await
}

pub async fn handle_event<D>(event: &SnsEvent, dispatcher: &D) -> RelayResult<BatchSummary>
where
    D: CardDispatcher + ?Sized,
{
    tracing::debug!("SNS Event received: {event:?}");
    if event.records.is_empty() {
        tracing::warn!("SNS Event contained no records");
    }

    match process_batch(event, dispatcher).await {
        Ok(summary) => {
            tracing::info!(
                delivered = summary.delivered,
                "Successfully processed all SNS records."
            );
            Ok(summary)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error processing SNS event");
            Err(e)
        }
    }
}

/// Relays one invocation to the webhook named in `config`.
pub async fn run_invocation(payload: &str, config: &RelayConfig) -> RelayResult<BatchSummary> {
    let dispatcher = TeamsDispatcher::new(config);
    handle_payload(payload, &dispatcher).await
}
