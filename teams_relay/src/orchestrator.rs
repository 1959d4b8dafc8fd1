//! Fans a notification batch out over independent per-record pipelines.

use error_stack::{Report, report};
use futures::future::join_all;
use relay_models::{
    error::ReportDisplayExt,
    models::sns::{SnsEvent, SnsMessage},
};

use crate::{
    decoder::decode,
    dispatcher::CardDispatcher,
    error::{Error, RelayResult},
    presenter::present,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub delivered: usize,
}

/// Decodes, presents and dispatches every record concurrently.
///
/// All records run to completion even when some fail. The batch succeeds only
/// if every dispatch succeeded; otherwise the returned
/// [`Error::AggregateFailure`] report carries one attachment per failed record.
pub async fn process_batch<D>(event: &SnsEvent, dispatcher: &D) -> RelayResult<BatchSummary>
where
    D: CardDispatcher + ?Sized,
{
    let total = event.records.len();
    let outcomes = join_all(
        event
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| process_record(index, &record.sns, dispatcher)),
    )
    .await;

    let failures: Vec<Report<Error>> = outcomes.into_iter().filter_map(Result::err).collect();
    if failures.is_empty() {
        return Ok(BatchSummary { delivered: total });
    }

    let mut aggregate = report!(Error::AggregateFailure {
        failed: failures.len(),
        total,
    });
    for failure in &failures {
        aggregate = aggregate.attach_printable(format!(
            "{}: {}",
            failure.format(),
            failure.current_context()
        ));
    }
    Err(aggregate)
}

async fn process_record<D>(index: usize, record: &SnsMessage, dispatcher: &D) -> RelayResult<()>
where
    D: CardDispatcher + ?Sized,
{
    let card = present(&decode(record));
    dispatcher.dispatch(&card).await.map_err(|e| {
        tracing::error!(
            record = index,
            message_id = ?record.message_id,
            "Record delivery failed: {e:?}"
        );
        e.attach_printable(format!(
            "Record #{index} (MessageId: {})",
            record.message_id.as_deref().unwrap_or("unknown")
        ))
    })
}
