use std::{
    collections::HashSet,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use error_stack::report;
use relay_models::models::{
    card::PresentationCard,
    sns::{SnsEvent, SnsEventRecord, SnsMessage},
};
use tokio::sync::Barrier;
use tracing::{Event, Level, Subscriber, subscriber::DefaultGuard};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
    dispatcher::CardDispatcher,
    error::{Error, RelayResult},
};

pub fn init_tracing_in_tests() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().pretty().with_ansi(true))
        .try_init()
        .ok();
}

/// Counts `ERROR` events emitted by this workspace's crates.
struct ErrorEventCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorEventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let ours = metadata.target().starts_with("teams_relay")
            || metadata.target().starts_with("relay_models");
        if ours && *metadata.level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs a thread-local subscriber counting error events until the guard
/// is dropped. Needs the current-thread runtime `#[tokio::test]` defaults to.
pub fn count_error_events() -> (DefaultGuard, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let guard = tracing_subscriber::registry()
        .with(ErrorEventCounter(count.clone()))
        .set_default();
    (guard, count)
}

/// Builds an invocation batch from `(subject, message)` pairs.
pub fn sns_event(records: &[(Option<&str>, &str)]) -> SnsEvent {
    SnsEvent {
        records: records
            .iter()
            .map(|(subject, message)| SnsEventRecord {
                sns: SnsMessage::new(subject.map(str::to_string), message.to_string()),
            })
            .collect(),
    }
}

/// In-memory dispatcher that records every card it is handed.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<PresentationCard>>,
    failing_titles: HashSet<String>,
    barrier: Option<Barrier>,
}

impl RecordingDispatcher {
    /// Fails (after recording) every card whose title is listed.
    pub fn failing_on(titles: &[&str]) -> Self {
        Self {
            failing_titles: titles.iter().map(|title| title.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Holds every dispatch until `parties` dispatches are in flight.
    pub fn with_barrier(parties: usize) -> Self {
        Self {
            barrier: Some(Barrier::new(parties)),
            ..Default::default()
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|card| card.title.clone())
            .collect()
    }

    pub fn cards(&self) -> Vec<PresentationCard> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardDispatcher for RecordingDispatcher {
    async fn dispatch(&self, card: &PresentationCard) -> RelayResult<()> {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        self.sent.lock().unwrap().push(card.clone());
        if self.failing_titles.contains(&card.title) {
            return Err(report!(Error::Delivery).attach_printable("Webhook returned HTTP 500"));
        }
        Ok(())
    }
}
