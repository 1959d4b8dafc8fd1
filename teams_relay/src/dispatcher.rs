use async_trait::async_trait;
use relay_models::{models::card::PresentationCard, teams::client::TeamsWebhookClient};

use crate::{
    config::RelayConfig,
    error::{Error, RelayResult},
};

/// Delivers one card to its destination. A single attempt, no retry.
#[async_trait]
pub trait CardDispatcher: Send + Sync {
    async fn dispatch(&self, card: &PresentationCard) -> RelayResult<()>;
}

#[derive(Debug, Clone)]
pub struct TeamsDispatcher {
    client: TeamsWebhookClient,
}

impl TeamsDispatcher {
    pub fn new(config: &RelayConfig) -> Self {
        Self::from_client(TeamsWebhookClient::new(config.webhook_url.clone()))
    }

    pub fn from_client(client: TeamsWebhookClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CardDispatcher for TeamsDispatcher {
    async fn dispatch(&self, card: &PresentationCard) -> RelayResult<()> {
        match self.client.post_card(card).await {
            Ok(response) => {
                tracing::info!(
                    webhook = %self.client.redacted_url(),
                    status = response.status,
                    "Message sent to Teams: {}",
                    response.body
                );
                Ok(())
            }
            Err(e) => Err(e
                .change_context(Error::Delivery)
                .attach_printable(format!("Webhook: {}", self.client.redacted_url()))
                .attach_printable(format!("Card: {}", card.title))),
        }
    }
}
