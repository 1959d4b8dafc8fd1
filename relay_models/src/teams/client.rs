//! Teams webhook client bound to a single destination.

use std::sync::Arc;

use reqwest::Client;

use super::{
    adaptive_card::TeamsMessage,
    api::{self, HTTP_CLIENT, redact_webhook_url},
};
use crate::{error::ModelResult, models::card::PresentationCard, network::http::TextResponse};

#[derive(Debug, Clone)]
pub struct TeamsWebhookClient {
    client: Arc<Client>,
    webhook_url: String,
}

impl TeamsWebhookClient {
    /// Uses the process-wide shared HTTP client.
    pub fn new(webhook_url: String) -> Self {
        Self::with_client(HTTP_CLIENT.clone(), webhook_url)
    }

    pub fn with_client(client: Arc<Client>, webhook_url: String) -> Self {
        Self {
            client,
            webhook_url,
        }
    }

    /// Destination for log lines, with the secret path stripped.
    pub fn redacted_url(&self) -> String {
        redact_webhook_url(&self.webhook_url)
    }

    /// Wraps the card in the Teams envelope and posts it once.
    pub async fn post_card(&self, card: &PresentationCard) -> ModelResult<TextResponse> {
        let message = TeamsMessage::from(card);
        api::post_message(&self.client, &self.webhook_url, &message).await
    }
}
