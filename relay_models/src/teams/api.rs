use crate::{
    error::{Error, ModelResult},
    network::http::{TextResponse, handle_text_response},
};
use error_stack::ResultExt;
use once_cell::sync::Lazy;
use reqwest::{Client, header::CONTENT_TYPE};
use std::sync::Arc;

use super::adaptive_card::TeamsMessage;

pub static HTTP_CLIENT: Lazy<Arc<Client>> = Lazy::new(|| Arc::new(Client::new()));

/// Posts one message to a Teams incoming webhook.
///
/// # Errors
///
/// Will return an error if:
/// - The message cannot be serialized
/// - The request cannot be sent (connect failure, timeout, ...)
/// - The webhook answers with a non-2xx status, in which case the context is
///   [`Error::HttpStatus`] carrying the response body
pub async fn post_message(
    client: &Client,
    webhook_url: &str,
    message: &TeamsMessage,
) -> ModelResult<TextResponse> {
    let body = serde_json::to_vec(message)
        .change_context(Error::SerdeSerialize("Failed to serialize Teams message".to_string()))?;

    let response = client
        .post(webhook_url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .change_context(Error::ReqwestError("Failed to send request".to_string()))
        .attach_printable_lazy(|| format!("Webhook: {}", redact_webhook_url(webhook_url)))?;

    handle_text_response(response).await
}

/// Keeps scheme and host only; the path of an incoming webhook URL is its secret.
pub fn redact_webhook_url(webhook_url: &str) -> String {
    match reqwest::Url::parse(webhook_url) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}://{host}/...", url.scheme()),
            None => "<invalid webhook url>".to_string(),
        },
        Err(_) => "<invalid webhook url>".to_string(),
    }
}
