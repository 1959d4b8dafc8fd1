use crate::error::{Error, ModelResult};
use error_stack::{ResultExt, report};
use reqwest::Response;
use tracing::debug;

/// Status and raw body of a successful webhook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub status: u16,
    pub body: String,
}

/// Reads the response body as text and splits on the status code.
///
/// Webhook endpoints answer with plain text (Teams replies `1`), so the body is
/// never deserialized. Any non-2xx status becomes [`Error::HttpStatus`] with the
/// body kept for diagnostics.
pub async fn handle_text_response(response: Response) -> ModelResult<TextResponse> {
    let status = response.status().as_u16();
    debug!(status, "Webhook response received");
    let body = response.text().await.change_context(Error::ReqwestError(
        "Failed to get text from response".to_string(),
    ))?;

    match status {
        200..=299 => Ok(TextResponse { status, body }),
        _ => Err(report!(Error::HttpStatus { status, body })),
    }
}
