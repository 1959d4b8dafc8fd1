use error_stack::{ResultExt, report};
use reqwest::Url;

use crate::error::{Error, RelayResult};

pub const WEBHOOK_URL_ENV: &str = "TEAMS_WEBHOOK_URL";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Used when `TEAMS_WEBHOOK_URL` is not set. Points at no real channel, so a
/// relay deployed without configuration fails loudly on its first delivery.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://example.webhook.office.com/webhookb2/unconfigured/IncomingWebhook/unconfigured";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Destination for every dispatched card.
    pub webhook_url: String,
    /// Single-line JSON logs instead of pretty output.
    pub prod_logs: bool,
}

impl RelayConfig {
    pub fn new(webhook_url: impl Into<String>) -> RelayResult<Self> {
        let webhook_url = webhook_url.into();
        validate_webhook_url(&webhook_url)?;
        Ok(Self {
            webhook_url,
            prod_logs: false,
        })
    }

    pub fn with_prod_logs(mut self, prod_logs: bool) -> Self {
        self.prod_logs = prod_logs;
        self
    }

    /// Environment overrides take precedence over [`DEFAULT_WEBHOOK_URL`].
    pub fn from_env() -> RelayResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RelayResult<Self> {
        let webhook_url = lookup(WEBHOOK_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());
        let prod_logs = lookup(LOG_FORMAT_ENV)
            .is_some_and(|format| format.trim().eq_ignore_ascii_case("json"));

        Ok(Self::new(webhook_url)
            .attach_printable_lazy(|| format!("Read from {WEBHOOK_URL_ENV}"))?
            .with_prod_logs(prod_logs))
    }
}

fn validate_webhook_url(webhook_url: &str) -> RelayResult<()> {
    let url = Url::parse(webhook_url)
        .change_context(Error::Config("Invalid webhook URL".to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(report!(Error::Config("Invalid webhook URL".to_string()))
            .attach_printable(format!("Unsupported scheme: {scheme}"))),
    }
}
