//! Microsoft Teams incoming-webhook integration.
//!
//! [`adaptive_card`] wraps a [`PresentationCard`](crate::models::card::PresentationCard)
//! in the message envelope Teams expects, [`client::TeamsWebhookClient`] posts it.

pub mod adaptive_card;
pub mod api;
pub mod client;
pub mod constants;
