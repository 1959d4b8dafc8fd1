//! Platform-neutral presentation card.
//!
//! A card is what the relay wants to show; turning it into a concrete chat
//! payload happens in the platform module (see [`crate::teams`]).

use serde::Serialize;

/// Accent used for the card title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    Good,
    Attention,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationCard {
    pub title: String,
    pub tone: CardTone,
    /// Rendered in order as a fact table; may be empty.
    pub facts: Vec<Fact>,
    /// Wrapped text blocks rendered after the fact table.
    pub sections: Vec<String>,
}
