use serde::Serialize;

use super::constants::{ADAPTIVE_CARD_CONTENT_TYPE, ADAPTIVE_CARD_SCHEMA, ADAPTIVE_CARD_VERSION};
use crate::models::card::{CardTone, Fact, PresentationCard};

/// Top-level body accepted by a Teams incoming webhook.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamsMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    /// Always serialized, Teams expects an explicit `null`.
    pub content_url: Option<String>,
    pub content: AdaptiveCard,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub version: String,
    #[serde(rename = "msTeams")]
    pub ms_teams: MsTeams,
    pub body: Vec<CardElement>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MsTeams {
    pub width: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock(TextBlock),
    FactSet(FactSet),
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TextBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CardTone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FactSet {
    pub facts: Vec<Fact>,
    pub separator: bool,
}

impl From<&PresentationCard> for TeamsMessage {
    fn from(card: &PresentationCard) -> Self {
        let mut body = Vec::with_capacity(2 + card.sections.len());
        body.push(CardElement::TextBlock(TextBlock {
            text: card.title.clone(),
            size: Some("large".to_string()),
            weight: Some("bolder".to_string()),
            color: Some(card.tone),
            ..Default::default()
        }));
        if !card.facts.is_empty() {
            body.push(CardElement::FactSet(FactSet {
                facts: card.facts.clone(),
                separator: true,
            }));
        }
        body.extend(card.sections.iter().map(|section| {
            CardElement::TextBlock(TextBlock {
                text: section.clone(),
                wrap: Some(true),
                separator: Some(true),
                ..Default::default()
            })
        }));

        TeamsMessage {
            message_type: "message".to_string(),
            attachments: vec![Attachment {
                content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
                content_url: None,
                content: AdaptiveCard {
                    schema: ADAPTIVE_CARD_SCHEMA.to_string(),
                    card_type: "AdaptiveCard".to_string(),
                    version: ADAPTIVE_CARD_VERSION.to_string(),
                    ms_teams: MsTeams {
                        width: "full".to_string(),
                    },
                    body,
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status_card() -> PresentationCard {
        PresentationCard {
            title: "✅ Pipeline: build-pipe".to_string(),
            tone: CardTone::Good,
            facts: vec![Fact::new("Pipeline", "build-pipe"), Fact::new("Stage", "Deploy")],
            sections: vec!["**Summary:** all green".to_string()],
        }
    }

    #[test]
    fn test_envelope_shape() {
        let message = TeamsMessage::from(&status_card());
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "message",
                "attachments": [{
                    "contentType": "application/vnd.microsoft.card.adaptive",
                    "contentUrl": null,
                    "content": {
                        "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                        "type": "AdaptiveCard",
                        "version": "1.2",
                        "msTeams": { "width": "full" },
                        "body": [
                            {
                                "type": "TextBlock",
                                "text": "✅ Pipeline: build-pipe",
                                "size": "large",
                                "weight": "bolder",
                                "color": "good"
                            },
                            {
                                "type": "FactSet",
                                "facts": [
                                    { "title": "Pipeline", "value": "build-pipe" },
                                    { "title": "Stage", "value": "Deploy" }
                                ],
                                "separator": true
                            },
                            {
                                "type": "TextBlock",
                                "text": "**Summary:** all green",
                                "wrap": true,
                                "separator": true
                            }
                        ]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_card_without_facts_has_no_fact_set() {
        let card = PresentationCard {
            title: "Alert".to_string(),
            tone: CardTone::Attention,
            facts: vec![],
            sections: vec!["not json".to_string()],
        };
        let message = TeamsMessage::from(&card);
        let body = &message.attachments[0].content.body;

        assert_eq!(body.len(), 2);
        assert!(
            body.iter()
                .all(|element| matches!(element, CardElement::TextBlock(_)))
        );
        match &body[1] {
            CardElement::TextBlock(block) => assert_eq!(block.text, "not json"),
            other => panic!("unexpected element: {other:?}"),
        }
    }
}
