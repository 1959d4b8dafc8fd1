//! Inbound SNS invocation payload.
//!
//! Only the fields the relay reads are modelled; anything else SNS sends
//! (signatures, message attributes, ...) is ignored on deserialization.

use serde::Deserialize;

/// One invocation's batch of notification records.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SnsEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SnsEventRecord>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SnsEventRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SnsMessage {
    #[serde(default)]
    pub subject: Option<String>,
    /// JSON-encoded pipeline event, kept as the raw string SNS delivered.
    pub message: String,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub topic_arn: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl SnsMessage {
    pub fn new(subject: Option<String>, message: String) -> Self {
        Self {
            subject,
            message,
            message_id: None,
            topic_arn: None,
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_sns_event() {
        let payload = json!({
            "Records": [
                {
                    "EventSource": "aws:sns",
                    "EventVersion": "1.0",
                    "Sns": {
                        "Type": "Notification",
                        "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                        "TopicArn": "arn:aws:sns:us-east-1:123456789012:pipeline-events",
                        "Subject": "Pipeline update",
                        "Message": "{\"detail\":{\"state\":\"STARTED\"}}",
                        "Timestamp": "2024-01-01T00:00:00.000Z",
                        "MessageAttributes": {}
                    }
                }
            ]
        });

        let event: SnsEvent = serde_json::from_value(payload).unwrap();
        assert_eq!(event.records.len(), 1);
        let sns = &event.records[0].sns;
        assert_eq!(sns.subject.as_deref(), Some("Pipeline update"));
        assert_eq!(sns.message, "{\"detail\":{\"state\":\"STARTED\"}}");
        assert_eq!(
            sns.message_id.as_deref(),
            Some("95df01b4-ee98-5cb9-9903-4c221d41eb5e")
        );
        assert_eq!(sns.timestamp.as_deref(), Some("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_null_subject_is_absent() {
        let payload = json!({ "Records": [ { "Sns": { "Subject": null, "Message": "x" } } ] });
        let event: SnsEvent = serde_json::from_value(payload).unwrap();
        assert_eq!(event.records[0].sns, SnsMessage::new(None, "x".to_string()));
    }

    #[test]
    fn test_missing_records_is_rejected() {
        assert!(serde_json::from_value::<SnsEvent>(json!({ "records": [] })).is_err());
        assert!(serde_json::from_value::<SnsEvent>(json!({ "Records": {} })).is_err());
    }

    #[test]
    fn test_missing_message_is_rejected() {
        let payload = json!({ "Records": [ { "Sns": { "Subject": "only subject" } } ] });
        assert!(serde_json::from_value::<SnsEvent>(payload).is_err());
    }
}
