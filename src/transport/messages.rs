use serde::Deserialize;
use serde_json::Value;

use crate::domain::{MatchId, Message, MessageId, MessagesPage, ProfileId, ValidationError};
use crate::transport::datetime;
use crate::transport::error::ParseError;
use crate::transport::matches::page_token;

#[derive(Debug, Deserialize)]
struct MessagesEnvelope {
    data: MessagesData,
}

#[derive(Debug, Deserialize)]
struct MessagesData {
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(default)]
    messages: Vec<MessageWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MessageWire {
    #[serde(rename = "_id")]
    id: Option<String>,
    match_id: Option<String>,
    message: Option<String>,
    sent_date: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

/// Normalize a paginated message-list payload.
///
/// A single malformed entry fails the entire call: a page is either fully
/// valid or rejected, never partially returned. Source order is preserved.
pub fn parse_messages(raw: &Value) -> Result<MessagesPage, ParseError> {
    let envelope = MessagesEnvelope::deserialize(raw)?;

    let messages = envelope
        .data
        .messages
        .into_iter()
        .map(parse_message)
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(MessagesPage {
        messages,
        next_page_token: page_token(envelope.data.next_page_token),
    })
}

fn parse_message(wire: MessageWire) -> Result<Message, ParseError> {
    let id = MessageId::new(require(wire.id, "_id")?).map_err(invalid_value)?;
    let match_id = MatchId::new(require(wire.match_id, "match_id")?).map_err(invalid_value)?;
    let message = require(wire.message, "message")?;
    let sent_date_raw = require(wire.sent_date, "sent_date")?;
    let sent_date = datetime::parse_datetime(&sent_date_raw).map_err(|err| {
        ParseError::malformed_message(format!("invalid sent_date {sent_date_raw:?}: {err}"))
    })?;
    let from_id = ProfileId::new(require(wire.from, "from")?).map_err(invalid_value)?;
    let to_id = ProfileId::new(require(wire.to, "to")?).map_err(invalid_value)?;

    Ok(Message {
        id,
        sent_date,
        message,
        from_id,
        to_id,
        match_id,
    })
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ParseError> {
    value.ok_or_else(|| ParseError::malformed_message(format!("missing mandatory field `{field}`")))
}

fn invalid_value(err: ValidationError) -> ParseError {
    ParseError::malformed_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::PageToken;

    use super::*;

    fn message_entry(id: &str) -> Value {
        json!({
            "_id": id,
            "match_id": "m1",
            "message": "see you at 8",
            "sent_date": "2023-06-01T18:04:11.000000+0000",
            "from": "p1",
            "to": "p2"
        })
    }

    #[test]
    fn parses_messages_in_source_order_with_token() {
        let payload = json!({
            "data": {
                "next_page_token": "tok-2",
                "messages": [message_entry("b"), message_entry("a")]
            }
        });
        let page = parse_messages(&payload).unwrap();
        assert_eq!(page.next_page_token, Some(PageToken::new("tok-2")));
        assert_eq!(page.messages.len(), 2);
        assert_eq!(page.messages[0].id.as_str(), "b");
        assert_eq!(page.messages[1].id.as_str(), "a");

        let first = &page.messages[0];
        assert_eq!(first.match_id.as_str(), "m1");
        assert_eq!(first.message, "see you at 8");
        assert_eq!(first.from_id.as_str(), "p1");
        assert_eq!(first.to_id.as_str(), "p2");
    }

    #[test]
    fn absent_token_means_final_page() {
        let payload = json!({"data": {"messages": []}});
        let page = parse_messages(&payload).unwrap();
        assert_eq!(page.next_page_token, None);
        assert!(page.messages.is_empty());
    }

    #[test]
    fn one_bad_timestamp_fails_the_whole_page() {
        let mut bad = message_entry("b");
        bad["sent_date"] = json!("yesterday");
        let payload = json!({
            "data": {
                "messages": [message_entry("a"), bad]
            }
        });
        let err = parse_messages(&payload).unwrap_err();
        match err {
            ParseError::MalformedMessage { reason } => {
                assert!(reason.contains("sent_date"), "{reason}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_mandatory_message_field_is_malformed_message() {
        for field in ["_id", "match_id", "message", "sent_date", "from", "to"] {
            let mut entry = message_entry("a");
            entry.as_object_mut().unwrap().remove(field);
            let payload = json!({"data": {"messages": [entry]}});
            let err = parse_messages(&payload).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedMessage { .. }),
                "{field}: {err:?}"
            );
        }
    }

    #[test]
    fn missing_data_object_is_a_payload_error() {
        let err = parse_messages(&json!({"messages": []})).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
