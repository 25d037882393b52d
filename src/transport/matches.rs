use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::{Match, MatchId, MatchesPage, MessageText, PageToken, ProfileId};
use crate::transport::error::ParseError;

#[derive(Debug, Deserialize)]
struct MatchesEnvelope {
    data: MatchesData,
}

#[derive(Debug, Deserialize)]
struct MatchesData {
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(default)]
    matches: Vec<MatchWire>,
}

#[derive(Debug, Deserialize)]
struct MatchWire {
    #[serde(rename = "_id")]
    id: String,
    person: PersonWire,
}

#[derive(Debug, Deserialize)]
struct PersonWire {
    #[serde(rename = "_id")]
    id: String,
}

/// Normalize a paginated match-list payload.
///
/// Source order is preserved; no deduplication or cross-page merging happens
/// here. An absent `next_page_token` means the final page.
pub fn parse_matches(raw: &Value) -> Result<MatchesPage, ParseError> {
    let envelope = MatchesEnvelope::deserialize(raw)?;

    let matches = envelope
        .data
        .matches
        .into_iter()
        .map(|wire| {
            let match_id = MatchId::new(wire.id).map_err(invalid_value)?;
            let profile_id = ProfileId::new(wire.person.id).map_err(invalid_value)?;
            Ok(Match {
                match_id,
                profile_id,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(MatchesPage {
        matches,
        next_page_token: page_token(envelope.data.next_page_token),
    })
}

fn invalid_value(err: crate::domain::ValidationError) -> ParseError {
    ParseError::Json(serde::de::Error::custom(err))
}

/// Map an optional raw cursor to [`PageToken`], treating blank as absent.
pub(crate) fn page_token(raw: Option<String>) -> Option<PageToken> {
    raw.filter(|token| !token.trim().is_empty())
        .map(PageToken::new)
}

/// Body for sending a chat message into a match.
pub fn encode_send_message_body(text: &MessageText) -> Value {
    json!({ MessageText::FIELD: text.as_str() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_matches_in_source_order_with_token() {
        let payload = json!({
            "data": {
                "next_page_token": "abc",
                "matches": [
                    {"_id": "m2", "person": {"_id": "p2"}},
                    {"_id": "m1", "person": {"_id": "p1"}}
                ]
            }
        });
        let page = parse_matches(&payload).unwrap();
        assert_eq!(page.next_page_token, Some(PageToken::new("abc")));
        assert_eq!(page.matches.len(), 2);
        assert_eq!(page.matches[0].match_id.as_str(), "m2");
        assert_eq!(page.matches[0].profile_id.as_str(), "p2");
        assert_eq!(page.matches[1].match_id.as_str(), "m1");
    }

    #[test]
    fn absent_token_means_final_page() {
        let payload = json!({
            "data": {
                "matches": [{"_id": "m1", "person": {"_id": "p1"}}]
            }
        });
        let page = parse_matches(&payload).unwrap();
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        let payload = json!({
            "data": {
                "next_page_token": "  ",
                "matches": []
            }
        });
        let page = parse_matches(&payload).unwrap();
        assert_eq!(page.next_page_token, None);
        assert!(page.matches.is_empty());
    }

    #[test]
    fn missing_data_object_is_a_payload_error() {
        let err = parse_matches(&json!({"matches": []})).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn match_entry_without_person_is_a_payload_error() {
        let payload = json!({
            "data": {
                "matches": [{"_id": "m1"}]
            }
        });
        let err = parse_matches(&payload).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn send_message_body_uses_the_message_field() {
        let text = MessageText::new("hey!").unwrap();
        assert_eq!(encode_send_message_body(&text), json!({"message": "hey!"}));
    }
}
