//! Request-body encoding for account-level calls (preferences, location,
//! web profile username, activity updates, reports).

use serde_json::{Map, Value, json};

use crate::domain::{Position, PreferenceUpdate, ReportCause};

/// Encode a partial preference update; only set fields appear in the body.
pub fn encode_preference_update(update: &PreferenceUpdate) -> Value {
    let mut body = Map::new();
    if let Some((min, max)) = update.age_filter() {
        body.insert("age_filter_min".to_owned(), json!(min));
        body.insert("age_filter_max".to_owned(), json!(max));
    }
    if let Some(distance) = update.distance_filter() {
        body.insert("distance_filter".to_owned(), json!(distance));
    }
    if let Some(filter) = update.gender_filter() {
        body.insert("gender".to_owned(), json!(filter.code()));
    }
    if let Some(discoverable) = update.discoverable() {
        body.insert("discoverable".to_owned(), json!(discoverable));
    }
    Value::Object(body)
}

pub fn encode_location_body(position: Position) -> Value {
    json!({ "lat": position.lat(), "lon": position.lon() })
}

pub fn encode_username_body(username: &str) -> Value {
    json!({ "username": username })
}

/// `last_activity_date` defaults to the beginning of time when absent.
pub fn encode_updates_body(last_activity_date: Option<&str>) -> Value {
    json!({ "last_activity_date": last_activity_date.unwrap_or("") })
}

pub fn encode_report_body(cause: &ReportCause) -> Value {
    match cause.explanation() {
        Some(text) => json!({ "cause": cause.code(), "text": text }),
        None => json!({ "cause": cause.code() }),
    }
}
