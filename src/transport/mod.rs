//! Transport layer: wire-format details (response normalization and
//! request-body encoding). No I/O happens here; parsers consume the
//! deserialized JSON tree and either return fully valid domain values or
//! fail loudly.

mod account;
mod auth;
mod datetime;
mod error;
mod matches;
mod messages;
mod profile;

pub use account::{
    encode_location_body, encode_preference_update, encode_report_body, encode_updates_body,
    encode_username_body,
};
pub use auth::{
    AuthResponseError, decode_login_response, decode_otp_send_response,
    decode_otp_validate_response, encode_login_body, encode_otp_request_body,
    encode_otp_validate_body,
};
pub use datetime::{DATETIME_FORMAT, parse_datetime};
pub use error::ParseError;
pub use matches::{encode_send_message_body, parse_matches};
pub use messages::parse_messages;
pub use profile::parse_profile;
