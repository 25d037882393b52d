use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::{AuthToken, OtpCode, PhoneNumber, RefreshToken, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum AuthResponseError {
    #[error("invalid auth payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("auth payload missing field: {field}")]
    MissingField { field: &'static str },

    #[error("auth payload contained an invalid value: {0}")]
    InvalidValue(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
struct OtpSendEnvelope {
    data: OtpSendData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OtpSendData {
    sms_sent: bool,
}

#[derive(Debug, Deserialize)]
struct OtpValidateEnvelope {
    data: OtpValidateData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OtpValidateData {
    validated: bool,
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    data: LoginData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginData {
    api_token: Option<String>,
}

pub fn encode_otp_request_body(phone: &PhoneNumber) -> Value {
    json!({ PhoneNumber::FIELD: phone.msisdn() })
}

pub fn encode_otp_validate_body(phone: &PhoneNumber, code: &OtpCode) -> Value {
    json!({
        OtpCode::FIELD: code.as_str(),
        PhoneNumber::FIELD: phone.msisdn(),
    })
}

pub fn encode_login_body(refresh_token: &RefreshToken) -> Value {
    json!({ RefreshToken::FIELD: refresh_token.as_str() })
}

/// Whether the server accepted the OTP request and sent the SMS.
pub fn decode_otp_send_response(raw: &Value) -> Result<bool, AuthResponseError> {
    let envelope = OtpSendEnvelope::deserialize(raw)?;
    Ok(envelope.data.sms_sent)
}

/// `None` when the code was rejected; otherwise the refresh token.
pub fn decode_otp_validate_response(
    raw: &Value,
) -> Result<Option<RefreshToken>, AuthResponseError> {
    let envelope = OtpValidateEnvelope::deserialize(raw)?;
    if !envelope.data.validated {
        return Ok(None);
    }
    let token = envelope
        .data
        .refresh_token
        .ok_or(AuthResponseError::MissingField {
            field: RefreshToken::FIELD,
        })?;
    Ok(Some(RefreshToken::new(token)?))
}

/// The bearer token for authenticated calls.
pub fn decode_login_response(raw: &Value) -> Result<AuthToken, AuthResponseError> {
    let envelope = LoginEnvelope::deserialize(raw)?;
    let token = envelope
        .data
        .api_token
        .ok_or(AuthResponseError::MissingField { field: "api_token" })?;
    Ok(AuthToken::new(token)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> PhoneNumber {
        PhoneNumber::parse(None, "+491701234567").unwrap()
    }

    #[test]
    fn otp_request_body_sends_the_msisdn() {
        assert_eq!(
            encode_otp_request_body(&phone()),
            json!({"phone_number": 491701234567u64})
        );
    }

    #[test]
    fn otp_validate_body_sends_code_and_msisdn() {
        let code = OtpCode::new("482910").unwrap();
        assert_eq!(
            encode_otp_validate_body(&phone(), &code),
            json!({"otp_code": "482910", "phone_number": 491701234567u64})
        );
    }

    #[test]
    fn login_body_sends_the_refresh_token() {
        let token = RefreshToken::new("r-1").unwrap();
        assert_eq!(
            encode_login_body(&token),
            json!({"refresh_token": "r-1"})
        );
    }

    #[test]
    fn otp_send_response_reads_the_flag() {
        assert!(decode_otp_send_response(&json!({"data": {"sms_sent": true}})).unwrap());
        assert!(!decode_otp_send_response(&json!({"data": {"sms_sent": false}})).unwrap());
        assert!(!decode_otp_send_response(&json!({"data": {}})).unwrap());
        assert!(decode_otp_send_response(&json!({})).is_err());
    }

    #[test]
    fn rejected_otp_yields_none() {
        let raw = json!({"data": {"validated": false}});
        assert_eq!(decode_otp_validate_response(&raw).unwrap(), None);
    }

    #[test]
    fn accepted_otp_yields_the_refresh_token() {
        let raw = json!({"data": {"validated": true, "refresh_token": "r-1"}});
        let token = decode_otp_validate_response(&raw).unwrap().unwrap();
        assert_eq!(token.as_str(), "r-1");
    }

    #[test]
    fn accepted_otp_without_token_is_an_error() {
        let raw = json!({"data": {"validated": true}});
        let err = decode_otp_validate_response(&raw).unwrap_err();
        assert!(matches!(
            err,
            AuthResponseError::MissingField {
                field: RefreshToken::FIELD
            }
        ));
    }

    #[test]
    fn login_response_yields_the_api_token() {
        let raw = json!({"data": {"api_token": "t-9"}});
        assert_eq!(decode_login_response(&raw).unwrap().as_str(), "t-9");

        let err = decode_login_response(&json!({"data": {}})).unwrap_err();
        assert!(matches!(
            err,
            AuthResponseError::MissingField { field: "api_token" }
        ));
    }
}
