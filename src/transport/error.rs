use crate::domain::UnknownDescriptor;

#[derive(Debug, thiserror::Error)]
/// Failure while normalizing a response payload into domain entities.
///
/// These errors always surface to the caller. The parsers never drop a field
/// they do not understand: that would corrupt the domain model invisibly.
pub enum ParseError {
    /// A profile descriptor entry outside the modeled vocabulary.
    #[error(transparent)]
    UnknownDescriptor(#[from] UnknownDescriptor),

    /// A mandatory profile field missing or of unexpected type/format.
    #[error("malformed profile: {reason}")]
    MalformedProfile { reason: String },

    /// A mandatory message field missing or an unparsable timestamp.
    #[error("malformed message: {reason}")]
    MalformedMessage { reason: String },

    /// The payload envelope did not have the expected shape.
    #[error("invalid response payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    pub(crate) fn malformed_profile(reason: impl Into<String>) -> Self {
        Self::MalformedProfile {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_message(reason: impl Into<String>) -> Self {
        Self::MalformedMessage {
            reason: reason.into(),
        }
    }
}
