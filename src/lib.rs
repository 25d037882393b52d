//! Typed Rust client for a private mobile dating-service HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! that normalizes the service's JSON payloads, and a small client layer
//! orchestrating requests. Authentication is an SMS one-time-password flow
//! that yields the opaque bearer token every other call carries.
//!
//! ```rust,no_run
//! use emberlink::{EmberClient, OtpCode, PhoneNumber, SmsAuth};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), emberlink::EmberError> {
//!     let auth = SmsAuth::new();
//!     let phone = PhoneNumber::parse(None, "+491701234567")?;
//!     auth.request_otp(&phone).await?;
//!
//!     // ... read the code the user received ...
//!     let code = OtpCode::new("482910")?;
//!     let Some(refresh) = auth.validate_otp(&phone, &code).await? else {
//!         return Ok(()); // code rejected
//!     };
//!     let token = auth.exchange_refresh_token(&refresh).await?;
//!
//!     let client = EmberClient::new(token);
//!     let page = client.list_matches(None).await?;
//!     println!("{} matches on the first page", page.matches.len());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod transport;

pub use client::{EmberClient, EmberClientBuilder, EmberError, SmsAuth, SmsAuthBuilder};
pub use domain::{
    AdditionalInfo, AuthToken, DescriptorAttribute, GenderFilter, Match, MatchId, MatchesPage,
    Message, MessageId, MessageText, MessagesPage, OtpCode, PageToken, PhoneNumber, Position,
    PreferenceUpdate, Profile, ProfileId, RefreshToken, ReportCause, UnknownDescriptor,
    ValidationError,
};
pub use transport::{ParseError, parse_matches, parse_messages, parse_profile};
