//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::domain::{
    AuthToken, MatchId, MatchesPage, MessageText, MessagesPage, OtpCode, PageToken, PhoneNumber,
    Position, PreferenceUpdate, Profile, ProfileId, RefreshToken, ReportCause, ValidationError,
};
use crate::transport::{self, AuthResponseError, ParseError};

const DEFAULT_HOST: &str = "https://api.gotinder.com";
const DEFAULT_APP_VERSION: &str = "6.9.4";
const DEFAULT_PLATFORM: &str = "ios";
const DEFAULT_USER_AGENT: &str = "Tinder/7.5.3 (iPhone; iOS 10.3.2; Scale/2.00)";

/// Page size requested from the match list endpoint.
const MATCHES_PAGE_SIZE: u16 = 60;
/// Page size requested from the message history endpoint.
const MESSAGES_PAGE_SIZE: u16 = 100;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        method: Method,
        url: Url,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        method: Method,
        url: Url,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = match method {
                Method::Get => self.client.get(url),
                Method::Post => self.client.post(url),
                Method::Put => self.client.put(url),
                Method::Delete => self.client.delete(url),
            };
            for (name, value) in headers {
                request = request.header(name, value);
            }
            if let Some(body) = body {
                request = request.body(body);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsAuth`] and [`EmberClient`].
///
/// Failures are always surfaced; no call logs-and-returns-empty.
pub enum EmberError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Body(#[source] serde_json::Error),

    /// A modeled response payload could not be normalized.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// An authentication response payload could not be decoded.
    #[error("auth response error: {0}")]
    AuthResponse(#[from] AuthResponseError),

    /// The configured host or a derived endpoint URL is invalid.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Client identity presented to the API on every call.
struct AppIdentity {
    host: String,
    app_version: String,
    platform: String,
    user_agent: String,
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            app_version: DEFAULT_APP_VERSION.to_owned(),
            platform: DEFAULT_PLATFORM.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl AppIdentity {
    fn endpoint(&self, path: &str) -> Result<Url, EmberError> {
        let base = Url::parse(&self.host)?;
        Ok(base.join(path)?)
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("app_version".to_owned(), self.app_version.clone()),
            ("platform".to_owned(), self.platform.clone()),
            ("content-type".to_owned(), "application/json".to_owned()),
            ("User-Agent".to_owned(), self.user_agent.clone()),
        ]
    }
}

async fn dispatch(
    http: &dyn HttpTransport,
    method: Method,
    url: Url,
    headers: Vec<(String, String)>,
    body: Option<Value>,
) -> Result<Value, EmberError> {
    let body = body.map(|value| value.to_string());
    let response = http
        .send(method, url, headers, body)
        .await
        .map_err(EmberError::Transport)?;

    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(EmberError::HttpStatus {
            status: response.status,
            body,
        });
    }

    serde_json::from_str(&response.body).map_err(EmberError::Body)
}

#[derive(Clone)]
/// Unauthenticated SMS one-time-password flow.
///
/// Three steps: [`request_otp`](Self::request_otp) triggers the SMS,
/// [`validate_otp`](Self::validate_otp) trades the received code for a
/// refresh token, and [`exchange_refresh_token`](Self::exchange_refresh_token)
/// turns that into the bearer token [`EmberClient`] needs.
pub struct SmsAuth {
    identity: AppIdentity,
    http: Arc<dyn HttpTransport>,
}

impl SmsAuth {
    /// Create a flow against the default host.
    pub fn new() -> Self {
        Self {
            identity: AppIdentity::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a flow with custom settings.
    pub fn builder() -> SmsAuthBuilder {
        SmsAuthBuilder::default()
    }

    /// Ask the server to send an OTP SMS to `phone`.
    ///
    /// Returns whether the server reports the SMS as sent.
    pub async fn request_otp(&self, phone: &PhoneNumber) -> Result<bool, EmberError> {
        let url = self.identity.endpoint("/v2/auth/sms/send?auth_type=sms")?;
        let payload = dispatch(
            self.http.as_ref(),
            Method::Post,
            url,
            self.identity.headers(),
            Some(transport::encode_otp_request_body(phone)),
        )
        .await?;
        Ok(transport::decode_otp_send_response(&payload)?)
    }

    /// Trade a received OTP code for a refresh token.
    ///
    /// Returns `None` when the server rejects the code.
    pub async fn validate_otp(
        &self,
        phone: &PhoneNumber,
        code: &OtpCode,
    ) -> Result<Option<RefreshToken>, EmberError> {
        let url = self
            .identity
            .endpoint("/v2/auth/sms/validate?auth_type=sms")?;
        let payload = dispatch(
            self.http.as_ref(),
            Method::Post,
            url,
            self.identity.headers(),
            Some(transport::encode_otp_validate_body(phone, code)),
        )
        .await?;
        Ok(transport::decode_otp_validate_response(&payload)?)
    }

    /// Trade a refresh token for the API bearer token.
    pub async fn exchange_refresh_token(
        &self,
        refresh_token: &RefreshToken,
    ) -> Result<AuthToken, EmberError> {
        let url = self.identity.endpoint("/v2/auth/login/sms")?;
        let payload = dispatch(
            self.http.as_ref(),
            Method::Post,
            url,
            self.identity.headers(),
            Some(transport::encode_login_body(refresh_token)),
        )
        .await?;
        Ok(transport::decode_login_response(&payload)?)
    }
}

impl Default for SmsAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for [`SmsAuth`].
pub struct SmsAuthBuilder {
    identity: AppIdentity,
    timeout: Option<Duration>,
}

impl SmsAuthBuilder {
    /// Override the API host (scheme + authority).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.identity.host = host.into();
        self
    }

    /// Override the reported app version.
    pub fn app_version(mut self, app_version: impl Into<String>) -> Self {
        self.identity.app_version = app_version.into();
        self
    }

    /// Override the reported platform.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.identity.platform = platform.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.identity.user_agent = user_agent.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build an [`SmsAuth`].
    pub fn build(self) -> Result<SmsAuth, EmberError> {
        let client = build_reqwest_client(self.timeout)?;
        Ok(SmsAuth {
            identity: self.identity,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn build_reqwest_client(timeout: Option<Duration>) -> Result<reqwest::Client, EmberError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| EmberError::Transport(Box::new(err)))
}

#[derive(Clone)]
/// Authenticated API client.
///
/// Carries the bearer token and app identity headers on every call. The
/// profile, match-list, and message-history endpoints return typed domain
/// values; the remaining calls return the deserialized JSON payload as-is
/// since their bodies are not modeled.
pub struct EmberClient {
    auth_token: AuthToken,
    identity: AppIdentity,
    http: Arc<dyn HttpTransport>,
}

impl EmberClient {
    /// Create a client against the default host.
    ///
    /// For more customization, use [`EmberClient::builder`].
    pub fn new(auth_token: AuthToken) -> Self {
        Self {
            auth_token,
            identity: AppIdentity::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth_token: AuthToken) -> EmberClientBuilder {
        EmberClientBuilder::new(auth_token)
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = self.identity.headers();
        headers.push((
            AuthToken::FIELD.to_owned(),
            self.auth_token.as_str().to_owned(),
        ));
        headers
    }

    async fn get(&self, url: Url) -> Result<Value, EmberError> {
        dispatch(self.http.as_ref(), Method::Get, url, self.headers(), None).await
    }

    async fn post(&self, url: Url, body: Option<Value>) -> Result<Value, EmberError> {
        dispatch(self.http.as_ref(), Method::Post, url, self.headers(), body).await
    }

    /// Fetch and normalize another user's profile.
    pub async fn get_profile(&self, person: &ProfileId) -> Result<Profile, EmberError> {
        let url = self
            .identity
            .endpoint(&format!("/user/{}", person.as_str()))?;
        let payload = self.get(url).await?;
        Ok(transport::parse_profile(&payload)?)
    }

    /// One page of the account's matches, optionally continued from a cursor.
    pub async fn list_matches(
        &self,
        page_token: Option<&PageToken>,
    ) -> Result<MatchesPage, EmberError> {
        let mut url = self.identity.endpoint("/v2/matches")?;
        url.query_pairs_mut()
            .append_pair("count", &MATCHES_PAGE_SIZE.to_string());
        if let Some(token) = page_token {
            url.query_pairs_mut()
                .append_pair(PageToken::FIELD, token.as_str());
        }
        let payload = self.get(url).await?;
        Ok(transport::parse_matches(&payload)?)
    }

    /// One page of a match's message history, newest first (server order).
    pub async fn list_messages(
        &self,
        match_id: &MatchId,
        page_token: Option<&PageToken>,
    ) -> Result<MessagesPage, EmberError> {
        let mut url = self
            .identity
            .endpoint(&format!("/v2/matches/{}/messages", match_id.as_str()))?;
        url.query_pairs_mut()
            .append_pair("count", &MESSAGES_PAGE_SIZE.to_string());
        if let Some(token) = page_token {
            url.query_pairs_mut()
                .append_pair(PageToken::FIELD, token.as_str());
        }
        let payload = self.get(url).await?;
        Ok(transport::parse_messages(&payload)?)
    }

    /// Send a chat message into a match.
    pub async fn send_message(
        &self,
        match_id: &MatchId,
        text: &MessageText,
    ) -> Result<Value, EmberError> {
        let url = self
            .identity
            .endpoint(&format!("/user/matches/{}", match_id.as_str()))?;
        self.post(url, Some(transport::encode_send_message_body(text)))
            .await
    }

    /// Like (swipe right on) a profile.
    pub async fn like(&self, person: &ProfileId) -> Result<Value, EmberError> {
        let url = self
            .identity
            .endpoint(&format!("/like/{}", person.as_str()))?;
        self.get(url).await
    }

    /// Pass on (swipe left on) a profile.
    pub async fn dislike(&self, person: &ProfileId) -> Result<Value, EmberError> {
        let url = self
            .identity
            .endpoint(&format!("/pass/{}", person.as_str()))?;
        self.get(url).await
    }

    /// Superlike a profile.
    pub async fn superlike(&self, person: &ProfileId) -> Result<Value, EmberError> {
        let url = self
            .identity
            .endpoint(&format!("/like/{}/super", person.as_str()))?;
        self.post(url, None).await
    }

    /// Report a profile.
    pub async fn report(
        &self,
        person: &ProfileId,
        cause: &ReportCause,
    ) -> Result<Value, EmberError> {
        let url = self
            .identity
            .endpoint(&format!("/report/{}", person.as_str()))?;
        self.post(url, Some(transport::encode_report_body(cause)))
            .await
    }

    /// The account's own profile data.
    pub async fn get_self(&self) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/profile")?;
        self.get(url).await
    }

    /// Apply a partial discovery-preference update.
    pub async fn update_preferences(
        &self,
        update: &PreferenceUpdate,
    ) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/profile")?;
        self.post(url, Some(transport::encode_preference_update(update)))
            .await
    }

    /// The current recommendation feed.
    pub async fn get_recommendations(&self) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/v2/recs/core?locale=en-US")?;
        self.get(url).await
    }

    /// All account activity since `last_activity_date` (all time when `None`).
    pub async fn get_updates(
        &self,
        last_activity_date: Option<&str>,
    ) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/updates")?;
        self.post(
            url,
            Some(transport::encode_updates_body(last_activity_date)),
        )
        .await
    }

    /// Account metadata (products, rating, tutorials, ...).
    pub async fn get_meta(&self) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/meta")?;
        self.get(url).await
    }

    /// Raw record of a single match.
    pub async fn match_info(&self, match_id: &MatchId) -> Result<Value, EmberError> {
        let url = self
            .identity
            .endpoint(&format!("/matches/{}", match_id.as_str()))?;
        self.get(url).await
    }

    /// Move the account's location (requires the passport feature).
    pub async fn update_location(&self, position: Position) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/passport/user/travel")?;
        self.post(url, Some(transport::encode_location_body(position)))
            .await
    }

    /// Reset the account's location back to the real one.
    pub async fn reset_location(&self) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/passport/user/reset")?;
        self.post(url, None).await
    }

    /// Set the public web profile username.
    pub async fn set_username(&self, username: &str) -> Result<Value, EmberError> {
        if username.trim().is_empty() {
            return Err(ValidationError::Empty { field: "username" }.into());
        }
        let url = self.identity.endpoint("/profile/username")?;
        dispatch(
            self.http.as_ref(),
            Method::Put,
            url,
            self.headers(),
            Some(transport::encode_username_body(username)),
        )
        .await
    }

    /// Clear the public web profile username.
    pub async fn reset_username(&self) -> Result<Value, EmberError> {
        let url = self.identity.endpoint("/profile/username")?;
        dispatch(self.http.as_ref(), Method::Delete, url, self.headers(), None).await
    }
}

#[derive(Debug, Clone)]
/// Builder for [`EmberClient`].
///
/// Use this when you need to customize the host, timeout, or the identity
/// headers the app presents.
pub struct EmberClientBuilder {
    auth_token: AuthToken,
    identity: AppIdentity,
    timeout: Option<Duration>,
}

impl EmberClientBuilder {
    /// Create a builder with the default host and identity.
    pub fn new(auth_token: AuthToken) -> Self {
        Self {
            auth_token,
            identity: AppIdentity::default(),
            timeout: None,
        }
    }

    /// Override the API host (scheme + authority).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.identity.host = host.into();
        self
    }

    /// Override the reported app version.
    pub fn app_version(mut self, app_version: impl Into<String>) -> Self {
        self.identity.app_version = app_version.into();
        self
    }

    /// Override the reported platform.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.identity.platform = platform.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.identity.user_agent = user_agent.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build an [`EmberClient`].
    pub fn build(self) -> Result<EmberClient, EmberError> {
        let client = build_reqwest_client(self.timeout)?;
        Ok(EmberClient {
            auth_token: self.auth_token,
            identity: self.identity,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}
