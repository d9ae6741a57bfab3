//! Remote registration API client.

use std::fmt;
use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body sent to the registration endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub username: String,
    pub password: String,
    pub email: String,
    pub mobile: String,
}

impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegistrationPayload")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("Invalid registration configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Registration API error: {0}")]
    Api(String),
}

pub type RegisterResult<T> = Result<T, RegisterError>;

/// Sends registration requests.
pub trait RegistrationClient {
    fn register(&self, payload: &RegistrationPayload) -> impl Future<Output = RegisterResult<()>>;
}

/// `reqwest`-backed client posting JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    endpoint: String,
    client: Client,
}

impl HttpRegistrationClient {
    pub fn new(endpoint: impl Into<String>) -> RegisterResult<Self> {
        let endpoint = endpoint.into().trim().to_string();
        if endpoint.is_empty() {
            return Err(RegisterError::InvalidConfiguration(
                "Registration endpoint must not be empty",
            ));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(RegisterError::InvalidConfiguration(
                "Registration endpoint must include http:// or https://",
            ));
        }

        Ok(Self {
            endpoint,
            client: Client::builder().build()?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RegistrationClient for HttpRegistrationClient {
    async fn register(&self, payload: &RegistrationPayload) -> RegisterResult<()> {
        tracing::info!("Registering account for {}", payload.username);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Registration rejected ({}): {}", status, body);
            return Err(RegisterError::Api(parse_api_error(status, &body)));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = payload.message.or(payload.msg).or(payload.error) {
            return format!("{} ({})", compact_text(&message), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

/// Trim and cap server text at 180 characters.
fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
