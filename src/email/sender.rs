//! Delivers rendered emails through an email provider.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The default base URL of the Resend API.
pub const RESEND_API_BASE: &str = "https://api.resend.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    /// The sender, e.g. "Finance App <onboarding@resend.dev>".
    pub from: String,
    /// The recipient addresses.
    pub to: Vec<String>,
    /// The subject line.
    pub subject: String,
    /// The HTML body.
    pub html: String,
}

/// The provider's acknowledgement of an accepted email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// The provider's ID for the email.
    pub id: String,
}

/// The ways that delivering an email can fail.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum DeliveryError {
    /// No API key was configured for the provider.
    #[error("no email provider API key is configured, set RESEND_API_KEY to send emails")]
    MissingCredential,

    /// The email has no recipient.
    #[error("the email has no recipient address")]
    MissingRecipient,

    /// The HTTP client could not be created.
    #[error("could not create the HTTP client: {0}")]
    Client(String),

    /// The provider could not be reached.
    #[error("could not reach the email provider: {0}")]
    Network(String),

    /// The provider responded with an error status.
    #[error("the email provider rejected the email with status {status}: {message}")]
    Provider {
        /// The HTTP status code.
        status: u16,
        /// The provider's error message.
        message: String,
    },

    /// The provider accepted the email but its response could not be parsed.
    #[error("could not parse the email provider's response: {0}")]
    InvalidResponse(String),
}

/// Something that can deliver an [EmailMessage].
pub trait EmailSender {
    /// Send `message`, returning the provider's receipt.
    fn send(
        &self,
        message: &EmailMessage,
    ) -> impl Future<Output = Result<DeliveryReceipt, DeliveryError>> + Send;
}

/// Sends emails with the [Resend](https://resend.com) HTTP API.
#[derive(Debug, Clone)]
pub struct ResendSender {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl ResendSender {
    /// Create a sender for the API at `api_base`.
    ///
    /// A missing `api_key` is not an error here, sending will fail with
    /// [DeliveryError::MissingCredential] instead.
    ///
    /// # Errors
    /// Returns [DeliveryError::Client] if the HTTP client cannot be built.
    pub fn new(api_key: Option<String>, api_base: &str) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("welth/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| DeliveryError::Client(error.to_string()))?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_owned(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }
}

impl EmailSender for ResendSender {
    /// POST /emails
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, DeliveryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(DeliveryError::MissingCredential)?;
        let url = format!("{}/emails", self.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(message)
            .send()
            .await
            .map_err(|error| DeliveryError::Network(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Provider {
                status: status.as_u16(),
                message: provider_error_message(body),
            });
        }

        response
            .json::<DeliveryReceipt>()
            .await
            .map_err(|error| DeliveryError::InvalidResponse(error.to_string()))
    }
}

/// Resend reports errors as `{"statusCode": 422, "name": "...", "message": "..."}`.
fn provider_error_message(body: String) -> String {
    #[derive(Deserialize)]
    struct ProviderError {
        message: String,
    }

    match serde_json::from_str::<ProviderError>(&body) {
        Ok(error) => error.message,
        Err(_) => body,
    }
}
