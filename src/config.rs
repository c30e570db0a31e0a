//! Runtime configuration read from environment variables.

use std::env;

use crate::email::RESEND_API_BASE;

/// The sender address used when `EMAIL_FROM` is not set.
pub const DEFAULT_EMAIL_FROM: &str = "Finance App <onboarding@resend.dev>";

/// The settings for sending emails.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The Resend API key from `RESEND_API_KEY`.
    ///
    /// The server still starts without a key, but sending emails will fail.
    pub resend_api_key: Option<String>,
    /// The sender address from `EMAIL_FROM`.
    pub email_from: String,
    /// The Resend API base URL from `RESEND_API_BASE`.
    pub resend_api_base: String,
}

impl Config {
    /// Read the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the config with `lookup`, which returns the value of a variable
    /// if it is set.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let resend_api_key = get("RESEND_API_KEY");
        if resend_api_key.is_none() {
            tracing::warn!("RESEND_API_KEY is not set, emails cannot be sent.");
        }

        Self {
            resend_api_key,
            email_from: get("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_owned()),
            resend_api_base: get("RESEND_API_BASE").unwrap_or_else(|| RESEND_API_BASE.to_owned()),
        }
    }
}
