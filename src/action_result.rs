//! The result record returned by the seeding and email actions.

use serde::{Deserialize, Serialize};

/// The outcome of an action, e.g. seeding demo data or sending an email.
///
/// Actions never return errors directly. Failures are logged and reported via
/// `success: false` and a human readable `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the action succeeded.
    pub success: bool,
    /// A summary of what the action did.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    /// Why the action failed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    /// Any data returned by the action, e.g. the email provider's response.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<serde_json::Value>,
}

impl ActionResult {
    /// A successful result with no further details.
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
            error: None,
            data: None,
        }
    }

    /// A successful result with a summary message.
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success()
        }
    }

    /// A successful result carrying `data`.
    pub fn success_with_data(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::success()
        }
    }

    /// A failed result. `error` is usually the display string of an error.
    pub fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
            data: None,
        }
    }
}
