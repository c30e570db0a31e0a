//! Renders a requested email and hands it to the provider.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    action_result::ActionResult,
    email::{
        report::EmailTemplateProps,
        sender::{DeliveryError, EmailMessage, EmailSender},
        template::render_email_props,
    },
};

/// A request to render and send one email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendEmailRequest {
    /// The recipient's address.
    pub to: String,
    /// The subject line.
    pub subject: String,
    /// The template props used to render the body.
    pub template: EmailTemplateProps,
}

/// Render the email described by `request` and send it from `from` to the
/// request's recipient.
///
/// The email is attempted once. Failures are logged and reported via the
/// returned [ActionResult], on success its data holds the provider's receipt.
pub async fn send_email<S: EmailSender>(
    sender: &S,
    from: &str,
    request: &SendEmailRequest,
) -> ActionResult {
    let to = request.to.trim();
    if to.is_empty() {
        tracing::error!("Failed to send email: {}", DeliveryError::MissingRecipient);
        return ActionResult::failure(DeliveryError::MissingRecipient);
    }

    let message = EmailMessage {
        from: from.to_owned(),
        to: vec![to.to_owned()],
        subject: request.subject.clone(),
        html: render_email_props(&request.template).into_string(),
    };

    match sender.send(&message).await {
        Ok(receipt) => {
            tracing::info!("Email sent successfully: {}", receipt.id);
            ActionResult::success_with_data(json!({ "id": receipt.id }))
        }
        Err(error) => {
            tracing::error!("Failed to send email: {error}");
            ActionResult::failure(error)
        }
    }
}
