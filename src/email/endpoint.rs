//! Defines the endpoints for sending and previewing emails.

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::{
    AppState,
    email::{
        dispatch::{SendEmailRequest, send_email},
        preview::{PreviewKind, preview_props},
        report::EmailTemplateProps,
        sender::{EmailSender, ResendSender},
        template::render_email_props,
    },
};

/// The state needed to send emails.
#[derive(Debug, Clone)]
pub struct EmailState<S = ResendSender> {
    /// Delivers the rendered emails.
    pub sender: S,
    /// The sender address for outgoing emails.
    pub from: String,
}

impl FromRef<AppState> for EmailState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            sender: state.email_sender.clone(),
            from: state.email_from.clone(),
        }
    }
}

/// A route handler that renders and sends the requested email.
///
/// Responds with the [ActionResult](crate::action_result::ActionResult) as
/// JSON, with a 502 status code if the provider did not accept the email.
pub async fn send_email_endpoint<S>(
    State(state): State<EmailState<S>>,
    Json(request): Json<SendEmailRequest>,
) -> Response
where
    S: EmailSender + Clone + Send + Sync + 'static,
{
    let result = send_email(&state.sender, &state.from, &request).await;

    let status_code = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    (status_code, Json(result)).into_response()
}

/// A route handler that renders the sample email for `kind`.
///
/// Unknown kinds render the fallback email.
pub async fn get_email_preview(Path(kind): Path<String>) -> Markup {
    let props = match kind.parse::<PreviewKind>() {
        Ok(kind) => preview_props(kind),
        Err(_) => EmailTemplateProps {
            user_name: String::new(),
            kind,
            data: serde_json::Value::Null,
        },
    };

    render_email_props(&props)
}
