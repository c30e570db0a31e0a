//! The page shown for unknown routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{DOCTYPE, html};

use crate::{
    email::{BUDGET_ALERT, MONTHLY_REPORT},
    endpoints::{self, format_endpoint},
};

/// A route handler for unknown routes.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// A 404 page that links to the email previews.
pub fn get_404_not_found_response() -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Not Found" }
            }
            body {
                h1 { "404 Not Found" }
                p { "The page you are looking for does not exist." }
                p { "Email previews:" }
                ul {
                    @for kind in [MONTHLY_REPORT, BUDGET_ALERT] {
                        li {
                            a href=(format_endpoint(endpoints::EMAIL_PREVIEW, kind)) { (kind) }
                        }
                    }
                }
            }
        }
    };

    (StatusCode::NOT_FOUND, page).into_response()
}
