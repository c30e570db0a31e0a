//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    email::{ResendSender, get_email_preview, send_email_endpoint},
    endpoints,
    not_found::get_404_not_found,
    seed::seed_transactions_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::SEED_API, post(seed_transactions_endpoint))
        .route(
            endpoints::EMAILS_API,
            post(send_email_endpoint::<ResendSender>),
        )
        .route(endpoints::EMAIL_PREVIEW, get(get_email_preview))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use std::net::SocketAddr;

    use axum::{
        Json, Router,
        http::{StatusCode, header::CONTENT_TYPE},
        routing::post,
    };
    use rusqlite::Connection;
    use scraper::Html;
    use serde_json::json;
    use tokio::net::TcpListener;

    use crate::{
        AppState,
        action_result::ActionResult,
        email::ResendSender,
        endpoints::{self, format_endpoint},
        test_utils::assert_valid_html,
    };

    use super::build_router;

    async fn serve(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        address
    }

    /// Start the app with its email provider at `provider_base`.
    async fn start_app(api_key: Option<&str>, provider_base: &str) -> String {
        let sender = ResendSender::new(api_key.map(str::to_owned), provider_base).unwrap();
        let state = AppState::new(
            Connection::open_in_memory().unwrap(),
            sender,
            "Finance App <test@example.com>",
        )
        .unwrap();

        let address = serve(build_router(state)).await;

        format!("http://{address}")
    }

    #[tokio::test]
    async fn seed_route_returns_action_result() {
        let base = start_app(None, "http://127.0.0.1:9").await;

        let response = reqwest::Client::new()
            .post(format!("{base}{}?seed=7", endpoints::SEED_API))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: ActionResult = response.json().await.unwrap();
        assert!(result.success);
        let message = result.message.unwrap();
        assert!(
            message.starts_with("Created ") && message.ends_with(" transactions"),
            "got {message}"
        );
    }

    #[tokio::test]
    async fn email_route_sends_through_provider() {
        let provider = serve(Router::new().route(
            "/emails",
            post(|| async { Json(json!({ "id": "provider-id" })) }),
        ))
        .await;
        let base = start_app(Some("test-key"), &format!("http://{provider}")).await;

        let response = reqwest::Client::new()
            .post(format!("{base}{}", endpoints::EMAILS_API))
            .json(&json!({
                "to": "john@example.com",
                "subject": "Your report",
                "template": { "userName": "John", "type": "monthly-report", "data": {} }
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: ActionResult = response.json().await.unwrap();
        assert_eq!(
            result,
            ActionResult::success_with_data(json!({ "id": "provider-id" }))
        );
    }

    #[tokio::test]
    async fn email_route_without_key_is_bad_gateway() {
        let base = start_app(None, "http://127.0.0.1:9").await;

        let response = reqwest::Client::new()
            .post(format!("{base}{}", endpoints::EMAILS_API))
            .json(&json!({
                "to": "john@example.com",
                "subject": "Your report",
                "template": { "type": "budget-alert" }
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let result: ActionResult = response.json().await.unwrap();
        assert!(!result.success);
    }

    #[tokio::test]
    async fn preview_route_serves_html() {
        let base = start_app(None, "http://127.0.0.1:9").await;
        let path = format_endpoint(endpoints::EMAIL_PREVIEW, "monthly-report");

        let response = reqwest::get(format!("{base}{path}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"), "got {content_type}");
        let html = Html::parse_document(&response.text().await.unwrap());
        assert_valid_html(&html);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let base = start_app(None, "http://127.0.0.1:9").await;

        let response = reqwest::get(format!("{base}/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
