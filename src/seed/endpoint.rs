//! Defines the endpoint for seeding the demo account with transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rand::{SeedableRng, rngs::StdRng};
use rusqlite::Connection;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    action_result::ActionResult,
    seed::{
        core::{SeedTarget, seed_transactions},
        generator::GeneratorConfig,
    },
};

/// The state needed to seed transactions.
#[derive(Debug, Clone)]
pub struct SeedState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The user and account to seed.
    pub target: SeedTarget,
}

impl FromRef<AppState> for SeedState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            target: state.seed_target.clone(),
        }
    }
}

/// Optional query parameters for seeding.
#[derive(Debug, Default, Deserialize)]
pub struct SeedParams {
    /// A seed for the random number generator, for reproducible data.
    pub seed: Option<u64>,
}

/// A route handler that replaces the seed target's transactions with freshly generated ones.
///
/// Responds with the [ActionResult] as JSON.
pub async fn seed_transactions_endpoint(
    State(state): State<SeedState>,
    Query(params): Query<SeedParams>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not acquire database lock: {error}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ActionResult::failure(Error::DatabaseLockError)),
            )
                .into_response();
        }
    };

    let config = GeneratorConfig::default();
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = OffsetDateTime::now_utc().date();

    let result = seed_transactions(&state.target, &config, today, &mut rng, &connection);

    let status_code = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status_code, Json(result)).into_response()
}
