//! Welth seeds a demo finance account with realistic transactions and sends
//! transactional report emails.
//!
//! This library provides a small JSON API for both actions plus HTML previews
//! of the email templates.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod account;
pub mod action_result;
mod app_state;
pub mod config;
pub mod database_id;
mod db;
pub mod email;
mod endpoints;
mod html;
pub mod logging;
pub mod money;
mod not_found;
mod routing;
pub mod seed;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test_utils;

pub use action_result::ActionResult;
pub use app_state::AppState;
pub use config::Config;
pub use db::initialize as initialize_db;
pub use html::format_currency;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A stored enum tag, e.g. a transaction kind, is not one of the known values.
    #[error("invalid {kind} \"{tag}\"")]
    InvalidEnumTag {
        /// What the tag describes, e.g. "transaction kind".
        kind: &'static str,
        /// The unrecognised tag.
        tag: String,
    },

    /// Tried to update the balance of an account that does not exist.
    #[error("tried to update an account that does not exist")]
    UpdateMissingAccount,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
