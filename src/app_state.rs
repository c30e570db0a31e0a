//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, email::ResendSender, seed::SeedTarget};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// The user and account that the seed endpoint fills with transactions.
    pub seed_target: SeedTarget,

    /// Delivers emails through the email provider.
    pub email_sender: ResendSender,

    /// The sender address for outgoing emails.
    pub email_from: String,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// The seed endpoint targets [SeedTarget::demo].
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        email_sender: ResendSender,
        email_from: &str,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            seed_target: SeedTarget::demo(),
            email_sender,
            email_from: email_from.to_owned(),
        })
    }
}
