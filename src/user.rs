//! Code for creating the user table and fetching users from the database.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::UserId};

/// A user of the application, the owner of accounts and transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user's ID in the application database.
    pub id: UserId,
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
}

/// The data needed to create a user with a known ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// The ID to give the new user.
    pub id: UserId,
    /// The user's display name.
    pub name: String,
    /// The user's email address.
    pub email: String,
}

/// Create the user table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE
                )",
        (),
    )?;

    Ok(())
}

/// Insert a new user into the database.
///
/// # Errors
///
/// Returns a [Error::SqlError] if the ID or email is already taken, or some
/// other SQL related error occurred.
pub fn create_user(new_user: &NewUser, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare(
            "INSERT INTO user (id, name, email) VALUES (?1, ?2, ?3)
             RETURNING id, name, email",
        )?
        .query_row(
            (&new_user.id, &new_user.name, &new_user.email),
            map_user_row,
        )
        .map_err(|error| error.into())
}

/// Get the user from the database with an ID equal to `user_id`.
///
/// # Errors
///
/// This function will return an error if:
/// - `user_id` does not belong to a registered user.
/// - there was an error trying to access the store.
pub fn get_user(user_id: &UserId, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare("SELECT id, name, email FROM user WHERE id = :id")?
        .query_row(&[(":id", user_id)], map_user_row)
        .map_err(|error| error.into())
}

/// Get the user with the ID of `new_user`, creating the user if it does not exist.
///
/// An existing user is returned as is, it is not updated to match `new_user`.
///
/// # Errors
///
/// Returns a [Error::SqlError] if an SQL related error occurred.
pub fn get_or_create_user(new_user: &NewUser, connection: &Connection) -> Result<User, Error> {
    match get_user(&new_user.id, connection) {
        Ok(user) => Ok(user),
        Err(Error::NotFound) => {
            tracing::debug!("Creating user {}", new_user.id);
            create_user(new_user, connection)
        }
        Err(error) => Err(error),
    }
}

fn map_user_row(row: &Row) -> Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}
