//! Accounts hold transactions and a running balance.

use std::fmt::Display;

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{AccountId, UserId},
    money::Cents,
};

/// The kind of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    /// An everyday transaction account.
    Current,
    /// A savings account.
    Savings,
}

impl AccountKind {
    /// The tag used to store the kind in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Current => "CURRENT",
            AccountKind::Savings => "SAVINGS",
        }
    }
}

impl Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AccountKind {
    type Error = Error;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "CURRENT" => Ok(AccountKind::Current),
            "SAVINGS" => Ok(AccountKind::Savings),
            other => Err(Error::InvalidEnumTag {
                kind: "account kind",
                tag: other.to_owned(),
            }),
        }
    }
}

impl ToSql for AccountKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for AccountKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        AccountKind::try_from(value.as_str()?).map_err(|error| FromSqlError::Other(error.into()))
    }
}

/// A balance-bearing container of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
    /// The kind of account.
    pub kind: AccountKind,
    /// The balance in cents, the signed sum of the account's transactions.
    pub balance: Cents,
    /// The user that owns the account.
    pub user_id: UserId,
}

/// The data needed to create an account with a known ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    /// The ID to give the new account.
    pub id: AccountId,
    /// The display name of the account.
    pub name: String,
    /// The kind of account.
    pub kind: AccountKind,
}

/// Create the account table.
///
/// # Errors
/// Returns an error if the SQL query failed.
pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS account (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            kind TEXT NOT NULL,
            balance INTEGER NOT NULL,
            user_id TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
        )",
        (),
    )?;

    Ok(())
}

/// Map a row of `id, name, kind, balance, user_id` to an [Account].
pub fn map_row_to_account(row: &Row) -> Result<Account, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let kind = row.get(2)?;
    let balance = row.get(3)?;
    let user_id = row.get(4)?;

    Ok(Account {
        id,
        name,
        kind,
        balance,
        user_id,
    })
}

/// Create an account owned by `user_id` with a zero balance.
///
/// # Errors
/// Returns [Error::SqlError] if the ID is taken, `user_id` does not refer to a
/// user, or there is some other SQL error.
pub fn create_account(
    new_account: &NewAccount,
    user_id: &UserId,
    connection: &Connection,
) -> Result<Account, Error> {
    connection
        .prepare(
            "INSERT INTO account (id, name, kind, balance, user_id) VALUES (?1, ?2, ?3, 0, ?4)
             RETURNING id, name, kind, balance, user_id",
        )?
        .query_row(
            (&new_account.id, &new_account.name, new_account.kind, user_id),
            map_row_to_account,
        )
        .map_err(|error| error.into())
}

/// Retrieve an account by its `id`.
///
/// # Errors
/// Returns [Error::NotFound] if `id` does not refer to an account, or
/// [Error::SqlError] if there is some other SQL error.
pub fn get_account(id: &AccountId, connection: &Connection) -> Result<Account, Error> {
    connection
        .prepare("SELECT id, name, kind, balance, user_id FROM account WHERE id = :id")?
        .query_row(&[(":id", id)], map_row_to_account)
        .map_err(|error| error.into())
}

/// Get the account with the ID of `new_account`, creating it for `user_id` if it does not exist.
///
/// An existing account is returned unchanged.
pub fn get_or_create_account(
    new_account: &NewAccount,
    user_id: &UserId,
    connection: &Connection,
) -> Result<Account, Error> {
    match get_account(&new_account.id, connection) {
        Ok(account) => Ok(account),
        Err(Error::NotFound) => {
            tracing::debug!("Creating account {}", new_account.id);
            create_account(new_account, user_id, connection)
        }
        Err(error) => Err(error),
    }
}

/// Overwrite the balance of the account `id`.
///
/// # Errors
/// Returns [Error::UpdateMissingAccount] if `id` does not refer to an account.
pub fn set_account_balance(
    id: &AccountId,
    balance: Cents,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE account SET balance = ?1 WHERE id = ?2",
        (balance, id),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingAccount);
    }

    Ok(())
}
