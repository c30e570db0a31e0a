//! Defines the core data models and database queries for transactions.

use std::fmt::Display;

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Type, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

use crate::{
    Error,
    database_id::{AccountId, TransactionId, UserId},
    money::Cents,
};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Money coming into the account.
    Income,
    /// Money leaving the account.
    Expense,
}

impl TransactionKind {
    /// The tag used to store the kind in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }

    /// The other direction.
    pub fn opposite(&self) -> Self {
        match self {
            TransactionKind::Income => TransactionKind::Expense,
            TransactionKind::Expense => TransactionKind::Income,
        }
    }

    /// Apply the direction to a positive `amount`, e.g. expenses become negative.
    pub fn signed(&self, amount: Cents) -> Cents {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = Error;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "INCOME" => Ok(TransactionKind::Income),
            "EXPENSE" => Ok(TransactionKind::Expense),
            other => Err(Error::InvalidEnumTag {
                kind: "transaction kind",
                tag: other.to_owned(),
            }),
        }
    }
}

/// The processing state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// The transaction has not cleared yet.
    Pending,
    /// The transaction has cleared.
    Completed,
    /// The transaction was declined or reversed.
    Failed,
}

impl TransactionStatus {
    /// The tag used to store the status in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Failed => "FAILED",
        }
    }
}

impl TryFrom<&str> for TransactionStatus {
    type Error = Error;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "PENDING" => Ok(TransactionStatus::Pending),
            "COMPLETED" => Ok(TransactionStatus::Completed),
            "FAILED" => Ok(TransactionStatus::Failed),
            other => Err(Error::InvalidEnumTag {
                kind: "transaction status",
                tag: other.to_owned(),
            }),
        }
    }
}

macro_rules! impl_sql_tag {
    ($tag_type:ty) => {
        impl Display for $tag_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ToSql for $tag_type {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $tag_type {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                <$tag_type>::try_from(value.as_str()?)
                    .map_err(|error| FromSqlError::Other(error.into()))
            }
        }
    };
}

impl_sql_tag!(TransactionKind);
impl_sql_tag!(TransactionStatus);

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The unsigned amount of money in cents, always greater than zero.
    pub amount: Cents,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// The category label, e.g. "groceries".
    pub category: String,
    /// The processing state of the transaction.
    pub status: TransactionStatus,
    /// The user that owns the transaction.
    pub user_id: UserId,
    /// The account the transaction belongs to.
    pub account_id: AccountId,
    /// When the record was created.
    pub created_at: PrimitiveDateTime,
    /// When the record was last updated.
    pub updated_at: PrimitiveDateTime,
}

impl Transaction {
    /// The amount with the sign of the transaction's direction.
    pub fn signed_amount(&self) -> Cents {
        self.kind.signed(self.amount)
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id TEXT PRIMARY KEY,
                kind TEXT NOT NULL,
                amount INTEGER NOT NULL CHECK (amount > 0),
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                status TEXT NOT NULL,
                user_id TEXT NOT NULL,
                account_id TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE,
                FOREIGN KEY(account_id) REFERENCES account(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_account_date ON \"transaction\"(account_id, date);",
        (),
    )?;

    Ok(())
}

/// Insert many transactions with a single prepared statement.
///
/// This does not start an SQL transaction, callers that need the insert to be
/// all-or-nothing should pass in an open SQL transaction.
///
/// # Errors
/// Returns [Error::SqlError] if any insert fails, e.g. on a duplicate ID or a
/// foreign key that does not refer to a user or account.
pub fn insert_transactions(
    transactions: &[Transaction],
    connection: &Connection,
) -> Result<usize, Error> {
    let mut stmt = connection.prepare(
        "INSERT INTO \"transaction\"
         (id, kind, amount, description, date, category, status, user_id, account_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )?;

    let mut inserted = 0;

    for transaction in transactions {
        inserted += stmt.execute((
            transaction.id.to_string(),
            transaction.kind,
            transaction.amount,
            &transaction.description,
            transaction.date,
            &transaction.category,
            transaction.status,
            &transaction.user_id,
            &transaction.account_id,
            transaction.created_at,
            transaction.updated_at,
        ))?;
    }

    Ok(inserted)
}

/// Delete every transaction that belongs to `account_id`.
///
/// Returns the number of deleted transactions.
pub fn delete_account_transactions(
    account_id: &AccountId,
    connection: &Connection,
) -> Result<usize, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE account_id = ?1",
            (account_id,),
        )
        .map_err(|error| error.into())
}

/// Get the number of transactions that belong to `account_id`.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_account_transactions(
    account_id: &AccountId,
    connection: &Connection,
) -> Result<usize, Error> {
    connection
        .query_row(
            "SELECT COUNT(id) FROM \"transaction\" WHERE account_id = ?1;",
            (account_id,),
            |row| {
                let count: i64 = row.get(0)?;
                usize::try_from(count).map_err(|error| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(error))
                })
            },
        )
        .map_err(|error| error.into())
}

/// Get the signed sum of the transactions that belong to `account_id`.
///
/// Income counts as positive and expenses as negative.
pub fn sum_account_transactions(
    account_id: &AccountId,
    connection: &Connection,
) -> Result<Cents, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(CASE kind WHEN 'INCOME' THEN amount ELSE -amount END), 0)
             FROM \"transaction\" WHERE account_id = ?1",
            (account_id,),
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Get the transactions that belong to `account_id`, oldest first.
pub fn get_account_transactions(
    account_id: &AccountId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, kind, amount, description, date, category, status, user_id, account_id, created_at, updated_at
             FROM \"transaction\" WHERE account_id = ?1 ORDER BY date ASC, rowid ASC",
        )?
        .query_map((account_id,), map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let raw_id: String = row.get(0)?;
    let id = TransactionId::parse_str(&raw_id).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(error))
    })?;

    Ok(Transaction {
        id,
        kind: row.get(1)?,
        amount: row.get(2)?,
        description: row.get(3)?,
        date: row.get(4)?,
        category: row.get(5)?,
        status: row.get(6)?,
        user_id: row.get(7)?,
        account_id: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
