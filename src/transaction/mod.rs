//! Transaction records and the database functions for storing and replacing them.

mod core;

pub use core::{
    Transaction, TransactionKind, TransactionStatus, count_account_transactions,
    create_transaction_table, delete_account_transactions, get_account_transactions,
    insert_transactions, map_transaction_row, sum_account_transactions,
};

#[cfg(test)]
pub(crate) use core::test_utils;
