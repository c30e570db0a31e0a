//! Accounts that hold a user's transactions and their running balance.

mod core;

pub use core::{
    Account, AccountKind, NewAccount, create_account, create_account_table, get_account,
    get_or_create_account, map_row_to_account, set_account_balance,
};
