//! Demo data seeding: generates synthetic transactions and atomically swaps
//! them in for an account's existing transactions.

mod category;
mod core;
mod endpoint;
mod generator;

pub use category::{CategoryRange, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use core::{
    DEMO_ACCOUNT_ID, DEMO_USER_ID, SeedTarget, replace_account_transactions, seed_transactions,
};
pub use endpoint::{SeedParams, SeedState, seed_transactions_endpoint};
pub use generator::{
    DEFAULT_DAYS, GeneratedTransactions, GeneratorConfig, generate_transactions,
};
