//! Seeds an account with generated transactions.

use rand::Rng;
use rusqlite::Connection;
use time::Date;

use crate::{
    Error,
    account::{AccountKind, NewAccount, get_or_create_account, set_account_balance},
    action_result::ActionResult,
    database_id::{AccountId, UserId},
    html::format_currency,
    money::cents_to_dollars,
    seed::generator::{GeneratedTransactions, GeneratorConfig, generate_transactions},
    transaction::{delete_account_transactions, insert_transactions},
    user::{NewUser, get_or_create_user},
};

/// The ID of the demo user.
pub const DEMO_USER_ID: &str = "287b5229-2c5c-493b-a66a-32d4b5684724";
/// The ID of the demo user's account.
pub const DEMO_ACCOUNT_ID: &str = "90ab7029-de8f-4b13-a05c-db4bad3555ee";

/// The user and account to seed with transactions.
///
/// Both are created if they do not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedTarget {
    /// The user that owns the account.
    pub user: NewUser,
    /// The account to fill with transactions.
    pub account: NewAccount,
}

impl SeedTarget {
    /// The demo user and their savings account.
    pub fn demo() -> Self {
        Self {
            user: NewUser {
                id: UserId::new(DEMO_USER_ID),
                name: "Demo User".to_owned(),
                email: "demo@example.com".to_owned(),
            },
            account: NewAccount {
                id: AccountId::new(DEMO_ACCOUNT_ID),
                name: "Main Account".to_owned(),
                kind: AccountKind::Savings,
            },
        }
    }
}

/// Replace all of an account's transactions with `generated` and set the
/// account's balance to the generated total.
///
/// The delete, insert and balance update happen in one SQL transaction, so
/// either all of them are visible afterwards or none of them are.
///
/// Returns the number of inserted transactions.
///
/// # Errors
/// Returns an [Error] if any of the steps fail, in which case the account's
/// previous transactions and balance are left untouched.
pub fn replace_account_transactions(
    generated: &GeneratedTransactions,
    account_id: &AccountId,
    connection: &Connection,
) -> Result<usize, Error> {
    let transaction = connection.unchecked_transaction()?;

    let deleted = delete_account_transactions(account_id, &transaction)?;
    let inserted = insert_transactions(&generated.transactions, &transaction)?;
    set_account_balance(account_id, generated.total, &transaction)?;

    transaction.commit()?;

    tracing::debug!(
        "Replaced {deleted} transactions with {inserted} for account {account_id}, new balance is {}",
        format_currency(cents_to_dollars(generated.total))
    );

    Ok(inserted)
}

/// Fill the target account with transactions for the window ending on `today`.
///
/// The user and account in `target` are created if missing. Any existing
/// transactions for the account are replaced and the balance is recomputed.
///
/// Errors are logged and reported via the returned [ActionResult].
pub fn seed_transactions<R: Rng + ?Sized>(
    target: &SeedTarget,
    config: &GeneratorConfig,
    today: Date,
    rng: &mut R,
    connection: &Connection,
) -> ActionResult {
    match try_seed_transactions(target, config, today, rng, connection) {
        Ok(count) => {
            tracing::info!("Seeded {count} transactions.");
            ActionResult::success_with_message(format!("Created {count} transactions"))
        }
        Err(error) => {
            tracing::error!("Error seeding transactions: {error}");
            ActionResult::failure(error)
        }
    }
}

fn try_seed_transactions<R: Rng + ?Sized>(
    target: &SeedTarget,
    config: &GeneratorConfig,
    today: Date,
    rng: &mut R,
    connection: &Connection,
) -> Result<usize, Error> {
    let user = get_or_create_user(&target.user, connection)?;
    let account = get_or_create_account(&target.account, &user.id, connection)?;

    let generated = generate_transactions(config, today, &user.id, &account.id, rng);

    replace_account_transactions(&generated, &account.id, connection)
}


#[cfg(test)]
mod seed_tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        account::get_account,
        db::initialize,
        seed::generator::GeneratorConfig,
        transaction::{count_account_transactions, sum_account_transactions},
        user::get_user,
    };

    use super::{SeedTarget, seed_transactions};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn creates_user_account_and_transactions() {
        let conn = get_test_connection();
        let target = SeedTarget::demo();
        let mut rng = StdRng::seed_from_u64(42);

        let result = seed_transactions(
            &target,
            &GeneratorConfig::default(),
            date!(2025 - 10 - 19),
            &mut rng,
            &conn,
        );

        assert!(result.success, "want success, got {result:?}");
        let user = get_user(&target.user.id, &conn).unwrap();
        assert_eq!(user.name, "Demo User");
        let account = get_account(&target.account.id, &conn).unwrap();
        let count = count_account_transactions(&account.id, &conn).unwrap();
        assert!((91..=273).contains(&count), "got {count} transactions");
        assert_eq!(
            result.message,
            Some(format!("Created {count} transactions"))
        );
        assert_eq!(Ok(account.balance), sum_account_transactions(&account.id, &conn));
    }

    #[test]
    fn reseeding_replaces_previous_transactions() {
        let conn = get_test_connection();
        let target = SeedTarget::demo();
        let config = GeneratorConfig::default().with_days(10);
        let today = date!(2025 - 10 - 19);

        let first =
            seed_transactions(&target, &config, today, &mut StdRng::seed_from_u64(1), &conn);
        let second =
            seed_transactions(&target, &config, today, &mut StdRng::seed_from_u64(2), &conn);

        assert!(first.success && second.success);
        let count = count_account_transactions(&target.account.id, &conn).unwrap();
        assert_eq!(second.message, Some(format!("Created {count} transactions")));
        let account = get_account(&target.account.id, &conn).unwrap();
        assert_eq!(
            Ok(account.balance),
            sum_account_transactions(&target.account.id, &conn)
        );
    }

    #[test]
    fn empty_window_sets_balance_to_zero() {
        let conn = get_test_connection();
        let target = SeedTarget::demo();
        let today = date!(2025 - 10 - 19);
        seed_transactions(
            &target,
            &GeneratorConfig::default(),
            today,
            &mut StdRng::seed_from_u64(1),
            &conn,
        );

        let result = seed_transactions(
            &target,
            &GeneratorConfig::default().with_days(0),
            today,
            &mut StdRng::seed_from_u64(1),
            &conn,
        );

        assert_eq!(result.message, Some("Created 0 transactions".to_owned()));
        let account = get_account(&target.account.id, &conn).unwrap();
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn store_failure_is_reported_not_raised() {
        // No tables, so every query fails.
        let conn = Connection::open_in_memory().unwrap();

        let result = seed_transactions(
            &SeedTarget::demo(),
            &GeneratorConfig::default(),
            date!(2025 - 10 - 19),
            &mut StdRng::seed_from_u64(1),
            &conn,
        );

        assert!(!result.success);
        assert!(result.error.is_some());
        assert_eq!(result.message, None);
    }
}
