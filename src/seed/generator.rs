//! Generates synthetic income and expense transactions for demo accounts.

use std::ops::RangeInclusive;

use rand::{Rng, seq::SliceRandom};
use time::{Date, Duration, Time};
use uuid::{Builder, Uuid};

use crate::{
    database_id::{AccountId, UserId},
    money::Cents,
    seed::category::{CategoryRange, EXPENSE_CATEGORIES, INCOME_CATEGORIES},
    transaction::{Transaction, TransactionKind, TransactionStatus},
};

/// The default number of days to generate, today and the 90 days before it.
pub const DEFAULT_DAYS: u32 = 91;

/// Controls the shape of the generated transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// The number of calendar days to generate transactions for, ending today.
    pub days: u32,
    /// How many transactions to generate for each day.
    pub transactions_per_day: RangeInclusive<u32>,
    /// The chance that a transaction is income rather than an expense.
    pub income_probability: f64,
    /// The categories to draw income from.
    pub income_categories: Vec<CategoryRange>,
    /// The categories to draw expenses from.
    pub expense_categories: Vec<CategoryRange>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            transactions_per_day: 1..=3,
            income_probability: 0.4,
            income_categories: INCOME_CATEGORIES.to_vec(),
            expense_categories: EXPENSE_CATEGORIES.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Set the number of days to generate.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    fn categories(&self, kind: TransactionKind) -> &[CategoryRange] {
        match kind {
            TransactionKind::Income => &self.income_categories,
            TransactionKind::Expense => &self.expense_categories,
        }
    }
}

/// The output of [generate_transactions].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTransactions {
    /// The transactions, oldest first.
    pub transactions: Vec<Transaction>,
    /// The signed sum of the transactions: income minus expenses.
    pub total: Cents,
}

impl GeneratedTransactions {
    /// No transactions and a zero total.
    pub fn empty() -> Self {
        Self {
            transactions: Vec::new(),
            total: 0,
        }
    }
}

/// Generate random transactions for each day in the window ending on `today`.
///
/// All randomness comes from `rng`, including the transaction IDs, so a seeded
/// generator produces the same transactions every time.
///
/// An empty window, or empty category tables, produce no transactions and a
/// total of zero.
pub fn generate_transactions<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    today: Date,
    user_id: &UserId,
    account_id: &AccountId,
    rng: &mut R,
) -> GeneratedTransactions {
    if config.income_categories.is_empty() && config.expense_categories.is_empty() {
        return GeneratedTransactions::empty();
    }

    let income_probability = if config.income_probability.is_finite() {
        config.income_probability.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut generated = GeneratedTransactions::empty();

    for days_ago in (0..config.days).rev() {
        let Some(date) = today.checked_sub(Duration::days(days_ago.into())) else {
            continue;
        };

        let count = if config.transactions_per_day.is_empty() {
            0
        } else {
            rng.gen_range(config.transactions_per_day.clone())
        };

        for _ in 0..count {
            let mut kind = if rng.gen_bool(income_probability) {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };

            if config.categories(kind).is_empty() {
                kind = kind.opposite();
            }

            let Some(category) = config.categories(kind).choose(rng) else {
                continue;
            };
            let amount = random_amount(category, rng);

            generated.total += kind.signed(amount);
            let transaction =
                new_transaction(kind, amount, category.name, date, user_id, account_id, rng);
            generated.transactions.push(transaction);
        }
    }

    generated
}

fn random_amount<R: Rng + ?Sized>(category: &CategoryRange, rng: &mut R) -> Cents {
    if category.amount.is_empty() {
        *category.amount.start()
    } else {
        rng.gen_range(category.amount.clone())
    }
}

fn describe(kind: TransactionKind, category: &str) -> String {
    match kind {
        TransactionKind::Income => format!("Received {category}"),
        TransactionKind::Expense => format!("Paid for {category}"),
    }
}

fn new_transaction<R: Rng + ?Sized>(
    kind: TransactionKind,
    amount: Cents,
    category: &str,
    date: Date,
    user_id: &UserId,
    account_id: &AccountId,
    rng: &mut R,
) -> Transaction {
    let timestamp = date.with_time(Time::MIDNIGHT);

    Transaction {
        id: random_uuid(rng),
        kind,
        amount,
        description: describe(kind, category),
        date,
        category: category.to_owned(),
        status: TransactionStatus::Completed,
        user_id: user_id.clone(),
        account_id: account_id.clone(),
        created_at: timestamp,
        updated_at: timestamp,
    }
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    Builder::from_random_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};
    use time::macros::date;

    use crate::{
        database_id::{AccountId, UserId},
        seed::category::{CategoryRange, EXPENSE_CATEGORIES, INCOME_CATEGORIES},
        transaction::{TransactionKind, TransactionStatus},
    };

    use super::{GeneratedTransactions, GeneratorConfig, generate_transactions};

    fn generate(config: &GeneratorConfig, seed: u64) -> GeneratedTransactions {
        let mut rng = StdRng::seed_from_u64(seed);

        generate_transactions(
            config,
            date!(2025 - 10 - 19),
            &UserId::new("user"),
            &AccountId::new("account"),
            &mut rng,
        )
    }

    #[test]
    fn count_is_within_daily_bounds() {
        for days in [1, 7, 30, 91] {
            let config = GeneratorConfig::default().with_days(days);

            for seed in 0..10 {
                let generated = generate(&config, seed);
                let count = generated.transactions.len() as u32;

                assert!(
                    (days..=days * 3).contains(&count),
                    "got {count} transactions for {days} days with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn empty_window_produces_nothing() {
        let config = GeneratorConfig::default().with_days(0);

        let generated = generate(&config, 42);

        assert_eq!(generated, GeneratedTransactions::empty());
    }

    #[test]
    fn empty_category_tables_produce_nothing() {
        let config = GeneratorConfig {
            income_categories: vec![],
            expense_categories: vec![],
            ..Default::default()
        };

        let generated = generate(&config, 42);

        assert_eq!(generated, GeneratedTransactions::empty());
    }

    #[test]
    fn empty_income_table_falls_back_to_expenses() {
        let config = GeneratorConfig {
            income_categories: vec![],
            income_probability: 1.0,
            ..Default::default()
        }
        .with_days(10);

        let generated = generate(&config, 7);

        assert!(generated.transactions.len() >= 10);
        assert!(
            generated
                .transactions
                .iter()
                .all(|transaction| transaction.kind == TransactionKind::Expense)
        );
    }

    #[test]
    fn amounts_are_within_category_bounds() {
        let generated = generate(&GeneratorConfig::default(), 1234);
        let categories: Vec<&CategoryRange> = INCOME_CATEGORIES
            .iter()
            .chain(EXPENSE_CATEGORIES.iter())
            .collect();

        for transaction in &generated.transactions {
            let category = categories
                .iter()
                .find(|category| category.name == transaction.category)
                .unwrap_or_else(|| panic!("unknown category {}", transaction.category));

            assert!(
                category.amount.contains(&transaction.amount),
                "{} is outside the range {:?} for {}",
                transaction.amount,
                category.amount,
                category.name
            );
        }
    }

    #[test]
    fn categories_match_direction() {
        let generated = generate(&GeneratorConfig::default(), 99);

        for transaction in &generated.transactions {
            let table = match transaction.kind {
                TransactionKind::Income => &INCOME_CATEGORIES[..],
                TransactionKind::Expense => &EXPENSE_CATEGORIES[..],
            };

            assert!(
                table
                    .iter()
                    .any(|category| category.name == transaction.category),
                "{} is not a {:?} category",
                transaction.category,
                transaction.kind
            );
        }
    }

    #[test]
    fn non_finite_income_probability_gives_expenses() {
        for income_probability in [f64::NAN, f64::INFINITY] {
            let config = GeneratorConfig {
                income_probability,
                ..Default::default()
            }
            .with_days(10);

            let generated = generate(&config, 3);

            assert!(!generated.transactions.is_empty());
            assert!(
                generated
                    .transactions
                    .iter()
                    .all(|transaction| transaction.kind == TransactionKind::Expense),
                "want only expenses for probability {income_probability}"
            );
        }
    }

    #[test]
    fn total_equals_signed_sum() {
        for seed in 0..20 {
            let generated = generate(&GeneratorConfig::default(), seed);
            let income: i64 = generated
                .transactions
                .iter()
                .filter(|transaction| transaction.kind == TransactionKind::Income)
                .map(|transaction| transaction.amount)
                .sum();
            let expenses: i64 = generated
                .transactions
                .iter()
                .filter(|transaction| transaction.kind == TransactionKind::Expense)
                .map(|transaction| transaction.amount)
                .sum();

            assert_eq!(generated.total, income - expenses, "seed {seed}");
        }
    }

    #[test]
    fn dates_run_oldest_to_newest_and_end_today() {
        let config = GeneratorConfig::default().with_days(5);

        let generated = generate(&config, 3);
        let dates: Vec<_> = generated
            .transactions
            .iter()
            .map(|transaction| transaction.date)
            .collect();

        assert!(dates.is_sorted(), "dates are out of order: {dates:?}");
        assert_eq!(dates.first(), Some(&date!(2025 - 10 - 15)));
        assert_eq!(dates.last(), Some(&date!(2025 - 10 - 19)));
    }

    #[test]
    fn records_are_completed_and_described() {
        let generated = generate(&GeneratorConfig::default().with_days(14), 5);

        for transaction in &generated.transactions {
            let want_description = match transaction.kind {
                TransactionKind::Income => format!("Received {}", transaction.category),
                TransactionKind::Expense => format!("Paid for {}", transaction.category),
            };
            assert_eq!(transaction.description, want_description);
            assert_eq!(transaction.status, TransactionStatus::Completed);
            assert_eq!(transaction.created_at.date(), transaction.date);
            assert_eq!(transaction.created_at, transaction.updated_at);
        }
    }

    #[test]
    fn ids_are_unique() {
        let generated = generate(&GeneratorConfig::default(), 11);

        let ids: HashSet<_> = generated
            .transactions
            .iter()
            .map(|transaction| transaction.id)
            .collect();

        assert_eq!(ids.len(), generated.transactions.len());
    }

    #[test]
    fn same_seed_gives_same_transactions() {
        let config = GeneratorConfig::default().with_days(30);

        assert_eq!(generate(&config, 2024), generate(&config, 2024));
    }

    #[test]
    fn single_category_gives_exact_output() {
        let config = GeneratorConfig {
            days: 2,
            transactions_per_day: 2..=2,
            income_probability: 1.0,
            income_categories: vec![CategoryRange {
                name: "salary",
                amount: 12_345..=12_345,
            }],
            expense_categories: vec![],
        };

        let generated = generate(&config, 0);

        assert_eq!(generated.transactions.len(), 4);
        assert_eq!(generated.total, 4 * 12_345);
        assert!(
            generated
                .transactions
                .iter()
                .all(|transaction| transaction.description == "Received salary")
        );
    }
}
