//! The category tables that synthetic transactions are drawn from.

use std::ops::RangeInclusive;

use crate::money::{Cents, dollars};

/// A category label and the range its amounts are drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRange {
    /// The category label, e.g. "groceries".
    pub name: &'static str,
    /// The inclusive range of amounts in cents.
    pub amount: RangeInclusive<Cents>,
}

impl CategoryRange {
    const fn new(name: &'static str, min_dollars: i64, max_dollars: i64) -> Self {
        Self {
            name,
            amount: dollars(min_dollars)..=dollars(max_dollars),
        }
    }
}

/// The default categories for income.
pub const INCOME_CATEGORIES: [CategoryRange; 4] = [
    CategoryRange::new("salary", 5000, 8000),
    CategoryRange::new("freelance", 1000, 3000),
    CategoryRange::new("investments", 500, 2000),
    CategoryRange::new("other-income", 100, 1000),
];

/// The default categories for expenses.
pub const EXPENSE_CATEGORIES: [CategoryRange; 10] = [
    CategoryRange::new("housing", 1000, 2000),
    CategoryRange::new("transportation", 100, 500),
    CategoryRange::new("groceries", 200, 600),
    CategoryRange::new("utilities", 100, 300),
    CategoryRange::new("entertainment", 50, 200),
    CategoryRange::new("food", 50, 150),
    CategoryRange::new("shopping", 100, 500),
    CategoryRange::new("healthcare", 100, 1000),
    CategoryRange::new("education", 200, 1000),
    CategoryRange::new("travel", 500, 2000),
];
