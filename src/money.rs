//! Monetary amounts.
//!
//! Amounts are stored and summed as whole cents so that totals are exact.

/// An amount of money in cents, e.g. `12345` is $123.45.
pub type Cents = i64;

/// Convert whole dollars to cents.
pub const fn dollars(amount: i64) -> Cents {
    amount * 100
}

/// Convert cents to dollars for display.
pub fn cents_to_dollars(amount: Cents) -> f64 {
    amount as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::{cents_to_dollars, dollars};

    #[test]
    fn converts_between_cents_and_dollars() {
        assert_eq!(dollars(5000), 500_000);
        assert_eq!(cents_to_dollars(12345), 123.45);
        assert_eq!(cents_to_dollars(-5), -0.05);
        assert_eq!(cents_to_dollars(0), 0.0);
    }
}
