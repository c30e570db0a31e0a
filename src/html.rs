//! Formatting helpers shared by the HTML views.

/// Format `number` as dollars with thousands separators and two decimal
/// places, e.g. "$1,234.50" or "-$12.00".
///
/// The number is rounded to the nearest cent first, so amounts smaller than
/// half a cent format as "$0.00".
pub fn format_currency(number: f64) -> String {
    // Saturates for amounts too large for i64 cents, NaN becomes zero.
    let cents = (number * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Write `number` with a comma between each group of three digits.
fn group_thousands(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
