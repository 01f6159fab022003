//! Money display formatting.

use rust_decimal::Decimal;

use super::pricing::round2;

/// Render `amount` with two decimals, prefixed by the ISO 4217 code.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let amount = round2(amount);
    if code.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{} {:.2}", code, amount)
    }
}
