//! Price and discount arithmetic shared by every editor direction.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary value to cents, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Clamp a discount percentage into `[0, 100]`.
pub fn clamp_percent(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED)
}

/// Unit price after taking `percent` off `base_price`.
///
/// `base_price` must be the undiscounted catalog price; feeding an already
/// discounted price back in would compound discounts.
pub fn discounted_price(base_price: Decimal, percent: Decimal) -> Decimal {
    let percent = clamp_percent(percent);
    round2(base_price * (Decimal::ONE - percent / Decimal::ONE_HUNDRED))
}

/// Parse user-entered numeric text. Anything unusable becomes zero.
///
/// A lone comma is accepted as the decimal separator ("12,5").
pub fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or(Decimal::ZERO)
}
