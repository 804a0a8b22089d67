//! Two-decimal rounding policy.
//!
//! Every balance-affecting value in Passbook is an exact cents value.
//! Interest is rounded here BEFORE it is added to the balance, so the
//! register always sums exactly to the balance. Midpoints round away from
//! zero (0.005 becomes 0.01), the convention bank statements use.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a decimal to two places, midpoint away from zero.
///
/// # Example
/// ```
/// use passbook_core::round_to_cents;
/// use rust_decimal::Decimal;
///
/// let v = Decimal::new(12345, 4); // 1.2345
/// assert_eq!(round_to_cents(v), Decimal::new(123, 2)); // 1.23
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_down() {
        assert_eq!(round_to_cents(dec!(1.2344)), dec!(1.23));
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(round_to_cents(dec!(1.2356)), dec!(1.24));
    }

    #[test]
    fn test_midpoint_away_from_zero() {
        assert_eq!(round_to_cents(dec!(1.235)), dec!(1.24));
        assert_eq!(round_to_cents(dec!(-1.235)), dec!(-1.24));
    }

    #[test]
    fn test_exact_cents_unchanged() {
        assert_eq!(round_to_cents(dec!(12.00)), dec!(12.00));
        assert_eq!(round_to_cents(dec!(0.01)), dec!(0.01));
    }
}
