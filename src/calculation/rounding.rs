//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole currency units, ties away from zero.
///
/// # Examples
///
/// ```
/// use workers_comp_engine::calculation::round_whole_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_whole_currency(Decimal::new(33335, 1)), Decimal::from(3334));
/// assert_eq!(round_whole_currency(Decimal::new(80004, 2)), Decimal::from(800));
/// ```
pub fn round_whole_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
