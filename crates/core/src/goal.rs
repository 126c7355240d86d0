//! Goal progress rules.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;
use crate::types::Amount;

/// Decimal places kept on a goal's derived target percentage.
pub const TARGET_PERCENT_SCALE: u32 = 2;

/// Progress toward a goal as a percentage of `goal_amount`.
///
/// Returns zero for a non-positive goal amount. The result is not capped, so
/// an over-funded goal reports more than 100. Amounts whose ratio does not
/// fit a `Decimal` are a validation error.
pub fn derive_target_percent(
    current_amount: Amount,
    goal_amount: Amount,
) -> Result<Amount, CoreError> {
    if goal_amount <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    current_amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(goal_amount))
        .map(|percent| {
            percent.round_dp_with_strategy(
                TARGET_PERCENT_SCALE,
                RoundingStrategy::MidpointAwayFromZero,
            )
        })
        .ok_or_else(|| CoreError::Validation("amount out of range".to_string()))
}

/// Pick the target percentage to store: an explicit client value wins,
/// otherwise it is derived from the amounts.
pub fn resolve_target_percent(
    explicit: Option<Amount>,
    current_amount: Amount,
    goal_amount: Amount,
) -> Result<Amount, CoreError> {
    match explicit {
        Some(percent) => Ok(percent),
        None => derive_target_percent(current_amount, goal_amount),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn half_funded_goal_is_fifty_percent() {
        assert_eq!(derive_target_percent(dec!(500), dec!(1000)).unwrap(), dec!(50.00));
    }

    #[test]
    fn percent_rounds_to_two_places() {
        assert_eq!(derive_target_percent(dec!(1), dec!(3)).unwrap(), dec!(33.33));
        assert_eq!(derive_target_percent(dec!(2), dec!(3)).unwrap(), dec!(66.67));
    }

    #[test]
    fn zero_goal_amount_yields_zero() {
        assert_eq!(derive_target_percent(dec!(100), dec!(0)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn over_funded_goal_exceeds_hundred() {
        assert_eq!(derive_target_percent(dec!(1500), dec!(1000)).unwrap(), dec!(150));
    }

    #[test]
    fn explicit_percent_overrides_derivation() {
        assert_eq!(
            resolve_target_percent(Some(dec!(12.5)), dec!(500), dec!(1000)).unwrap(),
            dec!(12.5)
        );
        assert_eq!(
            resolve_target_percent(None, dec!(250), dec!(1000)).unwrap(),
            dec!(25)
        );
    }

    #[test]
    fn overflowing_product_is_a_validation_error() {
        assert_matches!(
            derive_target_percent(dec!(1e27), dec!(1000)),
            Err(CoreError::Validation(msg)) if msg == "amount out of range"
        );
    }

    #[test]
    fn overflowing_quotient_is_a_validation_error() {
        assert_matches!(
            derive_target_percent(dec!(1e22), dec!(0.0000001)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn explicit_percent_skips_the_overflow_check() {
        assert_eq!(
            resolve_target_percent(Some(dec!(10)), dec!(1e27), dec!(1000)).unwrap(),
            dec!(10)
        );
    }
}
