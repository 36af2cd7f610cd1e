//! Discounts

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// How a movie reduces its per-seat fee once a screening qualifies.
///
/// The policy is fixed per movie; at most one applies to any reservation.
#[derive(Debug, Copy, Clone)]
pub enum DiscountPolicy<'a> {
    /// Subtract a fixed amount from the per-seat fee (e.g., "₩800 off")
    AmountOff(Money<'a, Currency>),

    /// Subtract a percentage of the per-seat fee (e.g., "10% off")
    PercentOff(Percentage),

    /// Never discount, even when a condition matches
    None,
}

/// Calculates the per-seat discount amount for a policy and base fee.
///
/// The amount is what a single seat saves; callers subtract it from the
/// base fee before multiplying by the audience count.
///
/// # Errors
///
/// Returns an error if a percentage calculation overflows or cannot be
/// safely represented in minor units (`DiscountError::PercentConversion`).
pub fn discount_per_seat<'a>(
    policy: &DiscountPolicy<'a>,
    base_fee: &Money<'a, Currency>,
) -> Result<Money<'a, Currency>, DiscountError> {
    match policy {
        DiscountPolicy::AmountOff(amount) => Ok(*amount),
        DiscountPolicy::PercentOff(percent) => {
            let discount_minor = percent_of_minor(percent, base_fee.to_minor_units())?;

            Ok(Money::from_minor(discount_minor, base_fee.currency()))
        }
        DiscountPolicy::None => Ok(Money::from_minor(0, base_fee.currency())),
    }
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// # Errors
///
/// Returns an error if:
/// - The percentage calculation overflows or cannot be safely represented (`DiscountError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage crate doesn't actually expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}
