//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    discounts::{DiscountError, discount_per_seat},
    movies::Movie,
};

/// Errors that can occur while calculating a reservation fee.
#[derive(Debug, Error)]
pub enum FeeError {
    /// The reservation requested zero seats.
    #[error("audience count must be at least one")]
    NoAudience,

    /// The movie's discount amount exceeds its base fee, which would
    /// produce a negative per-seat fee.
    #[error("discount amount exceeds the base fee")]
    DiscountExceedsFee,

    /// Multiplying the per-seat fee by the audience count overflowed.
    #[error("total fee overflowed minor units")]
    FeeOverflow,

    /// Errors bubbled up from the discount amount calculation.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total fee for a reservation.
///
/// The per-seat fee is settled first (base fee, minus the discount when the
/// screening qualifies) and only then multiplied by the audience count, so
/// any rounding in a discount strategy happens once per seat price rather
/// than once per total.
///
/// # Errors
///
/// - [`FeeError::NoAudience`]: `audience_count` is zero.
/// - [`FeeError::DiscountExceedsFee`]: the discount is larger than the base fee.
/// - [`FeeError::FeeOverflow`]: the total does not fit in minor units.
/// - [`FeeError::Discount`]: the discount amount could not be calculated.
/// - [`FeeError::Money`]: underlying money arithmetic failed.
pub fn calculate_fee<'a>(
    movie: &Movie<'a>,
    discountable: bool,
    audience_count: u32,
) -> Result<Money<'a, Currency>, FeeError> {
    if audience_count == 0 {
        return Err(FeeError::NoAudience);
    }

    let per_seat = if discountable {
        let discount = discount_per_seat(&movie.discount, &movie.fee)?;

        // Subtract first so a currency mismatch surfaces as a money error
        // rather than being misread as an oversized discount.
        let discounted = movie.fee.sub(discount)?;

        if discounted.to_minor_units() < 0 {
            return Err(FeeError::DiscountExceedsFee);
        }

        discounted
    } else {
        movie.fee
    };

    let total_minor = per_seat
        .to_minor_units()
        .checked_mul(i64::from(audience_count))
        .ok_or(FeeError::FeeOverflow)?;

    Ok(Money::from_minor(total_minor, movie.fee.currency()))
}
