//! Reservations

use rusty_money::{Money, iso::Currency};
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    customers::CustomerKey,
    movies::{Movie, MovieKey},
    pricing::{FeeError, calculate_fee},
    screenings::Screening,
};

/// Errors that can occur while making a reservation.
#[derive(Debug, Error)]
pub enum ReservationError {
    /// The screening refers to a movie that is not in the catalog.
    #[error("Missing movie")]
    MissingMovie(MovieKey),

    /// Errors bubbled up from fee calculation.
    #[error(transparent)]
    Fee(#[from] FeeError),
}

/// An immutable record of one successful reservation.
#[derive(Debug, Clone, Copy)]
pub struct Reservation<'a> {
    customer: CustomerKey,
    screening: Screening,
    fee: Money<'a, Currency>,
    audience_count: u32,
}

impl<'a> Reservation<'a> {
    /// Creates a new reservation record.
    #[must_use]
    pub fn new(
        customer: CustomerKey,
        screening: Screening,
        fee: Money<'a, Currency>,
        audience_count: u32,
    ) -> Self {
        Self {
            customer,
            screening,
            fee,
            audience_count,
        }
    }

    /// Returns the customer the reservation was made for.
    pub fn customer(&self) -> CustomerKey {
        self.customer
    }

    /// Returns the screening that was reserved.
    pub fn screening(&self) -> &Screening {
        &self.screening
    }

    /// Returns the total fee for all seats.
    pub fn fee(&self) -> &Money<'a, Currency> {
        &self.fee
    }

    /// Returns the number of seats reserved.
    pub fn audience_count(&self) -> u32 {
        self.audience_count
    }
}

/// Reserves seats for a customer at a screening.
///
/// Resolves the screening's movie, checks discount eligibility, calculates
/// the total fee and assembles the reservation record. The movie catalog is
/// read-only for the duration of the call.
///
/// # Errors
///
/// - [`ReservationError::MissingMovie`]: the screening's movie key is not in the catalog.
/// - [`ReservationError::Fee`]: the fee could not be calculated.
pub fn reserve<'a>(
    movies: &SlotMap<MovieKey, Movie<'a>>,
    screening: &Screening,
    customer: CustomerKey,
    audience_count: u32,
) -> Result<Reservation<'a>, ReservationError> {
    let movie = movies
        .get(screening.movie())
        .ok_or(ReservationError::MissingMovie(screening.movie()))?;

    let discountable = movie.is_discountable(screening);
    let fee = calculate_fee(movie, discountable, audience_count)?;

    Ok(Reservation::new(customer, *screening, fee, audience_count))
}
