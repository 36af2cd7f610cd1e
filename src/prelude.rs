//! Marquee prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    conditions::DiscountCondition,
    customers::{Customer, CustomerKey},
    discounts::{DiscountError, DiscountPolicy, discount_per_seat},
    fixtures::{Fixture, FixtureError},
    movies::{Movie, MovieKey},
    pricing::{FeeError, calculate_fee},
    reservations::{Reservation, ReservationError, reserve},
    screenings::Screening,
};
