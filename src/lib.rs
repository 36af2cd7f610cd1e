//! Marquee
//!
//! Marquee is a reservation fee engine for movie screenings: it decides whether a screening
//! qualifies for its movie's discount, settles the per-seat price and produces an immutable
//! reservation record.

pub mod conditions;
pub mod customers;
pub mod discounts;
pub mod fixtures;
pub mod movies;
pub mod prelude;
pub mod pricing;
pub mod reservations;
pub mod screenings;
pub mod utils;
