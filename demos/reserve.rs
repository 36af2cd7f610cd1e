//! Reservation Demo
//!
//! Loads a fixture set of movies, screenings and customers, then reserves
//! seats at every screening for one customer and prints the fees.
//!
//! Run with: `cargo run --example reserve`

use anyhow::{Context, Result};
use clap::Parser;

use marquee::{fixtures::Fixture, reservations::reserve, utils::DemoReserveArgs};

/// Reservation Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoReserveArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)
        .with_context(|| format!("failed to load fixture set '{}'", args.fixture))?;

    let customer_key = fixture.customer_key(&args.customer)?;
    let customer = fixture.customer(&args.customer)?;

    println!(
        "Reserving {} seat(s) per screening for {}",
        args.audience, customer.name
    );

    for screening in fixture.screenings() {
        let movie = fixture
            .movies()
            .get(screening.movie())
            .context("screening refers to a movie that is not in the catalog")?;

        let reservation = reserve(fixture.movies(), screening, customer_key, args.audience)?;

        println!(
            "{} (screening #{} at {}): {}",
            movie.title,
            screening.sequence(),
            screening.screened_at(),
            reservation.fee(),
        );
    }

    Ok(())
}
