//! Utils

use clap::Parser;

/// Arguments for the reservation demos
#[derive(Debug, Parser)]
pub struct DemoReserveArgs {
    /// Fixture set to use for movies, screenings and customers
    #[clap(short, long, default_value = "classic")]
    pub fixture: String,

    /// Customer making the reservations
    #[clap(short, long, default_value = "alice")]
    pub customer: String,

    /// Number of seats to reserve per screening
    #[clap(short, long, default_value_t = 2)]
    pub audience: u32,
}
