//! Screening Fixtures

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Wrapper for screenings in YAML
#[derive(Debug, Deserialize)]
pub struct ScreeningsFixture {
    /// Scheduled showings, in schedule order
    pub screenings: Vec<ScreeningFixture>,
}

/// Screening fixture from YAML
///
/// The movie is referenced by its fixture key; resolution to a `MovieKey`
/// happens when the fixture set is assembled.
#[derive(Debug, Deserialize)]
pub struct ScreeningFixture {
    /// Fixture key of the movie being shown
    pub movie: String,

    /// Ordinal position in the showing schedule
    pub sequence: u32,

    /// Showing date and time (e.g., "2026-03-02 11:00")
    pub screened_at: String,
}

/// Parse a date-time string in "YYYY-MM-DD HH:MM" format
///
/// # Errors
///
/// Returns an error if the string is not a valid date-time in that format.
pub fn parse_screened_at(s: &str) -> Result<NaiveDateTime, FixtureError> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_err| FixtureError::InvalidDateTime(s.to_string()))
}
