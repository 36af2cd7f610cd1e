//! Screenings

use chrono::NaiveDateTime;

use crate::movies::MovieKey;

/// One scheduled showing of a movie.
///
/// A screening is created once per showing and is read-only thereafter. It
/// refers to its movie by key; the movie catalog owns the movie itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Screening {
    movie: MovieKey,
    sequence: u32,
    screened_at: NaiveDateTime,
}

impl Screening {
    /// Creates a new screening for the given movie.
    #[must_use]
    pub fn new(movie: MovieKey, sequence: u32, screened_at: NaiveDateTime) -> Self {
        Self {
            movie,
            sequence,
            screened_at,
        }
    }

    /// Returns the key of the movie being shown.
    pub fn movie(&self) -> MovieKey {
        self.movie
    }

    /// Returns the ordinal position of this showing in the schedule.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Returns the date and time the showing starts.
    pub fn screened_at(&self) -> NaiveDateTime {
        self.screened_at
    }
}
