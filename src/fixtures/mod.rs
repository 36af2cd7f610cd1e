//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    customers::{Customer, CustomerKey},
    fixtures::{
        customers::CustomersFixture,
        movies::MoviesFixture,
        screenings::{ScreeningsFixture, parse_screened_at},
    },
    movies::{Movie, MovieKey},
    screenings::Screening,
};

pub mod customers;
pub mod movies;
pub mod screenings;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between a movie's fee and its discount amount
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Invalid day-of-week
    #[error("Invalid day of week: {0}")]
    InvalidDay(String),

    /// Invalid time-of-day
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Invalid date-time
    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    /// Movie not found
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    /// Customer not found
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}

/// Fixture
///
/// Loads movies, screenings and customers from YAML files into the same
/// catalog types the reservation pipeline consumes.
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// `SlotMaps` to store the actual types with generated keys
    movie_meta: SlotMap<MovieKey, Movie<'a>>,
    customer_meta: SlotMap<CustomerKey, Customer>,

    /// String key -> `SlotMap` key mappings for lookups
    movie_keys: FxHashMap<String, MovieKey>,
    customer_keys: FxHashMap<String, CustomerKey>,

    /// Pre-built screenings (reference movies by `MovieKey`)
    screenings: Vec<Screening>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            movie_meta: SlotMap::with_key(),
            customer_meta: SlotMap::with_key(),
            movie_keys: FxHashMap::default(),
            customer_keys: FxHashMap::default(),
            screenings: Vec::new(),
        }
    }

    /// Load a complete fixture set (movies, screenings and customers that
    /// share a set name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_movies(name)?
            .load_screenings(name)?
            .load_customers(name)?;

        Ok(fixture)
    }

    /// Load movies from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// movie's discount amount is in a different currency than its fee.
    pub fn load_movies(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("movies").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: MoviesFixture = serde_norway::from_str(&contents)?;

        for (key, movie_fixture) in fixture.movies {
            let movie: Movie<'a> = movie_fixture.try_into()?;
            let movie_key = self.movie_meta.insert(movie);

            self.movie_keys.insert(key, movie_key);
        }

        Ok(self)
    }

    /// Load screenings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// referenced movie doesn't exist.
    pub fn load_screenings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("screenings")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: ScreeningsFixture = serde_norway::from_str(&contents)?;

        for screening_fixture in fixture.screenings {
            let movie_key = self
                .movie_keys
                .get(&screening_fixture.movie)
                .ok_or_else(|| FixtureError::MovieNotFound(screening_fixture.movie.clone()))?;

            let screened_at = parse_screened_at(&screening_fixture.screened_at)?;
            let screening = Screening::new(*movie_key, screening_fixture.sequence, screened_at);

            self.screenings.push(screening);
        }

        Ok(self)
    }

    /// Load customers from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_customers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("customers")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: CustomersFixture = serde_norway::from_str(&contents)?;

        for (key, customer_fixture) in fixture.customers {
            let customer_key = self.customer_meta.insert(customer_fixture.into());

            self.customer_keys.insert(key, customer_key);
        }

        Ok(self)
    }

    /// Get a movie by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the movie is not found.
    pub fn movie(&self, key: &str) -> Result<&Movie<'a>, FixtureError> {
        let movie_key = self
            .movie_keys
            .get(key)
            .ok_or_else(|| FixtureError::MovieNotFound(key.to_string()))?;

        self.movie_meta
            .get(*movie_key)
            .ok_or_else(|| FixtureError::MovieNotFound(key.to_string()))
    }

    /// Get a movie key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the movie is not found.
    pub fn movie_key(&self, key: &str) -> Result<MovieKey, FixtureError> {
        self.movie_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::MovieNotFound(key.to_string()))
    }

    /// Get a customer key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the customer is not found.
    pub fn customer_key(&self, key: &str) -> Result<CustomerKey, FixtureError> {
        self.customer_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::CustomerNotFound(key.to_string()))
    }

    /// Get a customer by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the customer is not found.
    pub fn customer(&self, key: &str) -> Result<&Customer, FixtureError> {
        let customer_key = self.customer_key(key)?;

        self.customer_meta
            .get(customer_key)
            .ok_or_else(|| FixtureError::CustomerNotFound(key.to_string()))
    }

    /// The movie catalog, as the reservation pipeline consumes it
    pub fn movies(&self) -> &SlotMap<MovieKey, Movie<'a>> {
        &self.movie_meta
    }

    /// The customer registry
    pub fn customers(&self) -> &SlotMap<CustomerKey, Customer> {
        &self.customer_meta
    }

    /// All loaded screenings, in schedule order
    pub fn screenings(&self) -> &[Screening] {
        &self.screenings
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write as _};

    use rusty_money::{Money, iso::KRW};
    use testresult::TestResult;

    use crate::discounts::DiscountPolicy;

    use super::*;

    #[test]
    fn fixture_from_set_loads_all_fixtures() -> TestResult {
        let fixture = Fixture::from_set("classic")?;

        assert_eq!(fixture.movie_keys.len(), 3);
        assert_eq!(fixture.screenings().len(), 4);
        assert_eq!(fixture.customer_keys.len(), 2);

        Ok(())
    }

    #[test]
    fn loaded_movies_carry_their_policies_and_conditions() -> TestResult {
        let fixture = Fixture::from_set("classic")?;

        let sequel = fixture.movie("star-blazer")?;
        assert!(matches!(sequel.discount, DiscountPolicy::AmountOff(_)));
        assert_eq!(sequel.fee, Money::from_minor(10_000, KRW));
        assert_eq!(sequel.conditions.len(), 2);

        let matinee = fixture.movie("morning-light")?;
        assert!(matches!(matinee.discount, DiscountPolicy::PercentOff(_)));

        let plain = fixture.movie("midnight-run")?;
        assert!(matches!(plain.discount, DiscountPolicy::None));

        Ok(())
    }

    #[test]
    fn screenings_resolve_their_movie_keys() -> TestResult {
        let fixture = Fixture::from_set("classic")?;
        let sequel_key = fixture.movie_key("star-blazer")?;

        let sequel_screenings = fixture
            .screenings()
            .iter()
            .filter(|screening| screening.movie() == sequel_key)
            .count();

        assert_eq!(sequel_screenings, 2);

        Ok(())
    }

    #[test]
    fn unknown_movie_reference_in_screenings_is_rejected() -> TestResult {
        let dir = tempfile::tempdir()?;

        fs::create_dir_all(dir.path().join("movies"))?;
        fs::create_dir_all(dir.path().join("screenings"))?;

        let mut movies_file = fs::File::create(dir.path().join("movies/broken.yml"))?;
        writeln!(
            movies_file,
            "movies:\n  listed:\n    title: Listed\n    fee: 10000 KRW\n    discount:\n      type: none"
        )?;

        let mut screenings_file = fs::File::create(dir.path().join("screenings/broken.yml"))?;
        writeln!(
            screenings_file,
            "screenings:\n  - movie: unlisted\n    sequence: 1\n    screened_at: \"2026-03-02 11:00\""
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_movies("broken")?;

        let result = fixture.load_screenings("broken");

        assert!(matches!(result, Err(FixtureError::MovieNotFound(_))));

        Ok(())
    }

    #[test]
    fn missing_fixture_file_surfaces_an_io_error() {
        let result = Fixture::from_set("no-such-set");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn unknown_lookups_return_not_found_errors() -> TestResult {
        let fixture = Fixture::from_set("classic")?;

        assert!(matches!(
            fixture.movie("unlisted"),
            Err(FixtureError::MovieNotFound(_))
        ));
        assert!(matches!(
            fixture.customer("stranger"),
            Err(FixtureError::CustomerNotFound(_))
        ));

        Ok(())
    }
}
