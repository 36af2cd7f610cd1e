//! Movie Fixtures

use chrono::{NaiveTime, Weekday};
use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, KRW, USD},
};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    conditions::DiscountCondition, discounts::DiscountPolicy, fixtures::FixtureError, movies::Movie,
};

/// Wrapper for movies in YAML
#[derive(Debug, Deserialize)]
pub struct MoviesFixture {
    /// Map of movie key -> movie fixture
    pub movies: FxHashMap<String, MovieFixture>,
}

/// Movie Fixture
#[derive(Debug, Deserialize)]
pub struct MovieFixture {
    /// Movie title
    pub title: String,

    /// Base per-seat fee (e.g., "10000 KRW")
    pub fee: String,

    /// Discount policy configuration
    pub discount: DiscountFixtureConfig,

    /// Eligibility conditions
    #[serde(default)]
    pub conditions: Vec<ConditionFixture>,
}

/// Discount policy configuration from YAML fixtures
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountFixtureConfig {
    /// Fixed amount off the per-seat fee (e.g., "800 KRW")
    AmountOff {
        /// Discount amount string (e.g., "800 KRW")
        value: String,
    },

    /// Percentage off the per-seat fee (value between 0.0 and 1.0)
    PercentOff {
        /// Discount percentage as decimal (e.g., 0.1 for 10%)
        value: f64,
    },

    /// No discount
    None,
}

/// Discount condition from YAML fixtures
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionFixture {
    /// Day-of-week time window condition
    Period {
        /// Day of the week (e.g., "monday")
        day: String,

        /// Window start (e.g., "10:00")
        start: String,

        /// Window end (e.g., "12:00")
        end: String,
    },

    /// Screening-order condition
    Sequence {
        /// Ordinal position in the schedule
        sequence: u32,
    },
}

impl TryFrom<MovieFixture> for Movie<'_> {
    type Error = FixtureError;

    fn try_from(fixture: MovieFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.fee)?;
        let fee = Money::from_minor(minor_units, currency);

        let discount = match fixture.discount {
            DiscountFixtureConfig::AmountOff { value } => {
                let (amount_minor, amount_currency) = parse_price(&value)?;

                if amount_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        amount_currency.iso_alpha_code.to_string(),
                    ));
                }

                DiscountPolicy::AmountOff(Money::from_minor(amount_minor, amount_currency))
            }
            DiscountFixtureConfig::PercentOff { value } => {
                DiscountPolicy::PercentOff(Percentage::from(value))
            }
            DiscountFixtureConfig::None => DiscountPolicy::None,
        };

        let conditions = fixture
            .conditions
            .into_iter()
            .map(DiscountCondition::try_from)
            .collect::<Result<SmallVec<_>, _>>()?;

        Ok(Movie {
            title: fixture.title,
            fee,
            discount,
            conditions,
        })
    }
}

impl TryFrom<ConditionFixture> for DiscountCondition {
    type Error = FixtureError;

    fn try_from(fixture: ConditionFixture) -> Result<Self, Self::Error> {
        match fixture {
            ConditionFixture::Period { day, start, end } => Ok(DiscountCondition::Period {
                day: parse_day(&day)?,
                start: parse_time(&start)?,
                end: parse_time(&end)?,
            }),
            ConditionFixture::Sequence { sequence } => Ok(DiscountCondition::Sequence(sequence)),
        }
    }
}

/// Parse price string (e.g., "10000 KRW") into minor units and currency
///
/// The amount is scaled by the currency's exponent, so "2.99 GBP" becomes
/// 299 minor units while "10000 KRW" stays 10000.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        "KRW" => KRW,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let scale = Decimal::from(10_i64.pow(currency.exponent));

    let minor_units = amount
        .checked_mul(scale)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

/// Parse a day-of-week string (e.g., "monday" or "mon")
///
/// # Errors
///
/// Returns an error if the string is not a recognized day of the week.
pub fn parse_day(s: &str) -> Result<Weekday, FixtureError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_err| FixtureError::InvalidDay(s.to_string()))
}

/// Parse a time-of-day string in "HH:MM" format (e.g., "10:00")
///
/// # Errors
///
/// Returns an error if the string is not a valid "HH:MM" time.
pub fn parse_time(s: &str) -> Result<NaiveTime, FixtureError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_err| FixtureError::InvalidTime(s.to_string()))
}
