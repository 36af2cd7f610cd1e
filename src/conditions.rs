//! Discount Conditions

use chrono::{Datelike, NaiveTime, Weekday};

use crate::screenings::Screening;

/// One independent eligibility rule attached to a movie.
///
/// A screening qualifies for the movie's discount if any one of its
/// conditions is satisfied; each variant carries its own predicate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiscountCondition {
    /// Satisfied when the screening falls on the given day of the week and
    /// its time of day lies within `[start, end]`, inclusive on both ends.
    Period {
        /// Day of the week the window applies to
        day: Weekday,

        /// Start of the time window
        start: NaiveTime,

        /// End of the time window
        end: NaiveTime,
    },

    /// Satisfied when the screening's ordinal position in the schedule
    /// equals this value exactly.
    Sequence(u32),
}

impl DiscountCondition {
    /// Returns whether the given screening satisfies this condition.
    #[must_use]
    pub fn is_satisfied_by(&self, screening: &Screening) -> bool {
        match self {
            DiscountCondition::Period { day, start, end } => {
                let screened_at = screening.screened_at();

                screened_at.weekday() == *day && (*start..=*end).contains(&screened_at.time())
            }
            DiscountCondition::Sequence(sequence) => screening.sequence() == *sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use testresult::TestResult;

    use crate::movies::MovieKey;

    use super::*;

    fn monday_at(hour: u32, minute: u32) -> Result<NaiveDateTime, &'static str> {
        // 2026-03-02 is a Monday.
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .ok_or("invalid test date")
    }

    fn morning_window() -> Result<DiscountCondition, &'static str> {
        let start = NaiveTime::from_hms_opt(10, 0, 0).ok_or("invalid start time")?;
        let end = NaiveTime::from_hms_opt(12, 0, 0).ok_or("invalid end time")?;

        Ok(DiscountCondition::Period {
            day: Weekday::Mon,
            start,
            end,
        })
    }

    #[test]
    fn period_matches_inside_the_window() -> TestResult {
        let condition = morning_window()?;
        let screening = Screening::new(MovieKey::default(), 1, monday_at(11, 0)?);

        assert!(condition.is_satisfied_by(&screening));

        Ok(())
    }

    #[test]
    fn period_window_is_inclusive_on_both_ends() -> TestResult {
        let condition = morning_window()?;

        let at_start = Screening::new(MovieKey::default(), 1, monday_at(10, 0)?);
        let at_end = Screening::new(MovieKey::default(), 1, monday_at(12, 0)?);

        assert!(condition.is_satisfied_by(&at_start));
        assert!(condition.is_satisfied_by(&at_end));

        Ok(())
    }

    #[test]
    fn period_rejects_one_minute_outside_either_bound() -> TestResult {
        let condition = morning_window()?;

        let before = Screening::new(MovieKey::default(), 1, monday_at(9, 59)?);
        let after = Screening::new(MovieKey::default(), 1, monday_at(12, 1)?);

        assert!(!condition.is_satisfied_by(&before));
        assert!(!condition.is_satisfied_by(&after));

        Ok(())
    }

    #[test]
    fn period_rejects_a_different_day_of_week() -> TestResult {
        let condition = morning_window()?;

        // Same time of day, but 2026-03-03 is a Tuesday.
        let tuesday = NaiveDate::from_ymd_opt(2026, 3, 3)
            .and_then(|date| date.and_hms_opt(11, 0, 0))
            .ok_or("invalid test date")?;

        let screening = Screening::new(MovieKey::default(), 1, tuesday);

        assert!(!condition.is_satisfied_by(&screening));

        Ok(())
    }

    #[test]
    fn sequence_matches_only_the_exact_sequence() -> TestResult {
        let condition = DiscountCondition::Sequence(1);

        let first = Screening::new(MovieKey::default(), 1, monday_at(11, 0)?);
        let second = Screening::new(MovieKey::default(), 2, monday_at(11, 0)?);

        assert!(condition.is_satisfied_by(&first));
        assert!(!condition.is_satisfied_by(&second));

        Ok(())
    }
}
