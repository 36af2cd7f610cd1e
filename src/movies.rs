//! Movies

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::{conditions::DiscountCondition, discounts::DiscountPolicy, screenings::Screening};

new_key_type! {
    /// Movie Key
    pub struct MovieKey;
}

/// Movie
///
/// Immutable reference data: a base per-seat fee, one discount policy and
/// the conditions under which that policy applies. Movies live in a
/// `SlotMap<MovieKey, Movie>` catalog and screenings refer to them by key.
#[derive(Debug, Clone)]
pub struct Movie<'a> {
    /// Movie title
    pub title: String,

    /// Base per-seat fee
    pub fee: Money<'a, Currency>,

    /// Discount policy applied when a condition matches
    pub discount: DiscountPolicy<'a>,

    /// Eligibility conditions; any single match qualifies a screening
    pub conditions: SmallVec<[DiscountCondition; 4]>,
}

impl Movie<'_> {
    /// Returns whether the given screening qualifies for this movie's
    /// discount.
    ///
    /// Conditions are independent and side-effect-free, so the first match
    /// wins. A movie with no conditions never qualifies.
    #[must_use]
    pub fn is_discountable(&self, screening: &Screening) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition.is_satisfied_by(screening))
    }
}
