//! Resolution of free-text food descriptions to nutrition values.
//!
//! The diet plan never talks to the network itself: callers run a lookup and
//! only add the resulting entry once a complete result is in hand.

mod nutritionix;
mod response;

use thiserror::Error;

use crate::models::FoodEntry;

pub use nutritionix::{LookupConfig, NutritionixClient};
pub use response::{
    NutrientsRequest, NutrientsResponse, NutritionixFood, aggregate_foods, parse_response,
    title_case,
};

/// Why a lookup produced no entry.
///
/// Every variant means the same thing to the caller ("no result"); the text is
/// only shown as an advisory message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupMiss {
    #[error("empty food description")]
    EmptyQuery,

    #[error("nutrition service credentials are not configured")]
    MissingCredentials,

    #[error("API request failed: {0}")]
    Request(String),

    #[error("API error: {status} {body}")]
    Status { status: u16, body: String },

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("no foods recognized")]
    NoFoods,
}

/// A service that turns "150g paneer and 1 apple" into one aggregated entry.
///
/// Implementations make one best-effort attempt per call: no retries, no
/// caching.
pub trait NutritionLookup {
    fn lookup(&self, description: &str) -> Result<FoodEntry, LookupMiss>;
}

impl<T: NutritionLookup + ?Sized> NutritionLookup for &T {
    fn lookup(&self, description: &str) -> Result<FoodEntry, LookupMiss> {
        (**self).lookup(description)
    }
}

impl<T: NutritionLookup + ?Sized> NutritionLookup for Box<T> {
    fn lookup(&self, description: &str) -> Result<FoodEntry, LookupMiss> {
        (**self).lookup(description)
    }
}
