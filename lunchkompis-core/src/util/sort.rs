use std::{cmp::Ordering, fmt, str::FromStr};

use lunchkompis_entities::{price::*, restaurant::*};
use thiserror::Error;

/// Order of the displayed search results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Catalog order
    #[default]
    Recommended,
    PriceLowToHigh,
    PriceHighToLow,
    /// Best rated first
    Rating,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sort order '{0}'")]
pub struct SortOrderParseError(String);

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceLowToHigh => "price-asc",
            Self::PriceHighToLow => "price-desc",
            Self::Rating => "rating",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let order = match s.trim().to_lowercase().as_str() {
            "recommended" => Self::Recommended,
            "price-asc" => Self::PriceLowToHigh,
            "price-desc" => Self::PriceHighToLow,
            "rating" => Self::Rating,
            _ => return Err(SortOrderParseError(s.to_owned())),
        };
        Ok(order)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Restaurants without any menu item are always sorted last.
fn cmp_cheapest_price(a: Option<Price>, b: Option<Price>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort, i.e. equal elements keep their relative order.
pub fn sort_restaurants(restaurants: &mut [Restaurant], order: SortOrder) {
    match order {
        SortOrder::Recommended => {}
        SortOrder::PriceLowToHigh => restaurants
            .sort_by(|a, b| cmp_cheapest_price(a.cheapest_price(), b.cheapest_price(), false)),
        SortOrder::PriceHighToLow => restaurants
            .sort_by(|a, b| cmp_cheapest_price(a.cheapest_price(), b.cheapest_price(), true)),
        SortOrder::Rating => restaurants.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
    }
}
