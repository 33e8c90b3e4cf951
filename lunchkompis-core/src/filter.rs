//! Predicates that narrow a list of restaurants.
//!
//! Every predicate passes all restaurants if its criterion is inactive.

use std::collections::BTreeSet;

use crate::{entities::*, text};

// The query is taken literally, surrounding whitespace included.
pub fn restaurants_by_text(text: &str) -> impl Fn(&Restaurant) -> bool {
    let query = text.to_lowercase();
    move |r| query.is_empty() || text::contains_ignore_case(&r.name, &query)
}

pub fn restaurants_by_min_rating(min_rating: Option<Rating>) -> impl Fn(&Restaurant) -> bool {
    move |r| min_rating.is_none_or(|min| r.rating >= min)
}

// Set membership is exact, cuisine names are neither case folded nor trimmed.
pub fn restaurants_by_cuisines(cuisines: &BTreeSet<String>) -> impl Fn(&Restaurant) -> bool + '_ {
    move |r| cuisines.is_empty() || cuisines.iter().any(|c| r.has_cuisine(c))
}

// A single menu item within the range qualifies the whole restaurant.
pub fn restaurants_by_price_range(range: Option<PriceRange>) -> impl Fn(&Restaurant) -> bool {
    move |r| range.is_none_or(|range| r.menu_items().any(|item| range.contains(item.price)))
}
