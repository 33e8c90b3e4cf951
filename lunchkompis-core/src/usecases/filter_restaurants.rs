use std::collections::BTreeSet;

use super::prelude::*;
use crate::filter::*;

/// The filter criteria of a search page session.
///
/// Every criterion is optional. An inactive criterion lets all
/// restaurants pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub price_range: Option<PriceRange>,
    pub cuisines: BTreeSet<String>,
    pub min_rating: Option<Rating>,
    pub text: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        let Self {
            price_range,
            cuisines,
            min_rating,
            text,
        } = self;
        price_range.is_none()
            && cuisines.is_empty()
            && min_rating.is_none()
            && text.is_empty()
    }
}

/// Unvalidated filter input as it arrives from the outside.
#[derive(Clone, Debug, Default)]
pub struct FilterParams {
    pub text: Option<String>,
    pub cuisines: Vec<String>,
    pub min_rating: Option<String>,
    pub price_range: Option<String>,
}

pub fn parse_filter_params(params: FilterParams) -> Result<FilterState> {
    let FilterParams {
        text,
        cuisines,
        min_rating,
        price_range,
    } = params;
    let min_rating = min_rating
        .as_deref()
        .map(str::parse::<Rating>)
        .transpose()?;
    let price_range = price_range
        .as_deref()
        .map(str::parse::<PriceRange>)
        .transpose()?;
    Ok(FilterState {
        price_range,
        cuisines: cuisines.into_iter().collect(),
        min_rating,
        text: text.unwrap_or_default(),
    })
}

/// Apply all active criteria of the filter.
///
/// The relative order of the restaurants is preserved.
pub fn filter_restaurants(restaurants: &[Restaurant], filter: &FilterState) -> Vec<Restaurant> {
    let by_text = restaurants_by_text(&filter.text);
    let by_rating = restaurants_by_min_rating(filter.min_rating);
    let by_cuisines = restaurants_by_cuisines(&filter.cuisines);
    let by_price = restaurants_by_price_range(filter.price_range);
    restaurants
        .iter()
        .filter(|r| by_text(r) && by_rating(r) && by_cuisines(r) && by_price(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunchkompis_entities::builders::*;

    fn new_restaurants() -> Vec<Restaurant> {
        vec![
            Restaurant::build()
                .id("1")
                .name("Pasta Perfetta")
                .city("Stockholm")
                .cuisines(vec!["Italian"])
                .rating(4.5)
                .lunch_menu(
                    LunchMenu::build()
                        .item("Spaghetti Carbonara", 165)
                        .item("Margherita Pizza", 140)
                        .finish(),
                )
                .finish(),
            Restaurant::build()
                .id("2")
                .name("Sushi Palace")
                .city("Stockholm")
                .cuisines(vec!["Japanese"])
                .rating(4.2)
                .lunch_menu(
                    LunchMenu::build()
                        .item("Salmon Nigiri Set", 145)
                        .item("Dragon Roll", 180)
                        .finish(),
                )
                .finish(),
            Restaurant::build()
                .id("3")
                .name("Taco Bar")
                .city("Gothenburg")
                .cuisines(vec!["Mexican"])
                .rating(3.8)
                .lunch_menu(
                    LunchMenu::build()
                        .item("Chicken Taco Plate", 125)
                        .item("Veggie Burrito", 115)
                        .finish(),
                )
                .finish(),
            Restaurant::build()
                .id("4")
                .name("Pizza Palace")
                .no_location()
                .cuisines(vec!["Italian", "American"])
                .rating(3.1)
                .finish(),
        ]
    }

    fn ids(restaurants: &[Restaurant]) -> Vec<&str> {
        restaurants.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let restaurants = new_restaurants();
        let filter = FilterState::default();
        assert!(filter.is_empty());
        assert_eq!(filter_restaurants(&restaurants, &filter), restaurants);
        assert!(filter_restaurants(&[], &filter).is_empty());
    }

    #[test]
    fn text_query_is_not_trimmed() {
        let restaurants = vec![
            Restaurant::build().id("1").name("Sushi Palace").finish(),
            Restaurant::build().id("2").name("Nowhere").finish(),
        ];
        let filter = |text: &str| FilterState {
            text: text.into(),
            ..Default::default()
        };
        assert!(!filter(" ").is_empty());
        assert!(filter_restaurants(&restaurants, &filter("Palace ")).is_empty());
        assert_eq!(ids(&filter_restaurants(&restaurants, &filter(" "))), vec!["1"]);
        assert_eq!(ids(&filter_restaurants(&restaurants, &filter("PALACE"))), vec!["1"]);
    }

    #[test]
    fn filter_by_rating_threshold() {
        let restaurants = new_restaurants()[..2].to_vec();
        let filter = FilterState {
            min_rating: Some(4.3.into()),
            ..Default::default()
        };
        let filtered = filter_restaurants(&restaurants, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pasta Perfetta");
    }

    #[test]
    fn rating_threshold_is_sound_and_complete() {
        let restaurants = new_restaurants();
        for threshold in [0.0, 3.1, 3.5, 4.2, 4.5, 5.0] {
            let threshold = Rating::from(threshold);
            let filter = FilterState {
                min_rating: Some(threshold),
                ..Default::default()
            };
            let filtered = filter_restaurants(&restaurants, &filter);
            for r in &restaurants {
                assert_eq!(filtered.contains(r), r.rating >= threshold);
            }
        }
    }

    #[test]
    fn filter_by_selected_types() {
        let restaurants = new_restaurants()[..2].to_vec();
        let filter = FilterState {
            cuisines: ["Japanese".to_string()].into(),
            ..Default::default()
        };
        let filtered = filter_restaurants(&restaurants, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sushi Palace");
    }

    #[test]
    fn filter_by_price_range() {
        let restaurants = vec![
            Restaurant::build().id("cheap").menu_item_price(119).finish(),
            Restaurant::build().id("expensive").menu_item_price(180).finish(),
        ];
        let filter = FilterState {
            price_range: Some("100..150".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_restaurants(&restaurants, &filter)), vec!["cheap"]);
    }

    #[test]
    fn all_criteria_must_pass() {
        let restaurants = new_restaurants();
        let filter = FilterState {
            text: "palace".into(),
            cuisines: ["Italian".to_string(), "Japanese".to_string()].into(),
            min_rating: Some(3.0.into()),
            price_range: None,
        };
        assert_eq!(ids(&filter_restaurants(&restaurants, &filter)), vec!["2", "4"]);
        let filter = FilterState {
            price_range: Some("100..150".parse().unwrap()),
            ..filter
        };
        // Pizza Palace has no lunch menu at all
        assert_eq!(ids(&filter_restaurants(&restaurants, &filter)), vec!["2"]);
    }

    #[test]
    fn preserve_order_and_repeat_with_same_result() {
        let restaurants = new_restaurants();
        let filter = FilterState {
            min_rating: Some(3.5.into()),
            ..Default::default()
        };
        let first = filter_restaurants(&restaurants, &filter);
        let second = filter_restaurants(&restaurants, &filter);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["1", "2", "3"]);

        let mut reversed = restaurants.clone();
        reversed.reverse();
        assert_eq!(ids(&filter_restaurants(&reversed, &filter)), vec!["3", "2", "1"]);
    }

    #[test]
    fn parse_params() {
        let filter = parse_filter_params(FilterParams {
            text: Some("sushi".into()),
            cuisines: vec!["Japanese".into(), "Japanese".into()],
            min_rating: Some("4".into()),
            price_range: Some("100..150".into()),
        })
        .unwrap();
        assert_eq!(filter.text, "sushi");
        assert_eq!(filter.cuisines.len(), 1);
        assert_eq!(filter.min_rating, Some(4.0.into()));
        assert!(filter.price_range.is_some());

        assert!(parse_filter_params(FilterParams::default())
            .unwrap()
            .is_empty());
        assert!(matches!(
            parse_filter_params(FilterParams {
                min_rating: Some("9".into()),
                ..Default::default()
            }),
            Err(Error::Rating)
        ));
        assert!(matches!(
            parse_filter_params(FilterParams {
                price_range: Some("150..100".into()),
                ..Default::default()
            }),
            Err(Error::PriceRange(_))
        ));
    }
}
