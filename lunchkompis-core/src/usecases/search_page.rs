use std::{collections::BTreeSet, fmt};

use super::{filter_restaurants::*, prelude::*, restaurants_in_city::*, selection::*};
use crate::util::sort::{sort_restaurants, SortOrder};

/// Gets notified about every change of a [`SearchPage`],
/// e.g. to update the result list or the markers of a map.
pub trait SearchPageObserver {
    fn results_changed(&self, results: &[Restaurant]);
    fn selection_changed(&self, selected: Option<&Restaurant>);
}

/// A single modification of the filter criteria.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterChange {
    Text(String),
    PriceRange(Option<PriceRange>),
    Cuisines(BTreeSet<String>),
    /// Add the cuisine if missing, otherwise remove it
    ToggleCuisine(String),
    MinRating(Option<Rating>),
    /// Set the threshold or remove it if it is already set
    ToggleMinRating(Rating),
    Clear,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub id: Id,
    pub name: String,
    pub pos: MapPoint,
    pub highlighted: bool,
}

/// State of the search results view of a single city.
///
/// All mutations go through [`SearchPage::apply`], [`SearchPage::set_sort_order`]
/// and [`SearchPage::toggle_selection`]. Results are recomputed synchronously.
pub struct SearchPage {
    city: String,
    restaurants: Vec<Restaurant>,
    filter: FilterState,
    sort_order: SortOrder,
    results: Vec<Restaurant>,
    selection: SelectionState,
    observers: Vec<Box<dyn SearchPageObserver>>,
}

impl fmt::Debug for SearchPage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SearchPage")
            .field("city", &self.city)
            .field("restaurants", &self.restaurants.len())
            .field("filter", &self.filter)
            .field("sort_order", &self.sort_order)
            .field("results", &self.results.len())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl SearchPage {
    pub fn mount<R: RestaurantRepo>(repo: &R, city: &str) -> Result<Self> {
        let restaurants = restaurants_in_city(repo, city)?;
        Ok(Self::new(city, restaurants))
    }

    pub fn new(city: impl Into<String>, restaurants: Vec<Restaurant>) -> Self {
        let mut page = Self {
            city: city.into(),
            restaurants,
            filter: FilterState::default(),
            sort_order: SortOrder::default(),
            results: vec![],
            selection: SelectionState::default(),
            observers: vec![],
        };
        page.recompute();
        page
    }

    /// Register an observer. It is immediately notified about the current state.
    pub fn subscribe(&mut self, observer: Box<dyn SearchPageObserver>) {
        observer.results_changed(&self.results);
        observer.selection_changed(self.selected_restaurant());
        self.observers.push(observer);
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn results(&self) -> &[Restaurant] {
        &self.results
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        let id = self.selection.selected()?;
        self.results.iter().find(|r| &r.id == id)
    }

    pub fn result_count_label(&self) -> String {
        match self.results.len() {
            1 => "1 restaurant".to_string(),
            n => format!("{n} restaurants"),
        }
    }

    pub fn apply(&mut self, change: FilterChange) {
        log::debug!("Apply filter change {change:?}");
        let filter = &mut self.filter;
        match change {
            FilterChange::Text(text) => filter.text = text,
            FilterChange::PriceRange(range) => filter.price_range = range,
            FilterChange::Cuisines(cuisines) => filter.cuisines = cuisines,
            FilterChange::ToggleCuisine(cuisine) => {
                if !filter.cuisines.remove(&cuisine) {
                    filter.cuisines.insert(cuisine);
                }
            }
            FilterChange::MinRating(rating) => filter.min_rating = rating,
            FilterChange::ToggleMinRating(rating) => {
                filter.min_rating = if filter.min_rating == Some(rating) {
                    None
                } else {
                    Some(rating)
                };
            }
            FilterChange::Clear => *filter = FilterState::default(),
        }
        self.recompute();
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        if self.sort_order == sort_order {
            return;
        }
        self.sort_order = sort_order;
        self.recompute();
    }

    /// Select a restaurant of the current results or clear the selection
    /// if it is already selected. `None` clears the selection.
    ///
    /// Returns `true` if the selection has changed.
    pub fn toggle_selection(&mut self, id: Option<&Id>) -> bool {
        if let Some(id) = id {
            if !self.results.iter().any(|r| &r.id == id) {
                log::warn!("Cannot select restaurant '{id}': not part of the current results");
                return false;
            }
        }
        if !self.selection.toggle(id) {
            return false;
        }
        let selected = self.selected_restaurant();
        for observer in &self.observers {
            observer.selection_changed(selected);
        }
        true
    }

    /// One marker for every displayed restaurant with a known position.
    pub fn map_markers(&self) -> Vec<MapMarker> {
        self.results
            .iter()
            .filter_map(|r| {
                r.pos().map(|pos| MapMarker {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    pos,
                    highlighted: self.selection.is_selected(&r.id),
                })
            })
            .collect()
    }

    fn recompute(&mut self) {
        let mut results = filter_restaurants(&self.restaurants, &self.filter);
        sort_restaurants(&mut results, self.sort_order);
        log::debug!(
            "{} of {} restaurant(s) in '{}' match the filter",
            results.len(),
            self.restaurants.len(),
            self.city
        );
        self.results = results;
        for observer in &self.observers {
            observer.results_changed(&self.results);
        }
        let selection_is_visible = self
            .selection
            .selected()
            .is_none_or(|id| self.results.iter().any(|r| &r.id == id));
        if !selection_is_visible && self.selection.clear() {
            for observer in &self.observers {
                observer.selection_changed(None);
            }
        }
    }
}
