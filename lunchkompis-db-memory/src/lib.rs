//! In-memory implementation of the catalog repositories.
//!
//! The catalog is loaded once and never modified afterwards.

use std::collections::HashMap;

use lunchkompis_core::{
    entities::*,
    repositories::{CityRepo, Error as RepoError, RestaurantRepo},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    restaurants: Vec<Restaurant>,
    // Position of each restaurant in `restaurants`
    index: HashMap<Id, usize>,
    cities: Vec<City>,
}

impl InMemoryCatalog {
    pub fn try_new(restaurants: Vec<Restaurant>, cities: Vec<City>) -> Result<Self> {
        let mut index = HashMap::with_capacity(restaurants.len());
        for (pos, r) in restaurants.iter().enumerate() {
            if index.insert(r.id.clone(), pos).is_some() {
                log::warn!("Duplicate restaurant id '{}'", r.id);
                return Err(RepoError::AlreadyExists);
            }
        }
        log::info!(
            "Loaded catalog with {} restaurant(s) and {} known cities",
            restaurants.len(),
            cities.len()
        );
        Ok(Self {
            restaurants,
            index,
            cities,
        })
    }
}

impl RestaurantRepo for InMemoryCatalog {
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.restaurants.clone())
    }

    fn count_restaurants(&self) -> Result<usize> {
        Ok(self.restaurants.len())
    }

    fn get_restaurant(&self, id: &str) -> Result<Restaurant> {
        self.index
            .get(id)
            .map(|pos| self.restaurants[*pos].clone())
            .ok_or(RepoError::NotFound)
    }
}

impl CityRepo for InMemoryCatalog {
    fn all_cities(&self) -> Result<Vec<City>> {
        Ok(self.cities.clone())
    }
}
