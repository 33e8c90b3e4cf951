use super::prelude::*;
use crate::repositories::Error as RepoError;
use std::cell::RefCell;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub restaurants: RefCell<Vec<Restaurant>>,
    pub cities: RefCell<Vec<City>>,
}

impl RestaurantRepo for MockDb {
    fn all_restaurants(&self) -> RepoResult<Vec<Restaurant>> {
        Ok(self.restaurants.borrow().clone())
    }

    fn count_restaurants(&self) -> RepoResult<usize> {
        Ok(self.restaurants.borrow().len())
    }

    fn get_restaurant(&self, id: &str) -> RepoResult<Restaurant> {
        self.restaurants
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl CityRepo for MockDb {
    fn all_cities(&self) -> RepoResult<Vec<City>> {
        Ok(self.cities.borrow().clone())
    }
}
