// Low-level catalog access traits.
// The catalog is read-only: there are no operations
// to create, update or delete records.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait RestaurantRepo {
    // All restaurants in catalog order
    fn all_restaurants(&self) -> Result<Vec<Restaurant>>;
    fn count_restaurants(&self) -> Result<usize>;

    fn get_restaurant(&self, id: &str) -> Result<Restaurant>;
    fn try_get_restaurant(&self, id: &str) -> Result<Option<Restaurant>> {
        match self.get_restaurant(id) {
            Ok(restaurant) => Ok(Some(restaurant)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub trait CityRepo {
    // Known cities in index order
    fn all_cities(&self) -> Result<Vec<City>>;
}
