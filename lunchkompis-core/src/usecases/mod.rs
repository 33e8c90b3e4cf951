mod error;
mod filter_restaurants;
mod restaurant_by_id;
mod restaurant_details;
mod restaurants_in_city;
mod search_page;
mod selection;
mod suggest_cities;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, filter_restaurants::*, restaurant_by_id::*, restaurant_details::*,
    restaurants_in_city::*, search_page::*, selection::*, suggest_cities::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
