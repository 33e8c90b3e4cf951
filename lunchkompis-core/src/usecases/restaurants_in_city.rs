use super::prelude::*;

/// All restaurants of a city in catalog order.
///
/// The city name is compared case-insensitively. An unknown city
/// results in an empty list.
pub fn restaurants_in_city<R: RestaurantRepo>(repo: &R, city: &str) -> Result<Vec<Restaurant>> {
    let city = city.trim();
    let mut restaurants = repo.all_restaurants()?;
    restaurants.retain(|r| r.is_in_city(city));
    log::debug!("Found {} restaurant(s) in '{city}'", restaurants.len());
    Ok(restaurants)
}
