use super::{prelude::*, restaurant_by_id::*};

const HOURS_NOT_AVAILABLE: &str = "Hours not available";

/// Everything the detail view shows about a single restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetails {
    pub id: Id,
    pub name: String,
    pub address: Option<String>,
    pub pos: Option<MapPoint>,
    pub hours: String,
    /// Cuisines followed by features
    pub tags: Vec<String>,
    pub rating: Rating,
    pub stars: u8,
    pub menu_name: Option<String>,
    pub menu_items: Vec<LunchMenuItem>,
    pub extras: Vec<Extra>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub popular_dishes: Vec<String>,
    pub image: Option<String>,
}

fn address_line(restaurant: &Restaurant) -> Option<String> {
    let address = &restaurant.location.as_ref()?.address;
    let line = [address.street.as_deref(), address.city.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    (!line.is_empty()).then_some(line)
}

impl From<&Restaurant> for RestaurantDetails {
    fn from(from: &Restaurant) -> Self {
        // Only the first lunch menu is presented
        let menu = from.lunch_menus.first();
        let contact = from.contact.as_ref();
        Self {
            id: from.id.clone(),
            name: from.name.clone(),
            address: address_line(from),
            pos: from.pos(),
            hours: from
                .opening_hours
                .first()
                .map(ToString::to_string)
                .unwrap_or_else(|| HOURS_NOT_AVAILABLE.to_string()),
            tags: from
                .cuisines
                .iter()
                .chain(from.features.iter())
                .map(|t| t.name.clone())
                .collect(),
            rating: from.rating,
            stars: from.rating.rounded_stars(),
            menu_name: menu.map(|m| m.name.clone()),
            menu_items: menu.map(|m| m.items.clone()).unwrap_or_default(),
            extras: menu.map(|m| m.extras.clone()).unwrap_or_default(),
            phone: contact.and_then(|c| c.phone.clone()),
            website: contact
                .and_then(Contact::website_host_and_path)
                .map(ToOwned::to_owned),
            popular_dishes: from.popular_dishes.clone(),
            image: from.images.first().cloned(),
        }
    }
}

pub fn load_restaurant_details<R: RestaurantRepo>(
    repo: &R,
    id: &str,
) -> Result<Option<RestaurantDetails>> {
    Ok(restaurant_by_id(repo, id)?
        .as_ref()
        .map(RestaurantDetails::from))
}
