use crate::{
    contact::*, geo::*, id::*, location::*, menu::*, price::*, rating::*, tag::*, time::*,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: Id,
    pub name: String,
    pub cuisines: Vec<Tag>,
    pub features: Vec<Tag>,
    pub rating: Rating,
    pub location: Option<Location>,
    pub opening_hours: Vec<OpeningHours>,
    pub lunch_menus: Vec<LunchMenu>,
    pub contact: Option<Contact>,
    pub images: Vec<String>,
    pub popular_dishes: Vec<String>,
}

impl Restaurant {
    pub fn city(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.address.city.as_deref())
    }

    pub fn is_in_city(&self, city: &str) -> bool {
        self.location
            .as_ref()
            .is_some_and(|l| l.address.is_in_city(city))
    }

    pub fn pos(&self) -> Option<MapPoint> {
        self.location.as_ref().and_then(|l| l.pos)
    }

    /// All menu items across all lunch menus.
    pub fn menu_items(&self) -> impl Iterator<Item = &LunchMenuItem> {
        self.lunch_menus.iter().flat_map(|m| m.items.iter())
    }

    pub fn has_cuisine(&self, name: &str) -> bool {
        self.cuisines.iter().any(|c| c.name == name)
    }

    pub fn cheapest_price(&self) -> Option<Price> {
        self.lunch_menus
            .iter()
            .filter_map(LunchMenu::cheapest_price)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}
