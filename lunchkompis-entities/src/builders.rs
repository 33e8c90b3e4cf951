use std::sync::atomic::{AtomicU64, Ordering};

use crate::id::Id;

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

// Unique within the running process
fn next_id() -> Id {
    NEXT_ID.fetch_add(1, Ordering::Relaxed).to_string().into()
}

pub use self::{lunch_menu_builder::*, restaurant_builder::*};

pub mod restaurant_builder {

    use super::*;
    use crate::{
        geo::*, location::*, menu::*, rating::*, restaurant::*, tag::*, time::*,
    };

    #[derive(Debug)]
    pub struct RestaurantBuild {
        restaurant: Restaurant,
    }

    impl RestaurantBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.restaurant.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.restaurant.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.restaurant
                .location
                .get_or_insert_with(Location::default)
                .address
                .city = Some(city.into());
            self
        }
        pub fn street(mut self, street: &str) -> Self {
            self.restaurant
                .location
                .get_or_insert_with(Location::default)
                .address
                .street = Some(street.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.restaurant
                .location
                .get_or_insert_with(Location::default)
                .pos = Some(pos);
            self
        }
        pub fn no_location(mut self) -> Self {
            self.restaurant.location = None;
            self
        }
        pub fn cuisines(mut self, cuisines: Vec<&str>) -> Self {
            self.restaurant.cuisines = cuisines.into_iter().map(Tag::from).collect();
            self
        }
        pub fn features(mut self, features: Vec<&str>) -> Self {
            self.restaurant.features = features.into_iter().map(Tag::from).collect();
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.restaurant.rating = rating.into();
            self
        }
        pub fn opening_hours(mut self, start: &str, end: &str) -> Self {
            self.restaurant.opening_hours.push(OpeningHours {
                start: start.parse().unwrap(),
                end: end.parse().unwrap(),
                day: None,
            });
            self
        }
        pub fn lunch_menu(mut self, menu: LunchMenu) -> Self {
            self.restaurant.lunch_menus.push(menu);
            self
        }
        /// Adds a lunch menu that consists of a single item with the given price.
        pub fn menu_item_price(self, price: u32) -> Self {
            let menu = LunchMenu::build().item("Dish of the day", price).finish();
            self.lunch_menu(menu)
        }
        pub fn finish(self) -> Restaurant {
            self.restaurant
        }
    }

    impl Builder for Restaurant {
        type Build = RestaurantBuild;
        fn build() -> RestaurantBuild {
            RestaurantBuild {
                restaurant: Restaurant {
                    id: next_id(),
                    name: "".into(),
                    cuisines: vec![],
                    features: vec![],
                    rating: Rating::min(),
                    location: Some(Location::default()),
                    opening_hours: vec![],
                    lunch_menus: vec![],
                    contact: None,
                    images: vec![],
                    popular_dishes: vec![],
                },
            }
        }
    }
}

pub mod lunch_menu_builder {

    use super::*;
    use crate::menu::*;

    #[derive(Debug)]
    pub struct LunchMenuBuild {
        menu: LunchMenu,
    }

    impl LunchMenuBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.menu.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.menu.name = name.into();
            self
        }
        pub fn item(mut self, name: &str, price: u32) -> Self {
            self.menu.items.push(LunchMenuItem {
                id: next_id(),
                name: name.into(),
                description: None,
                price: price.into(),
                tags: vec![],
                allergens: vec![],
                images: vec![],
            });
            self
        }
        pub fn extras(mut self, extras: Vec<Extra>) -> Self {
            self.menu.extras = extras;
            self
        }
        pub fn finish(self) -> LunchMenu {
            self.menu
        }
    }

    impl Builder for LunchMenu {
        type Build = LunchMenuBuild;
        fn build() -> LunchMenuBuild {
            LunchMenuBuild {
                menu: LunchMenu {
                    id: next_id(),
                    name: "Lunch".into(),
                    description: None,
                    items: vec![],
                    extras: vec![],
                },
            }
        }
    }
}
