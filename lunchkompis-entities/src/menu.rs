use std::fmt;

use strum::EnumString;

use crate::{id::*, price::*, tag::*};

/// Something that comes with every lunch of a menu at no extra cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Extra {
    Coffee,
    Salad,
    Dessert,
    Bread,
    Drink,
    #[strum(default)]
    Other(String),
}

impl Extra {
    pub fn name(&self) -> &str {
        match self {
            Self::Coffee => "Coffee",
            Self::Salad => "Salad",
            Self::Dessert => "Dessert",
            Self::Bread => "Bread",
            Self::Drink => "Drink",
            Self::Other(name) => name,
        }
    }

    /// Exact, case-insensitive match against the known extras.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        name.parse()
            .unwrap_or_else(|_| Self::Other(name.to_owned()))
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LunchMenuItem {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub tags: Vec<Tag>,
    pub allergens: Vec<Tag>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LunchMenu {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<LunchMenuItem>,
    pub extras: Vec<Extra>,
}

impl LunchMenu {
    pub fn includes(&self, extra: &Extra) -> bool {
        self.extras.contains(extra)
    }

    pub fn cheapest_price(&self) -> Option<Price> {
        self.items
            .iter()
            .map(|item| item.price)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extras_case_insensitive() {
        assert_eq!(Extra::from_name("Coffee"), Extra::Coffee);
        assert_eq!(Extra::from_name("coffee"), Extra::Coffee);
        assert_eq!(Extra::from_name(" SALAD "), Extra::Salad);
    }

    #[test]
    fn unknown_extras_are_kept_verbatim() {
        assert_eq!(
            Extra::from_name("Coffee included"),
            Extra::Other("Coffee included".into())
        );
        assert_eq!(Extra::from_name("Soup").to_string(), "Soup");
        assert_eq!(Extra::Dessert.to_string(), "Dessert");
    }

    #[test]
    fn cheapest_item_of_a_menu() {
        let item = |price: u32| LunchMenuItem {
            id: Id::from(price.to_string()),
            name: "dish".into(),
            description: None,
            price: price.into(),
            tags: vec![],
            allergens: vec![],
            images: vec![],
        };
        let menu = LunchMenu {
            id: "1".into(),
            name: "Weekly Lunch Menu".into(),
            description: None,
            items: vec![item(165), item(140)],
            extras: vec![Extra::Coffee],
        };
        assert_eq!(menu.cheapest_price(), Some(140u32.into()));
        assert!(menu.includes(&Extra::Coffee));
        assert!(!menu.includes(&Extra::Salad));
        let empty = LunchMenu {
            items: vec![],
            ..menu
        };
        assert_eq!(empty.cheapest_price(), None);
    }
}
