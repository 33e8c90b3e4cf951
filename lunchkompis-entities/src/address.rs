#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street : Option<String>,
    pub zip    : Option<String>,
    pub city   : Option<String>,
}

impl Address {
    /// Case-insensitive comparison of the city name.
    ///
    /// An address without a city never matches.
    pub fn is_in_city(&self, city: &str) -> bool {
        self.city
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == city.to_lowercase())
    }
}
