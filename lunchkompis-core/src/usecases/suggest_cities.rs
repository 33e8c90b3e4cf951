use super::prelude::*;

/// Known cities whose name contains the query (case-insensitive).
///
/// A blank query suggests all known cities.
pub fn suggest_cities<R: CityRepo>(repo: &R, query: &str) -> Result<Vec<City>> {
    let mut cities = repo.all_cities()?;
    if let Some(query) = crate::text::normalize_query(query) {
        cities.retain(|c| c.name_contains(&query));
    }
    Ok(cities)
}

/// Turn user input into the city parameter of the search route.
pub fn normalize_city_param(input: &str) -> Option<String> {
    crate::text::normalize_query(input)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_db() -> MockDb {
        let db = MockDb::default();
        db.cities.borrow_mut().extend([
            City::new("1", "Stockholm"),
            City::new("2", "Gothenburg"),
            City::new("3", "Malmö"),
            City::new("4", "Uppsala"),
            City::new("5", "Linköping"),
        ]);
        db
    }

    #[test]
    fn blank_query_suggests_all_cities() {
        let db = new_db();
        assert_eq!(suggest_cities(&db, "").unwrap().len(), 5);
        assert_eq!(suggest_cities(&db, "  ").unwrap().len(), 5);
    }

    #[test]
    fn suggest_by_substring() {
        let db = new_db();
        let names = |q| -> Vec<String> {
            suggest_cities(&db, q)
                .unwrap()
                .into_iter()
                .map(|c| c.name)
                .collect()
        };
        assert_eq!(names("STO"), vec!["Stockholm"]);
        assert_eq!(names("ö"), vec!["Malmö", "Linköping"]);
        assert_eq!(names("o"), vec!["Stockholm", "Gothenburg"]);
        assert!(names("Berlin").is_empty());
    }

    #[test]
    fn normalize_route_param() {
        assert_eq!(normalize_city_param(" Malmö "), Some("malmö".into()));
        assert_eq!(normalize_city_param("   "), None);
    }
}
