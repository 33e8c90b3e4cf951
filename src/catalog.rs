use lunchkompis_boundary as json;
use lunchkompis_core::repositories;
use lunchkompis_db_memory::InMemoryCatalog;
use std::{fs, io, path::Path};
use thiserror::Error;

const DEFAULT_CATALOG: &str = include_str!("catalog.default.json");

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read the catalog: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid catalog entry: {0}")]
    Conversion(#[from] json::ConversionError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Load the catalog from a JSON file or use the embedded one.
pub fn load(file: Option<&Path>) -> Result<InMemoryCatalog, Error> {
    let catalog: json::Catalog = match file {
        Some(path) => {
            log::info!("Load catalog from {}", path.display());
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => {
            log::info!("Load embedded catalog");
            serde_json::from_str(DEFAULT_CATALOG)?
        }
    };
    try_from_json(catalog)
}

pub fn try_from_json(catalog: json::Catalog) -> Result<InMemoryCatalog, Error> {
    let json::Catalog {
        cities,
        restaurants,
    } = catalog;
    let cities = cities
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;
    let restaurants = restaurants
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InMemoryCatalog::try_new(restaurants, cities)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunchkompis_core::{repositories::RestaurantRepo, usecases};

    fn ids(restaurants: &[lunchkompis_core::entities::Restaurant]) -> Vec<&str> {
        restaurants.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn load_embedded_catalog() {
        let db = load(None).unwrap();
        assert_eq!(db.count_restaurants().unwrap(), 3);
        let cities = usecases::suggest_cities(&db, "").unwrap();
        assert_eq!(cities.len(), 5);
        assert_eq!(cities[2].name, "Malmö");
    }

    #[test]
    fn restaurants_of_embedded_catalog() {
        let db = load(None).unwrap();
        let stockholm = usecases::restaurants_in_city(&db, "stockholm").unwrap();
        assert_eq!(ids(&stockholm), vec!["1", "2"]);
        let uppsala = usecases::restaurants_in_city(&db, "Uppsala").unwrap();
        assert!(uppsala.is_empty());
        assert!(usecases::restaurant_by_id(&db, "999").unwrap().is_none());

        let taco_bar = usecases::restaurant_by_id(&db, "3").unwrap().unwrap();
        assert_eq!(taco_bar.opening_hours[0].to_string(), "11:00 - 24:00");
    }

    #[test]
    fn reject_duplicate_ids() {
        let catalog: json::Catalog = serde_json::from_str(
            r#"{
                "restaurants": [
                    { "id": "1", "name": "A", "cuisines": [], "rating": 4.0 },
                    { "id": "1", "name": "B", "cuisines": [], "rating": 3.0 }
                ]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            try_from_json(catalog),
            Err(Error::Repo(repositories::Error::AlreadyExists))
        ));
    }

    #[test]
    fn reject_invalid_entries() {
        let catalog: json::Catalog = serde_json::from_str(
            r#"{
                "restaurants": [
                    { "id": "1", "name": "A", "cuisines": [], "rating": 7.0 }
                ]
            }"#,
        )
        .unwrap();
        assert!(matches!(try_from_json(catalog), Err(Error::Conversion(_))));
    }
}
