use super::prelude::*;

/// Resolve a single restaurant for the detail view.
///
/// `None` is a regular outcome, e.g. for outdated bookmarks.
pub fn restaurant_by_id<R: RestaurantRepo>(repo: &R, id: &str) -> Result<Option<Restaurant>> {
    let restaurant = repo.try_get_restaurant(id)?;
    if restaurant.is_none() {
        log::debug!("No restaurant with id '{id}'");
    }
    Ok(restaurant)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use lunchkompis_entities::builders::*;

    #[test]
    fn absent_id() {
        let db = MockDb::default();
        db.restaurants.borrow_mut().extend(
            (1..=5).map(|i| Restaurant::build().id(&i.to_string()).finish()),
        );
        assert!(restaurant_by_id(&db, "999").unwrap().is_none());
        assert!(restaurant_by_id(&db, "").unwrap().is_none());
    }

    #[test]
    fn exact_id_match() {
        let db = MockDb::default();
        db.restaurants.borrow_mut().extend([
            Restaurant::build().id("1").name("Pasta Perfetta").finish(),
            Restaurant::build().id("12").name("Taco Bar").finish(),
        ]);
        let r = restaurant_by_id(&db, "12").unwrap().unwrap();
        assert_eq!(r.name, "Taco Bar");
        assert!(restaurant_by_id(&db, " 1").unwrap().is_none());
    }
}
