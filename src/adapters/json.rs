use lunchkompis_boundary as json;
use lunchkompis_core::{
    entities::City,
    usecases::{MapMarker, RestaurantDetails, SearchPage},
};

pub fn cities(cities: Vec<City>) -> Vec<json::City> {
    cities.into_iter().map(Into::into).collect()
}

pub fn map_marker(from: MapMarker) -> json::MapMarker {
    let MapMarker {
        id,
        name,
        pos,
        highlighted,
    } = from;
    json::MapMarker {
        id: id.into(),
        name,
        lat: pos.lat_deg(),
        lng: pos.lng_deg(),
        highlighted,
    }
}

pub fn search_response(page: &SearchPage) -> json::SearchResponse {
    json::SearchResponse {
        city: page.city().to_owned(),
        count: page.results().len(),
        count_label: page.result_count_label(),
        sort: page.sort_order().as_str().to_owned(),
        selected: page.selection().selected().map(ToString::to_string),
        restaurants: page.results().iter().map(Into::into).collect(),
        markers: page.map_markers().into_iter().map(map_marker).collect(),
    }
}

pub fn restaurant_details(from: RestaurantDetails) -> json::RestaurantDetails {
    let RestaurantDetails {
        id,
        name,
        address,
        pos,
        hours,
        tags,
        rating,
        stars,
        menu_name,
        menu_items,
        extras,
        phone,
        website,
        popular_dishes,
        image,
    } = from;
    json::RestaurantDetails {
        id: id.into(),
        name,
        address,
        coordinates: pos.map(Into::into),
        hours,
        tags,
        rating: rating.into(),
        stars,
        menu_name,
        lunch_menu_items: menu_items.into_iter().map(Into::into).collect(),
        lunch_includes: extras.into_iter().map(Into::into).collect(),
        phone,
        website,
        popular_dishes,
        image_url: image,
    }
}
