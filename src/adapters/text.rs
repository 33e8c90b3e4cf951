//! Plain text rendering for the terminal.

use lunchkompis_core::{
    entities::*,
    usecases::{RestaurantDetails, SearchPage},
};

fn stars(count: u8) -> String {
    let count = usize::from(count.min(5));
    format!("{}{}", "★".repeat(count), "☆".repeat(5 - count))
}

fn join_tags(tags: &[Tag]) -> String {
    tags.iter().map(Tag::as_str).collect::<Vec<_>>().join(", ")
}

pub fn cities(cities: &[City]) -> String {
    if cities.is_empty() {
        return "No matching cities".to_string();
    }
    cities
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn search_page(page: &SearchPage) -> String {
    let mut lines = vec![format!(
        "{} in {} (sorted by {})",
        page.result_count_label(),
        page.city(),
        page.sort_order()
    )];
    for r in page.results() {
        let marker = if page.selection().is_selected(&r.id) {
            '>'
        } else {
            ' '
        };
        let price = r
            .cheapest_price()
            .map(|p| format!(", from {p}"))
            .unwrap_or_default();
        lines.push(format!(
            "{marker} [{}] {} ({}) {} {}{price}",
            r.id,
            r.name,
            join_tags(&r.cuisines),
            stars(r.rating.rounded_stars()),
            r.rating,
        ));
    }
    let markers = page.map_markers();
    if !markers.is_empty() {
        lines.push(String::new());
        lines.push("Map:".to_string());
        for m in markers {
            let highlight = if m.highlighted { " *" } else { "" };
            lines.push(format!("  {} @ {}{highlight}", m.name, m.pos));
        }
    }
    lines.join("\n")
}

pub fn restaurant_details(details: &RestaurantDetails) -> String {
    let mut lines = vec![details.name.clone()];
    if let Some(address) = &details.address {
        lines.push(address.clone());
    }
    lines.push(format!(
        "{} {}",
        stars(details.stars),
        details.rating
    ));
    lines.push(format!("Hours: {}", details.hours));
    if !details.tags.is_empty() {
        lines.push(details.tags.join(", "));
    }
    if let Some(menu_name) = &details.menu_name {
        lines.push(String::new());
        lines.push(menu_name.clone());
        for item in &details.menu_items {
            lines.push(format!("  {} ({})", item.name, item.price));
            if let Some(description) = &item.description {
                lines.push(format!("    {description}"));
            }
        }
        if !details.extras.is_empty() {
            let extras = details
                .extras
                .iter()
                .map(Extra::name)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("  Includes: {extras}"));
        }
    }
    if !details.popular_dishes.is_empty() {
        lines.push(String::new());
        lines.push(format!("Popular: {}", details.popular_dishes.join(", ")));
    }
    if let Some(phone) = &details.phone {
        lines.push(format!("Phone: {phone}"));
    }
    if let Some(website) = &details.website {
        lines.push(format!("Website: {website}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunchkompis_entities::builders::*;

    #[test]
    fn render_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn render_details() {
        let restaurant = Restaurant::build()
            .id("3")
            .name("Taco Bar")
            .city("Gothenburg")
            .street("Avenyn 42")
            .cuisines(vec!["Mexican"])
            .features(vec!["Fast Food"])
            .rating(3.8)
            .opening_hours("11:00", "24:00")
            .lunch_menu(
                LunchMenu::build()
                    .name("Lunch Combo")
                    .item("Veggie Burrito", 115)
                    .extras(vec![Extra::Salad])
                    .finish(),
            )
            .finish();
        let text = restaurant_details(&RestaurantDetails::from(&restaurant));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Taco Bar");
        assert_eq!(lines[1], "Avenyn 42, Gothenburg");
        assert_eq!(lines[2], "★★★★☆ 3.8");
        assert_eq!(lines[3], "Hours: 11:00 - 24:00");
        assert_eq!(lines[4], "Mexican, Fast Food");
        assert!(text.contains("  Veggie Burrito (115 kr)"));
        assert!(text.contains("  Includes: Salad"));
        assert!(!text.contains("Phone"));
    }

    #[test]
    fn render_empty_city_list() {
        assert_eq!(cities(&[]), "No matching cities");
    }
}
