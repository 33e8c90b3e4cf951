use std::{path::PathBuf, process::ExitCode};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lunchkompis_core::{
    entities::*,
    usecases::{self, FilterChange, FilterParams, SearchPage, SearchPageObserver},
    util::sort::SortOrder,
};
use lunchkompis_db_memory::InMemoryCatalog;
use serde::Serialize;

use crate::{adapters, catalog, config::Config};

/// Find lunch menus of restaurants in your city
#[derive(Parser)]
#[command(name = "lunchkompis", version, about)]
struct Cli {
    /// Configuration file [default: lunchkompis.toml]
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Restaurant catalog in JSON format
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest cities by (part of) their name
    Cities {
        /// Case-insensitive part of the city name
        query: Option<String>,
    },

    /// List the restaurants of a city
    Search {
        city: String,

        /// Part of the restaurant name
        #[arg(long)]
        text: Option<String>,

        /// Cuisine, e.g. "Italian" (repeat for several)
        #[arg(long = "cuisine", value_name = "CUISINE")]
        cuisines: Vec<String>,

        /// Minimum rating between 0 and 5
        #[arg(long, value_name = "RATING")]
        min_rating: Option<String>,

        /// Price range in SEK, e.g. 100..150
        #[arg(long, value_name = "MIN..MAX")]
        price: Option<String>,

        /// recommended, price-asc, price-desc or rating
        #[arg(long, value_name = "ORDER")]
        sort: Option<String>,

        /// Highlight a restaurant
        #[arg(long, value_name = "ID")]
        select: Option<String>,
    },

    /// Show the details of a restaurant
    Show { id: String },
}

#[derive(Clone, Copy)]
enum Output {
    Text,
    Json,
}

impl Output {
    fn print<T: Serialize>(
        self,
        json: impl FnOnce() -> T,
        text: impl FnOnce() -> String,
    ) -> Result<()> {
        match self {
            Self::Json => println!("{}", serde_json::to_string_pretty(&json())?),
            Self::Text => println!("{}", text()),
        }
        Ok(())
    }
}

/// Traces the changes of the search page.
struct LogObserver;

impl SearchPageObserver for LogObserver {
    fn results_changed(&self, results: &[Restaurant]) {
        log::debug!("{} restaurant(s) displayed", results.len());
    }

    fn selection_changed(&self, selected: Option<&Restaurant>) {
        match selected {
            Some(r) => log::debug!("Selected restaurant '{}'", r.id),
            None => log::debug!("No restaurant selected"),
        }
    }
}

pub fn run() -> Result<ExitCode> {
    if let Err(err) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {err}");
    }
    let Cli {
        config,
        catalog: catalog_file,
        json,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(file) = catalog_file {
        cfg.catalog.file = Some(file);
    }
    let db = catalog::load(cfg.catalog.file.as_deref()).context("Unable to load the catalog")?;
    let output = if json { Output::Json } else { Output::Text };

    match command {
        Commands::Cities { query } => {
            let cities = usecases::suggest_cities(&db, query.as_deref().unwrap_or_default())?;
            output.print(
                || adapters::json::cities(cities.clone()),
                || adapters::text::cities(&cities),
            )?;
        }
        Commands::Search {
            city,
            text,
            cuisines,
            min_rating,
            price,
            sort,
            select,
        } => {
            let params = FilterParams {
                text,
                cuisines,
                min_rating,
                price_range: price,
            };
            let sort_order = match sort {
                Some(sort) => sort.parse()?,
                None => cfg.search.default_sort,
            };
            let page = search(&db, &city, params, sort_order, select)?;
            output.print(
                || adapters::json::search_response(&page),
                || adapters::text::search_page(&page),
            )?;
        }
        Commands::Show { id } => {
            let Some(details) = usecases::load_restaurant_details(&db, id.trim())? else {
                eprintln!("Restaurant '{id}' not found");
                return Ok(ExitCode::FAILURE);
            };
            output.print(
                || adapters::json::restaurant_details(details.clone()),
                || adapters::text::restaurant_details(&details),
            )?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn search(
    db: &InMemoryCatalog,
    city: &str,
    params: FilterParams,
    sort_order: SortOrder,
    select: Option<String>,
) -> Result<SearchPage> {
    let Some(city) = usecases::normalize_city_param(city) else {
        bail!("Missing city name");
    };
    let filter = usecases::parse_filter_params(params)?;
    let mut page = SearchPage::mount(db, &city)?;
    page.subscribe(Box::new(LogObserver));
    page.apply(FilterChange::Text(filter.text));
    page.apply(FilterChange::Cuisines(filter.cuisines));
    page.apply(FilterChange::MinRating(filter.min_rating));
    page.apply(FilterChange::PriceRange(filter.price_range));
    page.set_sort_order(sort_order);
    if let Some(id) = select {
        page.toggle_selection(Some(&Id::from(id)));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_default_catalog(city: &str, params: FilterParams) -> Vec<String> {
        let db = catalog::load(None).unwrap();
        search(&db, city, params, SortOrder::Recommended, None)
            .unwrap()
            .results()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    #[test]
    fn search_by_route_param() {
        let names = search_default_catalog(" Stockholm ", FilterParams::default());
        assert_eq!(names, vec!["Pasta Perfetta", "Sushi Palace"]);
    }

    #[test]
    fn search_with_filter_params() {
        let params = FilterParams {
            min_rating: Some("4.3".into()),
            ..Default::default()
        };
        assert_eq!(
            search_default_catalog("stockholm", params),
            vec!["Pasta Perfetta"]
        );

        let params = FilterParams {
            cuisines: vec!["Japanese".into()],
            ..Default::default()
        };
        assert_eq!(
            search_default_catalog("stockholm", params),
            vec!["Sushi Palace"]
        );

        let params = FilterParams {
            price_range: Some("100..120".into()),
            ..Default::default()
        };
        assert_eq!(
            search_default_catalog("gothenburg", params),
            vec!["Taco Bar"]
        );
    }

    #[test]
    fn reject_blank_city_and_invalid_params() {
        let db = catalog::load(None).unwrap();
        assert!(search(&db, "  ", FilterParams::default(), SortOrder::Rating, None).is_err());
        let params = FilterParams {
            price_range: Some("150..100".into()),
            ..Default::default()
        };
        assert!(search(&db, "stockholm", params, SortOrder::Rating, None).is_err());
    }

    #[test]
    fn select_restaurant_from_command_line() {
        let db = catalog::load(None).unwrap();
        let page = search(
            &db,
            "stockholm",
            FilterParams::default(),
            SortOrder::PriceHighToLow,
            Some("1".into()),
        )
        .unwrap();
        assert_eq!(page.results()[0].name, "Sushi Palace");
        assert_eq!(page.selected_restaurant().map(|r| r.id.as_str()), Some("1"));
    }
}
