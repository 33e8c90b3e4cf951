//! # lunchkompis-core
//!
//! Business rules of Lunch Kompis: repository traits for the restaurant
//! catalog, the filter predicates and the use cases that drive the search
//! and detail views.

pub mod filter;
pub mod repositories;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use lunchkompis_entities::{
        address::*, city::*, contact::*, geo::*, id::*, location::*, menu::*, price::*,
        rating::*, restaurant::*, tag::*, time::*,
    };
}
