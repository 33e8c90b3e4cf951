#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # lunchkompis-entities
//!
//! Reusable, agnostic domain entities for Lunch Kompis.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod city;
pub mod contact;
pub mod geo;
pub mod id;
pub mod location;
pub mod menu;
pub mod price;
pub mod rating;
pub mod restaurant;
pub mod tag;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
