//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listing API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **States** and the **Cities** they contain
//! - Define **Amenities** (features a place can offer)
//! - Define **Users** (owners of places and authors of reviews)
//! - Define **Places** (listings in a city) and their **Reviews**
//! - Define the client **Payload** and the partial-update rules per entity
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod payload;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod review;
pub mod state;
pub mod user;
