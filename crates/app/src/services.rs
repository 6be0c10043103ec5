//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Services decide the order in which a missing parent, a malformed payload and
//! a missing field are reported.

pub mod amenity_service;
pub mod city_service;
pub mod place_service;
pub mod review_service;
pub mod state_service;
pub mod stats_service;
pub mod user_service;
