//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateRepository`, `CityRepository`, `AmenityRepository`
//!   - `UserRepository`, `PlaceRepository`, `ReviewRepository`
//!   - `Repositories`: one implementation of each, handed to the HTTP layer
//! - Define **driving/inbound ports** as use-case structs:
//!   - one service per entity (list, get, create, update, delete)
//!   - `PlaceService` also links amenities and searches places
//!   - `StatsService` counts objects per entity type
//! - Decide the order in which "not found" and payload errors are reported
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;
