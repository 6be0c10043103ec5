//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1`
//!   (`/states`, `/cities`, `/amenities`, `/users`, `/places`, `/reviews`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses with fixed
//!   status codes
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod body;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
