//! # hbnb-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hbnb-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Cascade deletions through foreign keys
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod amenity_repo;
pub mod city_repo;
pub mod error;
pub mod place_repo;
pub mod pool;
pub mod repositories;
pub mod review_repo;
pub mod state_repo;
pub mod user_repo;

mod row;

pub use amenity_repo::SqliteAmenityRepository;
pub use city_repo::SqliteCityRepository;
pub use error::StorageError;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
pub use repositories::SqliteRepositories;
pub use review_repo::SqliteReviewRepository;
pub use state_repo::SqliteStateRepository;
pub use user_repo::SqliteUserRepository;

#[cfg(test)]
pub(crate) async fn memory_pool() -> sqlx::SqlitePool {
    Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .unwrap()
    .pool()
    .clone()
}
