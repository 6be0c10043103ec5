//! The [`Repositories`] bundle over a single `SQLite` pool.

use sqlx::SqlitePool;

use hbnb_app::ports::Repositories;

use crate::amenity_repo::SqliteAmenityRepository;
use crate::city_repo::SqliteCityRepository;
use crate::place_repo::SqlitePlaceRepository;
use crate::review_repo::SqliteReviewRepository;
use crate::state_repo::SqliteStateRepository;
use crate::user_repo::SqliteUserRepository;

/// Every `SQLite` repository, sharing one connection pool.
#[derive(Clone)]
pub struct SqliteRepositories {
    pool: SqlitePool,
}

impl SqliteRepositories {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Repositories for SqliteRepositories {
    type States = SqliteStateRepository;
    type Cities = SqliteCityRepository;
    type Amenities = SqliteAmenityRepository;
    type Users = SqliteUserRepository;
    type Places = SqlitePlaceRepository;
    type Reviews = SqliteReviewRepository;

    fn states(&self) -> Self::States {
        SqliteStateRepository::new(self.pool.clone())
    }

    fn cities(&self) -> Self::Cities {
        SqliteCityRepository::new(self.pool.clone())
    }

    fn amenities(&self) -> Self::Amenities {
        SqliteAmenityRepository::new(self.pool.clone())
    }

    fn users(&self) -> Self::Users {
        SqliteUserRepository::new(self.pool.clone())
    }

    fn places(&self) -> Self::Places {
        SqlitePlaceRepository::new(self.pool.clone())
    }

    fn reviews(&self) -> Self::Reviews {
        SqliteReviewRepository::new(self.pool.clone())
    }
}
