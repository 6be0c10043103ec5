//! `SQLite` implementation of [`CityRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::CityRepository;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};

use crate::error::StorageError;
use crate::row;

struct Wrapper(City);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(r: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(City {
            id: row::id(r, "id")?,
            state_id: row::id(r, "state_id")?,
            name: r.try_get("name")?,
            created_at: row::timestamp(r, "created_at")?,
            updated_at: row::timestamp(r, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO cities (id, state_id, name, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM cities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cities ORDER BY created_at, id";
const SELECT_BY_STATE: &str = "SELECT * FROM cities WHERE state_id = ? ORDER BY created_at, id";
const UPDATE: &str = "UPDATE cities SET name = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM cities";

/// `SQLite`-backed city repository.
#[derive(Clone)]
pub struct SqliteCityRepository {
    pool: SqlitePool,
}

impl SqliteCityRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CityRepository for SqliteCityRepository {
    async fn create(&self, city: City) -> Result<City, HbnbError> {
        sqlx::query(INSERT)
            .bind(city.id.to_string())
            .bind(city.state_id.to_string())
            .bind(&city.name)
            .bind(row::encode_timestamp(&city.created_at))
            .bind(row::encode_timestamp(&city.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(city)
    }

    async fn get_by_id(&self, id: CityId) -> Result<Option<City>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<City>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_state(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
            .bind(state_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, city: City) -> Result<City, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&city.name)
            .bind(row::encode_timestamp(&city.updated_at))
            .bind(city.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(city)
    }

    async fn delete(&self, id: CityId) -> Result<(), HbnbError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(row::count(&self.pool, COUNT).await?)
    }
}
