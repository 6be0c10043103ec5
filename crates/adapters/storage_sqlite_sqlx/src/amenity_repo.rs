//! `SQLite` implementation of [`AmenityRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::AmenityRepository;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::AmenityId;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Amenity);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(r: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Amenity {
            id: row::id(r, "id")?,
            name: r.try_get("name")?,
            created_at: row::timestamp(r, "created_at")?,
            updated_at: row::timestamp(r, "updated_at")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO amenities (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities ORDER BY created_at, id";
const UPDATE: &str = "UPDATE amenities SET name = ?, updated_at = ? WHERE id = ?";
// Links in `place_amenity` go with it through the foreign key.
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM amenities";

/// `SQLite`-backed amenity repository.
#[derive(Clone)]
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    async fn create(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        sqlx::query(INSERT)
            .bind(amenity.id.to_string())
            .bind(&amenity.name)
            .bind(row::encode_timestamp(&amenity.created_at))
            .bind(row::encode_timestamp(&amenity.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(amenity)
    }

    async fn get_by_id(&self, id: AmenityId) -> Result<Option<Amenity>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&amenity.name)
            .bind(row::encode_timestamp(&amenity.updated_at))
            .bind(amenity.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(amenity)
    }

    async fn delete(&self, id: AmenityId) -> Result<(), HbnbError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_pool;

    #[tokio::test]
    async fn should_round_trip_amenity() {
        let repo = SqliteAmenityRepository::new(memory_pool().await);
        let mut amenity = Amenity::builder().name("Wifi").build().unwrap();
        repo.create(amenity.clone()).await.unwrap();

        amenity.name = "Fast wifi".to_string();
        repo.update(amenity.clone()).await.unwrap();

        let fetched = repo.get_by_id(amenity.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Fast wifi");
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete(amenity.id).await.unwrap();
        assert!(repo.get_by_id(amenity.id).await.unwrap().is_none());
    }
}
