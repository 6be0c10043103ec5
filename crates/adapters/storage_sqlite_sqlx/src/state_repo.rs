//! `SQLite` implementation of [`StateRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::StateRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::StateId;
use hbnb_domain::state::State;

use crate::error::StorageError;
use crate::row;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(State);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(r: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(State {
            id: row::id(r, "id")?,
            name: r.try_get("name")?,
            created_at: row::timestamp(r, "created_at")?,
            updated_at: row::timestamp(r, "updated_at")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO states (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM states WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM states ORDER BY created_at, id";
const UPDATE: &str = "UPDATE states SET name = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM states WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM states";

/// `SQLite`-backed state repository.
#[derive(Clone)]
pub struct SqliteStateRepository {
    pool: SqlitePool,
}

impl SqliteStateRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StateRepository for SqliteStateRepository {
    async fn create(&self, state: State) -> Result<State, HbnbError> {
        sqlx::query(INSERT)
            .bind(state.id.to_string())
            .bind(&state.name)
            .bind(row::encode_timestamp(&state.created_at))
            .bind(row::encode_timestamp(&state.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(state)
    }

    async fn get_by_id(&self, id: StateId) -> Result<Option<State>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<State>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, state: State) -> Result<State, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&state.name)
            .bind(row::encode_timestamp(&state.updated_at))
            .bind(state.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(state)
    }

    async fn delete(&self, id: StateId) -> Result<(), HbnbError> {
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
