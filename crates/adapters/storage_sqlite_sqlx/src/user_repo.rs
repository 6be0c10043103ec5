//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::UserRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::UserId;
use hbnb_domain::user::User;

use crate::error::StorageError;
use crate::row;

struct Wrapper(User);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(r: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(User {
            id: row::id(r, "id")?,
            email: r.try_get("email")?,
            password: r.try_get("password")?,
            first_name: r.try_get("first_name")?,
            last_name: r.try_get("last_name")?,
            created_at: row::timestamp(r, "created_at")?,
            updated_at: row::timestamp(r, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO users (id, email, password, first_name, last_name, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY created_at, id";

const UPDATE: &str = r"
    UPDATE users
    SET email = ?, password = ?, first_name = ?, last_name = ?, updated_at = ?
    WHERE id = ?
";

// Owned places and written reviews cascade.
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM users";

/// `SQLite`-backed user repository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: User) -> Result<User, HbnbError> {
        sqlx::query(INSERT)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(row::encode_timestamp(&user.created_at))
            .bind(row::encode_timestamp(&user.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, user: User) -> Result<User, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(row::encode_timestamp(&user.updated_at))
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), HbnbError> {
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

    fn user() -> User {
        User::builder()
            .email("ann@hbnb.io")
            .password("secret")
            .first_name("Ann")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_persist_password_and_names() {
        let repo = SqliteUserRepository::new(memory_pool().await);
        let created = repo.create(user()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "ann@hbnb.io");
        assert_eq!(fetched.password, "secret");
        assert_eq!(fetched.first_name, "Ann");
        assert_eq!(fetched.last_name, "");
    }

    #[tokio::test]
    async fn should_update_and_delete_user() {
        let repo = SqliteUserRepository::new(memory_pool().await);
        let mut created = repo.create(user()).await.unwrap();

        created.last_name = "Lee".to_string();
        repo.update(created.clone()).await.unwrap();
        assert_eq!(
            repo.get_by_id(created.id).await.unwrap().unwrap().last_name,
            "Lee"
        );
        assert_eq!(repo.get_all().await.unwrap().len(), 1);

        repo.delete(created.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
