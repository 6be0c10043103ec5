//! `SQLite` implementation of [`ReviewRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::ReviewRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{PlaceId, ReviewId};
use hbnb_domain::review::Review;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Review);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(r: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Review {
            id: row::id(r, "id")?,
            place_id: row::id(r, "place_id")?,
            user_id: row::id(r, "user_id")?,
            text: r.try_get("text")?,
            created_at: row::timestamp(r, "created_at")?,
            updated_at: row::timestamp(r, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (id, place_id, user_id, text, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY created_at, id";
const SELECT_BY_PLACE: &str = "SELECT * FROM reviews WHERE place_id = ? ORDER BY created_at, id";
const UPDATE: &str = "UPDATE reviews SET text = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM reviews";

/// `SQLite`-backed review repository.
#[derive(Clone)]
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, HbnbError> {
        sqlx::query(INSERT)
            .bind(review.id.to_string())
            .bind(review.place_id.to_string())
            .bind(review.user_id.to_string())
            .bind(&review.text)
            .bind(row::encode_timestamp(&review.created_at))
            .bind(row::encode_timestamp(&review.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Review>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_place(&self, place_id: PlaceId) -> Result<Vec<Review>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLACE)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, review: Review) -> Result<Review, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&review.text)
            .bind(row::encode_timestamp(&review.updated_at))
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn delete(&self, id: ReviewId) -> Result<(), HbnbError> {
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
    use crate::repositories::SqliteRepositories;
    use crate::memory_pool;
    use hbnb_app::ports::{
        CityRepository, PlaceRepository, Repositories, StateRepository, UserRepository,
    };
    use hbnb_domain::city::City;
    use hbnb_domain::id::UserId;
    use hbnb_domain::place::Place;
    use hbnb_domain::state::State;
    use hbnb_domain::user::User;

    async fn setup() -> (SqliteRepositories, PlaceId, UserId) {
        let repos = SqliteRepositories::new(memory_pool().await);
        let state = repos
            .states()
            .create(State::builder().name("Maine").build().unwrap())
            .await
            .unwrap();
        let city = repos
            .cities()
            .create(City::builder(state.id).name("Bangor").build().unwrap())
            .await
            .unwrap();
        let user = repos
            .users()
            .create(
                User::builder()
                    .email("g@hbnb.io")
                    .password("pwd")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        let place = repos
            .places()
            .create(Place::builder(city.id, user.id).name("Barn").build().unwrap())
            .await
            .unwrap();
        (repos, place.id, user.id)
    }

    fn review(place_id: PlaceId, user_id: UserId, text: &str) -> Review {
        Review::builder(place_id, user_id).text(text).build().unwrap()
    }

    #[tokio::test]
    async fn should_create_update_and_find_reviews_by_place() {
        let (repos, place_id, user_id) = setup().await;
        let reviews = repos.reviews();
        let mut created = reviews
            .create(review(place_id, user_id, "Great"))
            .await
            .unwrap();

        created.text = "Good".to_string();
        reviews.update(created.clone()).await.unwrap();

        let found = reviews.find_by_place(place_id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Good");
        assert_eq!(found[0].user_id, user_id);
        assert!(reviews.find_by_place(PlaceId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_cascade_place_deletion_to_reviews() {
        let (repos, place_id, user_id) = setup().await;
        let created = repos
            .reviews()
            .create(review(place_id, user_id, "Great"))
            .await
            .unwrap();

        repos.places().delete(place_id).await.unwrap();

        assert!(repos.reviews().get_by_id(created.id).await.unwrap().is_none());
        assert_eq!(repos.reviews().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_cascade_user_deletion_to_reviews_and_places() {
        let (repos, place_id, user_id) = setup().await;
        repos
            .reviews()
            .create(review(place_id, user_id, "Great"))
            .await
            .unwrap();

        repos.users().delete(user_id).await.unwrap();

        assert!(repos.reviews().get_all().await.unwrap().is_empty());
        assert!(repos.places().get_by_id(place_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_single_review() {
        let (repos, place_id, user_id) = setup().await;
        let created = repos
            .reviews()
            .create(review(place_id, user_id, "Great"))
            .await
            .unwrap();
        repos.reviews().delete(created.id).await.unwrap();
        assert!(repos.reviews().get_by_id(created.id).await.unwrap().is_none());
    }
}
