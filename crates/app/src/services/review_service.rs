//! Review service: use-cases for the reviews of a place.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{PlaceId, ReviewId, UserId};
use hbnb_domain::payload::Payload;
use hbnb_domain::review::Review;

use crate::ports::{PlaceRepository, ReviewRepository, UserRepository};

/// Application service for review CRUD operations.
pub struct ReviewService<R, P, U> {
    reviews: R,
    places: P,
    users: U,
}

impl<R, P, U> ReviewService<R, P, U>
where
    R: ReviewRepository,
    P: PlaceRepository,
    U: UserRepository,
{
    pub fn new(reviews: R, places: P, users: U) -> Self {
        Self {
            reviews,
            places,
            users,
        }
    }

    async fn ensure_place(&self, place_id: PlaceId) -> Result<(), HbnbError> {
        match self.places.get_by_id(place_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::new("Place", place_id).into()),
        }
    }

    /// List the reviews of a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist, or a
    /// storage error.
    pub async fn list_reviews(&self, place_id: PlaceId) -> Result<Vec<Review>, HbnbError> {
        self.ensure_place(place_id).await?;
        self.reviews.find_by_place(place_id).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no review with `id` exists, or a
    /// storage error.
    pub async fn get_review(&self, id: ReviewId) -> Result<Review, HbnbError> {
        self.reviews
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Review", id).into())
    }

    /// Post a review on `place_id` authored by the payload's `user_id`.
    ///
    /// Checks run in this order: place exists, payload present, `user_id`
    /// present, user exists, `text` present.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as [`HbnbError::NotFound`] or
    /// [`HbnbError::Validation`], or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_review(
        &self,
        place_id: PlaceId,
        payload: Option<Payload>,
    ) -> Result<Review, HbnbError> {
        self.ensure_place(place_id).await?;
        let payload = Payload::require(payload)?;
        let raw_user_id = payload.required_str("user_id")?;
        let author = match raw_user_id.parse::<UserId>() {
            Ok(id) => self.users.get_by_id(id).await?,
            Err(_) => None,
        };
        let Some(author) = author else {
            return Err(NotFoundError::new("User", raw_user_id).into());
        };
        let text = payload.required_str("text")?;

        let review = Review::builder(place_id, author.id).text(text).build()?;
        self.reviews.create(review).await
    }

    /// Edit the text of a review.
    ///
    /// Unlike the other entities, the review is looked up *before* the
    /// payload is inspected.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown id, then
    /// [`HbnbError::Validation`] for a missing payload, or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_review(
        &self,
        id: ReviewId,
        payload: Option<Payload>,
    ) -> Result<Review, HbnbError> {
        let mut review = self.get_review(id).await?;
        let payload = Payload::require(payload)?;
        review.apply(&payload)?;
        review.validate()?;
        review.touch();
        self.reviews.update(review).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_review(&self, id: ReviewId) -> Result<(), HbnbError> {
        self.get_review(id).await?;
        self.reviews.delete(id).await
    }
}
