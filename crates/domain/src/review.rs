//! Review: a user's comment on a place.

use serde::Serialize;

use crate::error::{HbnbError, ValidationError};
use crate::id::{PlaceId, ReviewId, UserId};
use crate::payload::Payload;
use crate::time::{Timestamp, now, serialize_iso};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
    #[serde(serialize_with = "serialize_iso")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "serialize_iso")]
    pub updated_at: Timestamp,
}

impl Review {
    #[must_use]
    pub fn builder(place_id: PlaceId, user_id: UserId) -> ReviewBuilder {
        ReviewBuilder {
            id: None,
            place_id,
            user_id,
            text: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `text` is empty.
    pub fn validate(&self) -> Result<(), HbnbError> {
        if self.text.is_empty() {
            return Err(ValidationError::EmptyField("text").into());
        }
        Ok(())
    }

    /// Only `text` is editable once a review exists.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] on a mistyped field.
    pub fn apply(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        if let Some(text) = payload.optional_str("text")? {
            self.text = text;
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

#[derive(Debug)]
pub struct ReviewBuilder {
    id: Option<ReviewId>,
    place_id: PlaceId,
    user_id: UserId,
    text: Option<String>,
}

impl ReviewBuilder {
    #[must_use]
    pub fn id(mut self, id: ReviewId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `text` is missing or empty.
    pub fn build(self) -> Result<Review, HbnbError> {
        let created_at = now();
        let review = Review {
            id: self.id.unwrap_or_default(),
            place_id: self.place_id,
            user_id: self.user_id,
            text: self.text.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        };
        review.validate()?;
        Ok(review)
    }
}
