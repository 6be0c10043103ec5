//! User service: use-cases for managing users.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::payload::Payload;
use hbnb_domain::user::User;

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HbnbError> {
        self.repo.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no user with `id` exists, or a
    /// storage error.
    pub async fn get_user(&self, id: UserId) -> Result<User, HbnbError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("User", id).into())
    }

    /// Register a user. `email` is checked before `password`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload, `email` or
    /// `password`, or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_user(&self, payload: Option<Payload>) -> Result<User, HbnbError> {
        let payload = Payload::require(payload)?;
        let email = payload.required_str("email")?;
        let password = payload.required_str("password")?;
        let mut user = User::builder().email(email).password(password).build()?;
        user.apply(&payload)?;
        self.repo.create(user).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload (checked
    /// first), [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_user(
        &self,
        id: UserId,
        payload: Option<Payload>,
    ) -> Result<User, HbnbError> {
        let payload = Payload::require(payload)?;
        let mut user = self.get_user(id).await?;
        user.apply(&payload)?;
        user.validate()?;
        user.touch();
        self.repo.update(user).await
    }

    /// Delete a user along with their places and reviews.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), HbnbError> {
        self.get_user(id).await?;
        self.repo.delete(id).await
    }
}
