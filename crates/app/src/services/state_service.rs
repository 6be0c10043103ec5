//! State service: use-cases for managing states.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::StateId;
use hbnb_domain::payload::Payload;
use hbnb_domain::state::State;

use crate::ports::StateRepository;

/// Application service for state CRUD operations.
pub struct StateService<R> {
    repo: R,
}

impl<R: StateRepository> StateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_states(&self) -> Result<Vec<State>, HbnbError> {
        self.repo.get_all().await
    }

    /// Look up a state by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no state with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_state(&self, id: StateId) -> Result<State, HbnbError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("State", id).into())
    }

    /// Create a state from a client payload.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload or `name`,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_state(&self, payload: Option<Payload>) -> Result<State, HbnbError> {
        let payload = Payload::require(payload)?;
        let state = State::builder()
            .name(payload.required_str("name")?)
            .build()?;
        self.repo.create(state).await
    }

    /// Rename a state. Fields other than `name` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload (checked before
    /// the lookup), [`HbnbError::NotFound`] for an unknown id, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_state(
        &self,
        id: StateId,
        payload: Option<Payload>,
    ) -> Result<State, HbnbError> {
        let payload = Payload::require(payload)?;
        let mut state = self.get_state(id).await?;
        state.apply(&payload)?;
        state.validate()?;
        state.touch();
        self.repo.update(state).await
    }

    /// Delete a state and its cities.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown id, or a storage error
    /// from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_state(&self, id: StateId) -> Result<(), HbnbError> {
        self.get_state(id).await?;
        self.repo.delete(id).await
    }
}
