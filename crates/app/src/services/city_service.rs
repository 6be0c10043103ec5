//! City service: use-cases for managing the cities of a state.

use hbnb_domain::city::City;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::payload::Payload;

use crate::ports::{CityRepository, StateRepository};

/// Application service for city CRUD operations.
pub struct CityService<C, S> {
    cities: C,
    states: S,
}

impl<C, S> CityService<C, S>
where
    C: CityRepository,
    S: StateRepository,
{
    pub fn new(cities: C, states: S) -> Self {
        Self { cities, states }
    }

    async fn ensure_state(&self, state_id: StateId) -> Result<(), HbnbError> {
        match self.states.get_by_id(state_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::new("State", state_id).into()),
        }
    }

    /// List the cities of a state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist, or a
    /// storage error.
    pub async fn list_cities(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        self.ensure_state(state_id).await?;
        self.cities.find_by_state(state_id).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no city with `id` exists, or a
    /// storage error.
    pub async fn get_city(&self, id: CityId) -> Result<City, HbnbError> {
        self.cities
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("City", id).into())
    }

    /// Create a city inside `state_id`.
    ///
    /// The state is looked up before the payload is inspected.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown state, then
    /// [`HbnbError::Validation`] for a missing payload or `name`.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_city(
        &self,
        state_id: StateId,
        payload: Option<Payload>,
    ) -> Result<City, HbnbError> {
        self.ensure_state(state_id).await?;
        let payload = Payload::require(payload)?;
        let city = City::builder(state_id)
            .name(payload.required_str("name")?)
            .build()?;
        self.cities.create(city).await
    }

    /// Rename a city. The owning state cannot be changed.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload (checked
    /// first), [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_city(
        &self,
        id: CityId,
        payload: Option<Payload>,
    ) -> Result<City, HbnbError> {
        let payload = Payload::require(payload)?;
        let mut city = self.get_city(id).await?;
        city.apply(&payload)?;
        city.validate()?;
        city.touch();
        self.cities.update(city).await
    }

    /// Delete a city and the places it contains.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_city(&self, id: CityId) -> Result<(), HbnbError> {
        self.get_city(id).await?;
        self.cities.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStorage;
    use hbnb_domain::error::ValidationError;
    use hbnb_domain::state::State;
    use serde_json::json;

    async fn setup() -> (CityService<InMemoryStorage, InMemoryStorage>, StateId) {
        let storage = InMemoryStorage::new();
        let state = State::builder().name("California").build().unwrap();
        let state_id = state.id;
        StateRepository::create(&storage, state).await.unwrap();
        (CityService::new(storage.clone(), storage), state_id)
    }

    fn payload(value: serde_json::Value) -> Option<Payload> {
        Payload::from_value(value)
    }

    #[tokio::test]
    async fn should_create_city_in_existing_state() {
        let (svc, state_id) = setup().await;

        let city = svc
            .create_city(state_id, payload(json!({"name": "Oakland"})))
            .await
            .unwrap();

        assert_eq!(city.state_id, state_id);
        assert_eq!(svc.get_city(city.id).await.unwrap().name, "Oakland");
    }

    #[tokio::test]
    async fn should_report_unknown_state_before_bad_payload() {
        let (svc, _) = setup().await;
        let result = svc.create_city(StateId::new(), None).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_city_without_name() {
        let (svc, state_id) = setup().await;
        let result = svc
            .create_city(state_id, payload(json!({"population": 3})))
            .await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("name")))
        ));
    }

    #[tokio::test]
    async fn should_list_only_cities_of_requested_state() {
        let (svc, state_id) = setup().await;
        let other = State::builder().name("Nevada").build().unwrap();
        let other_id = other.id;
        StateRepository::create(&svc.states, other).await.unwrap();

        svc.create_city(state_id, payload(json!({"name": "Fresno"})))
            .await
            .unwrap();
        svc.create_city(other_id, payload(json!({"name": "Reno"})))
            .await
            .unwrap();

        let cities = svc.list_cities(state_id).await.unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Fresno");
    }

    #[tokio::test]
    async fn should_return_not_found_when_listing_unknown_state() {
        let (svc, _) = setup().await;
        let result = svc.list_cities(StateId::new()).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_update_city_name() {
        let (svc, state_id) = setup().await;
        let city = svc
            .create_city(state_id, payload(json!({"name": "Fresno"})))
            .await
            .unwrap();

        let updated = svc
            .update_city(city.id, payload(json!({"name": "Sacramento"})))
            .await
            .unwrap();

        assert_eq!(updated.name, "Sacramento");
        assert_eq!(updated.state_id, state_id);
    }

    #[tokio::test]
    async fn should_delete_city() {
        let (svc, state_id) = setup().await;
        let city = svc
            .create_city(state_id, payload(json!({"name": "Fresno"})))
            .await
            .unwrap();

        svc.delete_city(city.id).await.unwrap();

        assert!(svc.list_cities(state_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_drop_cities_with_their_state() {
        let (svc, state_id) = setup().await;
        let city = svc
            .create_city(state_id, payload(json!({"name": "Fresno"})))
            .await
            .unwrap();

        StateRepository::delete(&svc.states, state_id).await.unwrap();

        let result = svc.get_city(city.id).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }
}
