//! Amenity service: use-cases for managing amenities.

use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::AmenityId;
use hbnb_domain::payload::Payload;

use crate::ports::AmenityRepository;

/// Application service for amenity CRUD operations.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, HbnbError> {
        self.repo.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no amenity with `id` exists, or a
    /// storage error.
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, HbnbError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Amenity", id).into())
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload or `name`, or
    /// a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_amenity(&self, payload: Option<Payload>) -> Result<Amenity, HbnbError> {
        let payload = Payload::require(payload)?;
        let amenity = Amenity::builder()
            .name(payload.required_str("name")?)
            .build()?;
        self.repo.create(amenity).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload (checked
    /// first), [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_amenity(
        &self,
        id: AmenityId,
        payload: Option<Payload>,
    ) -> Result<Amenity, HbnbError> {
        let payload = Payload::require(payload)?;
        let mut amenity = self.get_amenity(id).await?;
        amenity.apply(&payload)?;
        amenity.validate()?;
        amenity.touch();
        self.repo.update(amenity).await
    }

    /// Delete an amenity, unlinking it from every place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), HbnbError> {
        self.get_amenity(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStorage;
    use hbnb_domain::error::ValidationError;
    use serde_json::json;

    fn make_service() -> AmenityService<InMemoryStorage> {
        AmenityService::new(InMemoryStorage::new())
    }

    #[tokio::test]
    async fn should_create_and_list_amenities() {
        let svc = make_service();
        svc.create_amenity(Payload::from_value(json!({"name": "Wifi"})))
            .await
            .unwrap();
        svc.create_amenity(Payload::from_value(json!({"name": "Pool"})))
            .await
            .unwrap();

        let all = svc.list_amenities().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_treat_empty_object_as_not_json() {
        let svc = make_service();
        let result = svc.create_amenity(Payload::from_value(json!({}))).await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::NotJson))
        ));
    }

    #[tokio::test]
    async fn should_keep_name_when_update_omits_it() {
        let svc = make_service();
        let amenity = svc
            .create_amenity(Payload::from_value(json!({"name": "Wifi"})))
            .await
            .unwrap();

        let updated = svc
            .update_amenity(amenity.id, Payload::from_value(json!({"color": "red"})))
            .await
            .unwrap();

        assert_eq!(updated.name, "Wifi");
    }

    #[tokio::test]
    async fn should_reject_blank_name_on_update() {
        let svc = make_service();
        let amenity = svc
            .create_amenity(Payload::from_value(json!({"name": "Wifi"})))
            .await
            .unwrap();

        let result = svc
            .update_amenity(amenity.id, Payload::from_value(json!({"name": ""})))
            .await;

        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::EmptyField("name")))
        ));
    }

    #[tokio::test]
    async fn should_delete_amenity() {
        let svc = make_service();
        let amenity = svc
            .create_amenity(Payload::from_value(json!({"name": "Wifi"})))
            .await
            .unwrap();

        svc.delete_amenity(amenity.id).await.unwrap();

        assert!(matches!(
            svc.get_amenity(amenity.id).await,
            Err(HbnbError::NotFound(_))
        ));
    }
}
