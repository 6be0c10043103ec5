//! City: belongs to exactly one [`State`](crate::state::State).

use serde::Serialize;

use crate::error::{HbnbError, ValidationError};
use crate::id::{CityId, StateId};
use crate::payload::Payload;
use crate::time::{Timestamp, now, serialize_iso};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct City {
    pub id: CityId,
    pub state_id: StateId,
    pub name: String,
    #[serde(serialize_with = "serialize_iso")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "serialize_iso")]
    pub updated_at: Timestamp,
}

impl City {
    #[must_use]
    pub fn builder(state_id: StateId) -> CityBuilder {
        CityBuilder {
            id: None,
            state_id,
            name: None,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(())
    }

    /// Copy the updatable fields present in `payload`. The owning state is
    /// never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] on a mistyped field.
    pub fn apply(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        if let Some(name) = payload.optional_str("name")? {
            self.name = name;
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

/// Builder for [`City`]. The parent state is mandatory.
#[derive(Debug)]
pub struct CityBuilder {
    id: Option<CityId>,
    state_id: StateId,
    name: Option<String>,
}

impl CityBuilder {
    #[must_use]
    pub fn id(mut self, id: CityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<City, HbnbError> {
        let created_at = now();
        let city = City {
            id: self.id.unwrap_or_default(),
            state_id: self.state_id,
            name: self.name.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        };
        city.validate()?;
        Ok(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_city_inside_state() {
        let state_id = StateId::new();
        let city = City::builder(state_id).name("San Francisco").build().unwrap();
        assert_eq!(city.state_id, state_id);
        assert_eq!(city.name, "San Francisco");
    }

    #[test]
    fn should_reject_city_without_name() {
        let result = City::builder(StateId::new()).build();
        assert!(matches!(result, Err(HbnbError::Validation(_))));
    }

    #[test]
    fn should_not_move_city_to_another_state_on_apply() {
        let state_id = StateId::new();
        let mut city = City::builder(state_id).name("Reno").build().unwrap();
        let payload = Payload::from_value(json!({
            "name": "Las Vegas",
            "state_id": StateId::new().to_string()
        }))
        .unwrap();

        city.apply(&payload).unwrap();

        assert_eq!(city.name, "Las Vegas");
        assert_eq!(city.state_id, state_id);
    }

    #[test]
    fn should_serialize_parent_id() {
        let city = City::builder(StateId::new()).name("Fresno").build().unwrap();
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["__class__"], "City");
        assert_eq!(json["state_id"], city.state_id.to_string());
    }
}
