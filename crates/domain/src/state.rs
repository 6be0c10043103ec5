//! State: a top-level region that contains cities.

use serde::Serialize;

use crate::error::{HbnbError, ValidationError};
use crate::id::StateId;
use crate::payload::Payload;
use crate::time::{Timestamp, now, serialize_iso};

/// A geographic state such as "California".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct State {
    pub id: StateId,
    pub name: String,
    #[serde(serialize_with = "serialize_iso")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "serialize_iso")]
    pub updated_at: Timestamp,
}

impl State {
    /// Create a builder for constructing a [`State`].
    #[must_use]
    pub fn builder() -> StateBuilder {
        StateBuilder::default()
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

    /// Copy the updatable fields present in `payload`.
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

    /// Mark the state as modified now.
    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

/// Step-by-step builder for [`State`].
#[derive(Debug, Default)]
pub struct StateBuilder {
    id: Option<StateId>,
    name: Option<String>,
}

impl StateBuilder {
    #[must_use]
    pub fn id(mut self, id: StateId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`State`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<State, HbnbError> {
        let created_at = now();
        let state = State {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        };
        state.validate()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_valid_state_when_name_provided() {
        let state = State::builder().name("California").build().unwrap();
        assert_eq!(state.name, "California");
        assert_eq!(state.created_at, state.updated_at);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = State::builder().build();
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::EmptyField("name")))
        ));
    }

    #[test]
    fn should_serialize_with_class_name_and_iso_timestamps() {
        let state = State::builder().name("Nevada").build().unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["__class__"], "State");
        assert_eq!(json["name"], "Nevada");
        assert_eq!(json["id"], state.id.to_string());
        let created = json["created_at"].as_str().unwrap();
        assert!(!created.ends_with('Z'));
        assert_eq!(created.len(), "2017-03-25T02:17:06.000000".len());
    }

    #[test]
    fn should_only_update_name_from_payload() {
        let mut state = State::builder().name("Nevada").build().unwrap();
        let id = state.id;
        let payload = Payload::from_value(json!({
            "name": "Arizona",
            "id": "ignored",
            "created_at": "ignored"
        }))
        .unwrap();

        state.apply(&payload).unwrap();

        assert_eq!(state.name, "Arizona");
        assert_eq!(state.id, id);
    }

    #[test]
    fn should_keep_name_when_payload_omits_it() {
        let mut state = State::builder().name("Nevada").build().unwrap();
        let payload = Payload::from_value(json!({"other": 1})).unwrap();
        state.apply(&payload).unwrap();
        assert_eq!(state.name, "Nevada");
    }
}
