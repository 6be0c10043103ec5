//! Amenity: a feature a place can offer (Wifi, Pool, …).

use serde::Serialize;

use crate::error::{HbnbError, ValidationError};
use crate::id::AmenityId;
use crate::payload::Payload;
use crate::time::{Timestamp, now, serialize_iso};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    #[serde(serialize_with = "serialize_iso")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "serialize_iso")]
    pub updated_at: Timestamp,
}

impl Amenity {
    #[must_use]
    pub fn builder() -> AmenityBuilder {
        AmenityBuilder::default()
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(())
    }

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

#[derive(Debug, Default)]
pub struct AmenityBuilder {
    id: Option<AmenityId>,
    name: Option<String>,
}

impl AmenityBuilder {
    #[must_use]
    pub fn id(mut self, id: AmenityId) -> Self {
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
    pub fn build(self) -> Result<Amenity, HbnbError> {
        let created_at = now();
        let amenity = Amenity {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            created_at,
            updated_at: created_at,
        };
        amenity.validate()?;
        Ok(amenity)
    }
}
