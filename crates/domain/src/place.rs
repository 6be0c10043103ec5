//! Place: a rental listing located in a city and owned by a user.

use serde::Serialize;

use crate::error::{HbnbError, ValidationError};
use crate::id::{AmenityId, CityId, PlaceId, UserId};
use crate::payload::Payload;
use crate::time::{Timestamp, now, serialize_iso};

/// A rental listing.
///
/// `amenity_ids` mirrors the place–amenity links and is maintained by the
/// storage layer; [`Place::apply`] never touches it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Place {
    pub id: PlaceId,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Vec<AmenityId>,
    #[serde(serialize_with = "serialize_iso")]
    pub created_at: Timestamp,
    #[serde(serialize_with = "serialize_iso")]
    pub updated_at: Timestamp,
}

impl Place {
    #[must_use]
    pub fn builder(city_id: CityId, user_id: UserId) -> PlaceBuilder {
        PlaceBuilder {
            id: None,
            city_id,
            user_id,
            name: None,
        }
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

    /// Copy every descriptive field present in `payload`.
    ///
    /// Identity (`id`), ownership (`user_id`, `city_id`) and timestamps are
    /// never taken from the payload. `null` values leave the field as is.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] on a mistyped field. Nothing
    /// is modified in that case.
    pub fn apply(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        let name = payload.optional_str("name")?;
        let description = payload.optional_str("description")?;
        let number_rooms = payload.optional_u32("number_rooms")?;
        let number_bathrooms = payload.optional_u32("number_bathrooms")?;
        let max_guest = payload.optional_u32("max_guest")?;
        let price_by_night = payload.optional_u32("price_by_night")?;
        let latitude = payload.optional_f64("latitude")?;
        let longitude = payload.optional_f64("longitude")?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(n) = number_rooms {
            self.number_rooms = n;
        }
        if let Some(n) = number_bathrooms {
            self.number_bathrooms = n;
        }
        if let Some(n) = max_guest {
            self.max_guest = n;
        }
        if let Some(n) = price_by_night {
            self.price_by_night = n;
        }
        if latitude.is_some() {
            self.latitude = latitude;
        }
        if longitude.is_some() {
            self.longitude = longitude;
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = now();
    }

    #[must_use]
    pub fn has_amenity(&self, amenity_id: AmenityId) -> bool {
        self.amenity_ids.contains(&amenity_id)
    }
}

/// Builder for [`Place`]. Descriptive fields start at their defaults and
/// are usually filled with [`Place::apply`].
#[derive(Debug)]
pub struct PlaceBuilder {
    id: Option<PlaceId>,
    city_id: CityId,
    user_id: UserId,
    name: Option<String>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaceId) -> Self {
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
    pub fn build(self) -> Result<Place, HbnbError> {
        let created_at = now();
        let place = Place {
            id: self.id.unwrap_or_default(),
            city_id: self.city_id,
            user_id: self.user_id,
            name: self.name.unwrap_or_default(),
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            amenity_ids: Vec::new(),
            created_at,
            updated_at: created_at,
        };
        place.validate()?;
        Ok(place)
    }
}
