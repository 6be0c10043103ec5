//! Place service: use-cases for listings, their amenities, and search.

use std::collections::HashSet;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::{HbnbError, NotFoundError, ValidationError};
use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use hbnb_domain::payload::Payload;
use hbnb_domain::place::Place;

use crate::ports::{AmenityRepository, CityRepository, PlaceRepository, UserRepository};

/// Result of linking an amenity to a place.
#[derive(Debug)]
pub enum AmenityLink {
    /// The link did not exist and was created.
    Created(Amenity),
    /// The place already offered this amenity.
    AlreadyLinked(Amenity),
}

/// Application service for places.
pub struct PlaceService<P, C, U, A> {
    places: P,
    cities: C,
    users: U,
    amenities: A,
}

impl<P, C, U, A> PlaceService<P, C, U, A>
where
    P: PlaceRepository,
    C: CityRepository,
    U: UserRepository,
    A: AmenityRepository,
{
    pub fn new(places: P, cities: C, users: U, amenities: A) -> Self {
        Self {
            places,
            cities,
            users,
            amenities,
        }
    }

    async fn ensure_city(&self, city_id: CityId) -> Result<(), HbnbError> {
        match self.cities.get_by_id(city_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::new("City", city_id).into()),
        }
    }

    async fn find_amenity(&self, amenity_id: AmenityId) -> Result<Amenity, HbnbError> {
        self.amenities
            .get_by_id(amenity_id)
            .await?
            .ok_or_else(|| NotFoundError::new("Amenity", amenity_id).into())
    }

    /// List the places of a city.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city does not exist, or a
    /// storage error.
    pub async fn list_places(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        self.ensure_city(city_id).await?;
        self.places.find_by_city(city_id).await
    }

    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists, or a
    /// storage error.
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        self.places
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Place", id).into())
    }

    /// Create a place in `city_id`, owned by the payload's `user_id`.
    ///
    /// Checks run in this order: city exists, payload present, `user_id`
    /// present, user exists, `name` present.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as [`HbnbError::NotFound`] or
    /// [`HbnbError::Validation`], or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_place(
        &self,
        city_id: CityId,
        payload: Option<Payload>,
    ) -> Result<Place, HbnbError> {
        self.ensure_city(city_id).await?;
        let payload = Payload::require(payload)?;
        let raw_user_id = payload.required_str("user_id")?;
        let owner = match raw_user_id.parse::<UserId>() {
            Ok(id) => self.users.get_by_id(id).await?,
            Err(_) => None,
        };
        let Some(owner) = owner else {
            return Err(NotFoundError::new("User", raw_user_id).into());
        };
        let user_id = owner.id;
        let name = payload.required_str("name")?;

        let mut place = Place::builder(city_id, user_id).name(name).build()?;
        place.apply(&payload)?;
        self.places.create(place).await
    }

    /// Update the descriptive fields of a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] for a missing payload (checked
    /// first) or a mistyped field, [`HbnbError::NotFound`] for an unknown id,
    /// or a storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_place(
        &self,
        id: PlaceId,
        payload: Option<Payload>,
    ) -> Result<Place, HbnbError> {
        let payload = Payload::require(payload)?;
        let mut place = self.get_place(id).await?;
        place.apply(&payload)?;
        place.validate()?;
        place.touch();
        self.places.update(place).await
    }

    /// Delete a place and its reviews.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown id, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        self.get_place(id).await?;
        self.places.delete(id).await
    }

    /// List the amenities offered by a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for an unknown place, or a storage
    /// error.
    pub async fn list_amenities(&self, place_id: PlaceId) -> Result<Vec<Amenity>, HbnbError> {
        let place = self.get_place(place_id).await?;
        let mut amenities = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in place.amenity_ids {
            if let Some(amenity) = self.amenities.get_by_id(amenity_id).await? {
                amenities.push(amenity);
            }
        }
        Ok(amenities)
    }

    /// Link an amenity to a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when either side does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn link_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<AmenityLink, HbnbError> {
        let place = self.get_place(place_id).await?;
        let amenity = self.find_amenity(amenity_id).await?;
        if place.has_amenity(amenity_id) {
            return Ok(AmenityLink::AlreadyLinked(amenity));
        }
        self.places.link_amenity(place_id, amenity_id).await?;
        Ok(AmenityLink::Created(amenity))
    }

    /// Remove an amenity from a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when either side does not exist or the
    /// place does not offer the amenity, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn unlink_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(), HbnbError> {
        let place = self.get_place(place_id).await?;
        self.find_amenity(amenity_id).await?;
        if !place.has_amenity(amenity_id) {
            return Err(NotFoundError::new("Amenity", amenity_id).into());
        }
        self.places.unlink_amenity(place_id, amenity_id).await
    }

    /// Search places by states, cities and amenities.
    ///
    /// With neither `states` nor `cities` every place is a candidate;
    /// otherwise candidates are the places of the listed cities plus those of
    /// every city in the listed states. Candidates are then narrowed to the
    /// places offering *all* listed `amenities`. Unknown or malformed state and
    /// city ids contribute no candidates but still count as a filter; a
    /// malformed amenity id matches no place.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotJson`] when no JSON object was sent,
    /// [`ValidationError::InvalidField`] when a filter is not a list, or a
    /// storage error.
    #[tracing::instrument(skip(self, payload))]
    pub async fn search(&self, payload: Option<Payload>) -> Result<Vec<Place>, HbnbError> {
        let payload = payload.ok_or(ValidationError::NotJson)?;
        let states: Vec<Option<StateId>> = payload.id_list("states")?;
        let cities: Vec<Option<CityId>> = payload.id_list("cities")?;
        let amenities: Vec<Option<AmenityId>> = payload.id_list("amenities")?;

        // no place offers an amenity whose id is not even well formed
        let Some(amenities) = amenities.into_iter().collect::<Option<Vec<_>>>() else {
            return Ok(Vec::new());
        };

        let candidates = if states.is_empty() && cities.is_empty() {
            self.places.get_all().await?
        } else {
            let mut city_ids = Vec::new();
            for state_id in states.into_iter().flatten() {
                for city in self.cities.find_by_state(state_id).await? {
                    city_ids.push(city.id);
                }
            }
            city_ids.extend(cities.into_iter().flatten());

            let mut seen = HashSet::new();
            let mut places = Vec::new();
            for city_id in city_ids {
                if seen.insert(city_id) {
                    places.extend(self.places.find_by_city(city_id).await?);
                }
            }
            places
        };

        Ok(candidates
            .into_iter()
            .filter(|place| amenities.iter().all(|a| place.has_amenity(*a)))
            .collect())
    }
}
