//! Storage port: repository traits for persistence.
//!
//! Implementations must cascade deletions along ownership: removing a state
//! removes its cities, removing a city removes its places, removing a place
//! removes its reviews, and removing a user removes the places and reviews
//! they own. Removing an amenity only unlinks it from places.

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Repository for persisting and querying [`State`]s.
pub trait StateRepository {
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send;

    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Delete a state and, transitively, its cities.
    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, HbnbError>> + Send;
}

/// Repository for persisting and querying [`City`]s.
pub trait CityRepository {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    fn get_by_id(&self, id: CityId)
    -> impl Future<Output = Result<Option<City>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// All cities belonging to `state_id`. Unknown states yield an empty list.
    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Amenity`]s.
pub trait AmenityRepository {
    fn create(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send;

    fn update(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, HbnbError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send;

    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, HbnbError>> + Send;
}

/// Repository for persisting and querying [`Place`]s and their amenity links.
///
/// Every returned [`Place`] carries its current `amenity_ids`.
pub trait PlaceRepository {
    /// Persist a new place. `amenity_ids` on the argument is ignored.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Persist descriptive fields. Links are changed only through
    /// [`link_amenity`](Self::link_amenity) and
    /// [`unlink_amenity`](Self::unlink_amenity).
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, HbnbError>> + Send;

    /// Link an amenity to a place. Linking twice is a no-op.
    fn link_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn unlink_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`Review`]s.
pub trait ReviewRepository {
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send;

    fn find_by_place(
        &self,
        place_id: PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send;

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, HbnbError>> + Send;
}

/// One implementation of every repository port.
///
/// Lets the HTTP adapter stay generic over a single type parameter. Each
/// accessor hands out a cheap clone sharing the same backing store.
pub trait Repositories: Send + Sync + 'static {
    type States: StateRepository + Clone + Send + Sync + 'static;
    type Cities: CityRepository + Clone + Send + Sync + 'static;
    type Amenities: AmenityRepository + Clone + Send + Sync + 'static;
    type Users: UserRepository + Clone + Send + Sync + 'static;
    type Places: PlaceRepository + Clone + Send + Sync + 'static;
    type Reviews: ReviewRepository + Clone + Send + Sync + 'static;

    fn states(&self) -> Self::States;
    fn cities(&self) -> Self::Cities;
    fn amenities(&self) -> Self::Amenities;
    fn users(&self) -> Self::Users;
    fn places(&self) -> Self::Places;
    fn reviews(&self) -> Self::Reviews;
}
