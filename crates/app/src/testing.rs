//! In-memory implementation of every storage port, for tests.
//!
//! One [`InMemoryStorage`] value plays all six repositories over a shared
//! set of tables, so parent lookups and cascading deletes behave the same
//! way they do against a real database.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::ports::{
    AmenityRepository, CityRepository, PlaceRepository, Repositories, ReviewRepository,
    StateRepository, UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    states: Vec<State>,
    cities: Vec<City>,
    amenities: Vec<Amenity>,
    users: Vec<User>,
    places: Vec<Place>,
    reviews: Vec<Review>,
}

impl Tables {
    fn drop_places(&mut self, doomed: &[PlaceId]) {
        self.places.retain(|p| !doomed.contains(&p.id));
        self.reviews.retain(|r| !doomed.contains(&r.place_id));
    }

    fn drop_cities(&mut self, doomed: &[CityId]) {
        self.cities.retain(|c| !doomed.contains(&c.id));
        let places: Vec<PlaceId> = self
            .places
            .iter()
            .filter(|p| doomed.contains(&p.city_id))
            .map(|p| p.id)
            .collect();
        self.drop_places(&places);
    }
}

fn upsert<T: Clone>(rows: &mut Vec<T>, row: &T, same: impl Fn(&T) -> bool) {
    match rows.iter_mut().find(|r| same(r)) {
        Some(existing) => *existing = row.clone(),
        None => rows.push(row.clone()),
    }
}

/// Shared, cloneable in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Repositories for InMemoryStorage {
    type States = Self;
    type Cities = Self;
    type Amenities = Self;
    type Users = Self;
    type Places = Self;
    type Reviews = Self;

    fn states(&self) -> Self {
        self.clone()
    }

    fn cities(&self) -> Self {
        self.clone()
    }

    fn amenities(&self) -> Self {
        self.clone()
    }

    fn users(&self) -> Self {
        self.clone()
    }

    fn places(&self) -> Self {
        self.clone()
    }

    fn reviews(&self) -> Self {
        self.clone()
    }
}

impl StateRepository for InMemoryStorage {
    async fn create(&self, state: State) -> Result<State, HbnbError> {
        self.lock().states.push(state.clone());
        Ok(state)
    }

    async fn get_by_id(&self, id: StateId) -> Result<Option<State>, HbnbError> {
        Ok(self.lock().states.iter().find(|s| s.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<State>, HbnbError> {
        Ok(self.lock().states.clone())
    }

    async fn update(&self, state: State) -> Result<State, HbnbError> {
        upsert(&mut self.lock().states, &state, |s| s.id == state.id);
        Ok(state)
    }

    async fn delete(&self, id: StateId) -> Result<(), HbnbError> {
        let mut tables = self.lock();
        tables.states.retain(|s| s.id != id);
        let cities: Vec<CityId> = tables
            .cities
            .iter()
            .filter(|c| c.state_id == id)
            .map(|c| c.id)
            .collect();
        tables.drop_cities(&cities);
        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(self.lock().states.len())
    }
}

impl CityRepository for InMemoryStorage {
    async fn create(&self, city: City) -> Result<City, HbnbError> {
        self.lock().cities.push(city.clone());
        Ok(city)
    }

    async fn get_by_id(&self, id: CityId) -> Result<Option<City>, HbnbError> {
        Ok(self.lock().cities.iter().find(|c| c.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<City>, HbnbError> {
        Ok(self.lock().cities.clone())
    }

    async fn find_by_state(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        Ok(self
            .lock()
            .cities
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect())
    }

    async fn update(&self, city: City) -> Result<City, HbnbError> {
        upsert(&mut self.lock().cities, &city, |c| c.id == city.id);
        Ok(city)
    }

    async fn delete(&self, id: CityId) -> Result<(), HbnbError> {
        self.lock().drop_cities(&[id]);
        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(self.lock().cities.len())
    }
}

impl AmenityRepository for InMemoryStorage {
    async fn create(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        self.lock().amenities.push(amenity.clone());
        Ok(amenity)
    }

    async fn get_by_id(&self, id: AmenityId) -> Result<Option<Amenity>, HbnbError> {
        Ok(self.lock().amenities.iter().find(|a| a.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError> {
        Ok(self.lock().amenities.clone())
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        upsert(&mut self.lock().amenities, &amenity, |a| a.id == amenity.id);
        Ok(amenity)
    }

    async fn delete(&self, id: AmenityId) -> Result<(), HbnbError> {
        let mut tables = self.lock();
        tables.amenities.retain(|a| a.id != id);
        for place in &mut tables.places {
            place.amenity_ids.retain(|a| *a != id);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(self.lock().amenities.len())
    }
}

impl UserRepository for InMemoryStorage {
    async fn create(&self, user: User) -> Result<User, HbnbError> {
        self.lock().users.push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, HbnbError> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
        Ok(self.lock().users.clone())
    }

    async fn update(&self, user: User) -> Result<User, HbnbError> {
        upsert(&mut self.lock().users, &user, |u| u.id == user.id);
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), HbnbError> {
        let mut tables = self.lock();
        tables.users.retain(|u| u.id != id);
        tables.reviews.retain(|r| r.user_id != id);
        let places: Vec<PlaceId> = tables
            .places
            .iter()
            .filter(|p| p.user_id == id)
            .map(|p| p.id)
            .collect();
        tables.drop_places(&places);
        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(self.lock().users.len())
    }
}

impl PlaceRepository for InMemoryStorage {
    async fn create(&self, mut place: Place) -> Result<Place, HbnbError> {
        place.amenity_ids.clear();
        self.lock().places.push(place.clone());
        Ok(place)
    }

    async fn get_by_id(&self, id: PlaceId) -> Result<Option<Place>, HbnbError> {
        Ok(self.lock().places.iter().find(|p| p.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
        Ok(self.lock().places.clone())
    }

    async fn find_by_city(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        Ok(self
            .lock()
            .places
            .iter()
            .filter(|p| p.city_id == city_id)
            .cloned()
            .collect())
    }

    async fn update(&self, mut place: Place) -> Result<Place, HbnbError> {
        let mut tables = self.lock();
        if let Some(existing) = tables.places.iter_mut().find(|p| p.id == place.id) {
            place.amenity_ids.clone_from(&existing.amenity_ids);
            *existing = place.clone();
        }
        Ok(place)
    }

    async fn delete(&self, id: PlaceId) -> Result<(), HbnbError> {
        self.lock().drop_places(&[id]);
        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(self.lock().places.len())
    }

    async fn link_amenity(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<(), HbnbError> {
        let mut tables = self.lock();
        if let Some(place) = tables.places.iter_mut().find(|p| p.id == place_id) {
            if !place.amenity_ids.contains(&amenity_id) {
                place.amenity_ids.push(amenity_id);
            }
        }
        Ok(())
    }

    async fn unlink_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(), HbnbError> {
        let mut tables = self.lock();
        if let Some(place) = tables.places.iter_mut().find(|p| p.id == place_id) {
            place.amenity_ids.retain(|a| *a != amenity_id);
        }
        Ok(())
    }
}

impl ReviewRepository for InMemoryStorage {
    async fn create(&self, review: Review) -> Result<Review, HbnbError> {
        self.lock().reviews.push(review.clone());
        Ok(review)
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, HbnbError> {
        Ok(self.lock().reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Review>, HbnbError> {
        Ok(self.lock().reviews.clone())
    }

    async fn find_by_place(&self, place_id: PlaceId) -> Result<Vec<Review>, HbnbError> {
        Ok(self
            .lock()
            .reviews
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect())
    }

    async fn update(&self, review: Review) -> Result<Review, HbnbError> {
        upsert(&mut self.lock().reviews, &review, |r| r.id == review.id);
        Ok(review)
    }

    async fn delete(&self, id: ReviewId) -> Result<(), HbnbError> {
        self.lock().reviews.retain(|r| r.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, HbnbError> {
        Ok(self.lock().reviews.len())
    }
}
