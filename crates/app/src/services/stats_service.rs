//! Stats service: object counts per entity type.

use hbnb_domain::error::HbnbError;

use crate::ports::{
    AmenityRepository, CityRepository, PlaceRepository, Repositories, ReviewRepository,
    StateRepository, UserRepository,
};

/// Number of stored objects per entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub amenities: usize,
    pub cities: usize,
    pub places: usize,
    pub reviews: usize,
    pub states: usize,
    pub users: usize,
}

/// Counts objects across every repository.
pub struct StatsService<R: Repositories> {
    states: R::States,
    cities: R::Cities,
    amenities: R::Amenities,
    users: R::Users,
    places: R::Places,
    reviews: R::Reviews,
}

impl<R: Repositories> StatsService<R> {
    pub fn new(repos: &R) -> Self {
        Self {
            states: repos.states(),
            cities: repos.cities(),
            amenities: repos.amenities(),
            users: repos.users(),
            places: repos.places(),
            reviews: repos.reviews(),
        }
    }

    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub async fn stats(&self) -> Result<Stats, HbnbError> {
        Ok(Stats {
            amenities: self.amenities.count().await?,
            cities: self.cities.count().await?,
            places: self.places.count().await?,
            reviews: self.reviews.count().await?,
            states: self.states.count().await?,
            users: self.users.count().await?,
        })
    }
}
