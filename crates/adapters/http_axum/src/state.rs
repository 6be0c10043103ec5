//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::Repositories;
use hbnb_app::services::amenity_service::AmenityService;
use hbnb_app::services::city_service::CityService;
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::review_service::ReviewService;
use hbnb_app::services::state_service::StateService;
use hbnb_app::services::stats_service::StatsService;
use hbnb_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over a single [`Repositories`] bundle to avoid dynamic dispatch.
/// `Clone` is implemented manually so the bundle itself does not need to be
/// `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<R: Repositories> {
    pub state_service: Arc<StateService<R::States>>,
    pub city_service: Arc<CityService<R::Cities, R::States>>,
    pub amenity_service: Arc<AmenityService<R::Amenities>>,
    pub user_service: Arc<UserService<R::Users>>,
    pub place_service: Arc<PlaceService<R::Places, R::Cities, R::Users, R::Amenities>>,
    pub review_service: Arc<ReviewService<R::Reviews, R::Places, R::Users>>,
    pub stats_service: Arc<StatsService<R>>,
}

impl<R: Repositories> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            city_service: Arc::clone(&self.city_service),
            amenity_service: Arc::clone(&self.amenity_service),
            user_service: Arc::clone(&self.user_service),
            place_service: Arc::clone(&self.place_service),
            review_service: Arc::clone(&self.review_service),
            stats_service: Arc::clone(&self.stats_service),
        }
    }
}

impl<R: Repositories> AppState<R> {
    /// Build every service from one repository bundle.
    pub fn new(repos: &R) -> Self {
        Self {
            state_service: Arc::new(StateService::new(repos.states())),
            city_service: Arc::new(CityService::new(repos.cities(), repos.states())),
            amenity_service: Arc::new(AmenityService::new(repos.amenities())),
            user_service: Arc::new(UserService::new(repos.users())),
            place_service: Arc::new(PlaceService::new(
                repos.places(),
                repos.cities(),
                repos.users(),
                repos.amenities(),
            )),
            review_service: Arc::new(ReviewService::new(
                repos.reviews(),
                repos.places(),
                repos.users(),
            )),
            stats_service: Arc::new(StatsService::new(repos)),
        }
    }
}
