//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod cities;
#[allow(clippy::missing_errors_doc)]
pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod place_amenities;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get, post};
use serde::Serialize;

use hbnb_app::ports::Repositories;
use hbnb_domain::error::NotFoundError;

use crate::error::ApiError;
use crate::state::AppState;

/// Responses carrying a collection.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Responses carrying a single object: reads and updates.
pub enum GetResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Responses from create endpoints.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Responses from delete endpoints: `200` with an empty object.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(serde_json::Map::new()).into_response(),
        }
    }
}

/// Parse an identifier taken from the URL.
///
/// Ids that are not even well-formed cannot match a stored object, so they
/// are reported as not found.
pub(crate) fn parse_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::from(NotFoundError::new(entity, raw)))
}

/// Register `path` both with and without a trailing slash.
fn route_slashed<R: Repositories>(
    router: Router<AppState<R>>,
    path: &str,
    methods: MethodRouter<AppState<R>>,
) -> Router<AppState<R>> {
    router
        .route(path, methods.clone())
        .route(&format!("{path}/"), methods)
}

/// Build the `/api/v1` sub-router.
///
/// Every resource path answers with or without a trailing slash.
pub fn routes<R: Repositories>() -> Router<AppState<R>> {
    let resources: Vec<(&str, MethodRouter<AppState<R>>)> = vec![
        (
            "/states",
            get(states::list::<R>).post(states::create::<R>),
        ),
        (
            "/states/{state_id}",
            get(states::get::<R>)
                .put(states::update::<R>)
                .delete(states::delete::<R>),
        ),
        (
            "/states/{state_id}/cities",
            get(cities::list::<R>).post(cities::create::<R>),
        ),
        (
            "/cities/{city_id}",
            get(cities::get::<R>)
                .put(cities::update::<R>)
                .delete(cities::delete::<R>),
        ),
        (
            "/amenities",
            get(amenities::list::<R>).post(amenities::create::<R>),
        ),
        (
            "/amenities/{amenity_id}",
            get(amenities::get::<R>)
                .put(amenities::update::<R>)
                .delete(amenities::delete::<R>),
        ),
        (
            "/users",
            get(users::list::<R>).post(users::create::<R>),
        ),
        (
            "/users/{user_id}",
            get(users::get::<R>)
                .put(users::update::<R>)
                .delete(users::delete::<R>),
        ),
        (
            "/cities/{city_id}/places",
            get(places::list::<R>).post(places::create::<R>),
        ),
        (
            "/places/{place_id}",
            get(places::get::<R>)
                .put(places::update::<R>)
                .delete(places::delete::<R>),
        ),
        ("/places_search", post(places::search::<R>)),
        (
            "/places/{place_id}/reviews",
            get(reviews::list::<R>).post(reviews::create::<R>),
        ),
        (
            "/reviews/{review_id}",
            get(reviews::get::<R>)
                .put(reviews::update::<R>)
                .delete(reviews::delete::<R>),
        ),
        (
            "/places/{place_id}/amenities",
            get(place_amenities::list::<R>),
        ),
        (
            "/places/{place_id}/amenities/{amenity_id}",
            post(place_amenities::link::<R>).delete(place_amenities::unlink::<R>),
        ),
    ];

    let router = Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<R>));

    resources
        .into_iter()
        .fold(router, |router, (path, methods)| {
            route_slashed(router, path, methods)
        })
}
