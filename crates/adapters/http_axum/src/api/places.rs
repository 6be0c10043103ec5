//! JSON REST handlers for places and place search.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Repositories;
use hbnb_domain::id::{CityId, PlaceId};
use hbnb_domain::payload::Payload;
use hbnb_domain::place::Place;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, parse_id};
use crate::body::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/v1/cities/{city_id}/places`
pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(city_id): Path<String>,
) -> Result<ListResponse<Place>, ApiError> {
    let city_id: CityId = parse_id(&city_id, "City")?;
    let places = state.place_service.list_places(city_id).await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /api/v1/places/{place_id}`
pub async fn get<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(place_id): Path<String>,
) -> Result<GetResponse<Place>, ApiError> {
    let place_id: PlaceId = parse_id(&place_id, "Place")?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `POST /api/v1/cities/{city_id}/places`
pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(city_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<CreateResponse<Place>, ApiError> {
    let city_id: CityId = parse_id(&city_id, "City")?;
    let place = state.place_service.create_place(city_id, payload).await?;
    Ok(CreateResponse::Created(Json(place)))
}

/// `PUT /api/v1/places/{place_id}`
pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(place_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<GetResponse<Place>, ApiError> {
    let payload = Payload::require(payload)?;
    let place_id: PlaceId = parse_id(&place_id, "Place")?;
    let place = state
        .place_service
        .update_place(place_id, Some(payload))
        .await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `DELETE /api/v1/places/{place_id}`
pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(place_id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let place_id: PlaceId = parse_id(&place_id, "Place")?;
    state.place_service.delete_place(place_id).await?;
    Ok(DeleteResponse::Ok)
}

/// `POST /api/v1/places_search`
///
/// An empty object is a valid query matching every place.
pub async fn search<R: Repositories>(
    State(state): State<AppState<R>>,
    JsonBody(payload): JsonBody,
) -> Result<ListResponse<Place>, ApiError> {
    let places = state.place_service.search(payload).await?;
    Ok(ListResponse::Ok(Json(places)))
}
