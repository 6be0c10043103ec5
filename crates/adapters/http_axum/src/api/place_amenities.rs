//! JSON REST handlers for the amenities linked to a place.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::Repositories;
use hbnb_app::services::place_service::AmenityLink;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::id::{AmenityId, PlaceId};

use super::{DeleteResponse, ListResponse, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

pub enum LinkResponse {
    /// The link was just made.
    Created(Json<Amenity>),
    /// The place already offered the amenity.
    Ok(Json<Amenity>),
}

impl IntoResponse for LinkResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_pair(place_id: &str, amenity_id: &str) -> Result<(PlaceId, AmenityId), ApiError> {
    Ok((
        parse_id(place_id, "Place")?,
        parse_id(amenity_id, "Amenity")?,
    ))
}

/// `GET /api/v1/places/{place_id}/amenities`
pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse<Amenity>, ApiError> {
    let place_id: PlaceId = parse_id(&place_id, "Place")?;
    let amenities = state.place_service.list_amenities(place_id).await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `POST /api/v1/places/{place_id}/amenities/{amenity_id}`
pub async fn link<R: Repositories>(
    State(state): State<AppState<R>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<LinkResponse, ApiError> {
    let (place_id, amenity_id) = parse_pair(&place_id, &amenity_id)?;
    let response = match state
        .place_service
        .link_amenity(place_id, amenity_id)
        .await?
    {
        AmenityLink::Created(amenity) => LinkResponse::Created(Json(amenity)),
        AmenityLink::AlreadyLinked(amenity) => LinkResponse::Ok(Json(amenity)),
    };
    Ok(response)
}

/// `DELETE /api/v1/places/{place_id}/amenities/{amenity_id}`
pub async fn unlink<R: Repositories>(
    State(state): State<AppState<R>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError> {
    let (place_id, amenity_id) = parse_pair(&place_id, &amenity_id)?;
    state
        .place_service
        .unlink_amenity(place_id, amenity_id)
        .await?;
    Ok(DeleteResponse::Ok)
}
