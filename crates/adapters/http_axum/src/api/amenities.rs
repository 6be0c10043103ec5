//! JSON REST handlers for amenities.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Repositories;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::id::AmenityId;
use hbnb_domain::payload::Payload;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, parse_id};
use crate::body::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<ListResponse<Amenity>, ApiError> {
    let amenities = state.amenity_service.list_amenities().await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

pub async fn get<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(amenity_id): Path<String>,
) -> Result<GetResponse<Amenity>, ApiError> {
    let amenity_id: AmenityId = parse_id(&amenity_id, "Amenity")?;
    let amenity = state.amenity_service.get_amenity(amenity_id).await?;
    Ok(GetResponse::Ok(Json(amenity)))
}

pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    JsonBody(payload): JsonBody,
) -> Result<CreateResponse<Amenity>, ApiError> {
    let amenity = state.amenity_service.create_amenity(payload).await?;
    Ok(CreateResponse::Created(Json(amenity)))
}

pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(amenity_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<GetResponse<Amenity>, ApiError> {
    let payload = Payload::require(payload)?;
    let amenity_id: AmenityId = parse_id(&amenity_id, "Amenity")?;
    let amenity = state
        .amenity_service
        .update_amenity(amenity_id, Some(payload))
        .await?;
    Ok(GetResponse::Ok(Json(amenity)))
}

pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(amenity_id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let amenity_id: AmenityId = parse_id(&amenity_id, "Amenity")?;
    state.amenity_service.delete_amenity(amenity_id).await?;
    Ok(DeleteResponse::Ok)
}
