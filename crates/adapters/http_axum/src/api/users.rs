//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Repositories;
use hbnb_domain::id::UserId;
use hbnb_domain::payload::Payload;
use hbnb_domain::user::User;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, parse_id};
use crate::body::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<ListResponse<User>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

pub async fn get<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
) -> Result<GetResponse<User>, ApiError> {
    let user_id: UserId = parse_id(&user_id, "User")?;
    let user = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    JsonBody(payload): JsonBody,
) -> Result<CreateResponse<User>, ApiError> {
    let user = state.user_service.create_user(payload).await?;
    Ok(CreateResponse::Created(Json(user)))
}

pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<GetResponse<User>, ApiError> {
    let payload = Payload::require(payload)?;
    let user_id: UserId = parse_id(&user_id, "User")?;
    let user = state
        .user_service
        .update_user(user_id, Some(payload))
        .await?;
    Ok(GetResponse::Ok(Json(user)))
}

pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let user_id: UserId = parse_id(&user_id, "User")?;
    state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::Ok)
}
