//! JSON REST handlers for states.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Repositories;
use hbnb_domain::id::StateId;
use hbnb_domain::payload::Payload;
use hbnb_domain::state::State as StateModel;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, parse_id};
use crate::body::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/v1/states`
pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<ListResponse<StateModel>, ApiError> {
    let states = state.state_service.list_states().await?;
    Ok(ListResponse::Ok(Json(states)))
}

/// `GET /api/v1/states/{state_id}`
pub async fn get<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(state_id): Path<String>,
) -> Result<GetResponse<StateModel>, ApiError> {
    let state_id: StateId = parse_id(&state_id, "State")?;
    let found = state.state_service.get_state(state_id).await?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/v1/states`
pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    JsonBody(payload): JsonBody,
) -> Result<CreateResponse<StateModel>, ApiError> {
    let created = state.state_service.create_state(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/states/{state_id}`
pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(state_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<GetResponse<StateModel>, ApiError> {
    // A bad body is reported before an unknown id.
    let payload = Payload::require(payload)?;
    let state_id: StateId = parse_id(&state_id, "State")?;
    let updated = state
        .state_service
        .update_state(state_id, Some(payload))
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/states/{state_id}`
pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(state_id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let state_id: StateId = parse_id(&state_id, "State")?;
    state.state_service.delete_state(state_id).await?;
    Ok(DeleteResponse::Ok)
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn should_complete_state_crud_cycle() {
        let app = TestApp::new();

        let (status, body) = app.post("/api/v1/states", json!({"name": "California"})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["__class__"], "State");
        assert_eq!(body["name"], "California");
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = app.get("/api/v1/states").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = app
            .put(&format!("/api/v1/states/{id}"), json!({"name": "Nevada"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Nevada");

        let (status, body) = app.get(&format!("/api/v1/states/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Nevada");

        let (status, body) = app.delete(&format!("/api/v1/states/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));

        let (status, body) = app.get(&format!("/api/v1/states/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_accept_trailing_slash_on_collection() {
        let app = TestApp::new();
        let (status, _) = app.post("/api/v1/states/", json!({"name": "Ohio"})).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = app.get("/api/v1/states/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_non_json_body() {
        let app = TestApp::new();
        let (status, body) = app
            .raw("POST", "/api/v1/states", "text/plain", "name=Ohio")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Not a JSON"}));
    }

    #[tokio::test]
    async fn should_reject_state_without_name() {
        let app = TestApp::new();
        let (status, body) = app.post("/api/v1/states", json!({"code": "OH"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing name"}));
    }

    #[tokio::test]
    async fn should_return_not_found_for_malformed_id() {
        let app = TestApp::new();
        let (status, _) = app.get("/api/v1/states/not-a-uuid").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = app.delete("/api/v1/states/not-a-uuid").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_check_body_before_id_on_update() {
        let app = TestApp::new();
        let (status, body) = app
            .raw("PUT", "/api/v1/states/not-a-uuid", "application/json", "oops")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Not a JSON");

        let (status, _) = app
            .put("/api/v1/states/not-a-uuid", json!({"name": "x"}))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
