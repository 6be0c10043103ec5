//! JSON REST handlers for cities, nested under their state.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Repositories;
use hbnb_domain::city::City;
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::payload::Payload;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, parse_id};
use crate::body::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/v1/states/{state_id}/cities`
pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(state_id): Path<String>,
) -> Result<ListResponse<City>, ApiError> {
    let state_id: StateId = parse_id(&state_id, "State")?;
    let cities = state.city_service.list_cities(state_id).await?;
    Ok(ListResponse::Ok(Json(cities)))
}

/// `GET /api/v1/cities/{city_id}`
pub async fn get<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(city_id): Path<String>,
) -> Result<GetResponse<City>, ApiError> {
    let city_id: CityId = parse_id(&city_id, "City")?;
    let city = state.city_service.get_city(city_id).await?;
    Ok(GetResponse::Ok(Json(city)))
}

/// `POST /api/v1/states/{state_id}/cities`
pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(state_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<CreateResponse<City>, ApiError> {
    let state_id: StateId = parse_id(&state_id, "State")?;
    let city = state.city_service.create_city(state_id, payload).await?;
    Ok(CreateResponse::Created(Json(city)))
}

/// `PUT /api/v1/cities/{city_id}`
pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(city_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<GetResponse<City>, ApiError> {
    let payload = Payload::require(payload)?;
    let city_id: CityId = parse_id(&city_id, "City")?;
    let city = state
        .city_service
        .update_city(city_id, Some(payload))
        .await?;
    Ok(GetResponse::Ok(Json(city)))
}

/// `DELETE /api/v1/cities/{city_id}`
pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(city_id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let city_id: CityId = parse_id(&city_id, "City")?;
    state.city_service.delete_city(city_id).await?;
    Ok(DeleteResponse::Ok)
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn should_create_and_list_cities_of_a_state() {
        let app = TestApp::new();
        let state_id = app.create("/api/v1/states", json!({"name": "California"})).await;

        let (status, body) = app
            .post(
                &format!("/api/v1/states/{state_id}/cities"),
                json!({"name": "San Francisco"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["__class__"], "City");
        assert_eq!(body["state_id"], state_id.as_str());
        let city_id = body["id"].as_str().unwrap().to_string();

        let (status, body) = app.get(&format!("/api/v1/states/{state_id}/cities")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], city_id.as_str());
    }

    #[tokio::test]
    async fn should_report_missing_state_before_bad_body() {
        let app = TestApp::new();
        let unknown = "00000000-0000-4000-8000-000000000000";
        let (status, _) = app
            .raw(
                "POST",
                &format!("/api/v1/states/{unknown}/cities"),
                "text/plain",
                "x",
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app.get(&format!("/api/v1/states/{unknown}/cities")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_city_without_name() {
        let app = TestApp::new();
        let state_id = app.create("/api/v1/states", json!({"name": "Texas"})).await;
        let (status, body) = app
            .post(&format!("/api/v1/states/{state_id}/cities"), json!({"zip": 1}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing name");
    }

    #[tokio::test]
    async fn should_update_and_delete_city() {
        let app = TestApp::new();
        let state_id = app.create("/api/v1/states", json!({"name": "Texas"})).await;
        let city_id = app
            .create(
                &format!("/api/v1/states/{state_id}/cities"),
                json!({"name": "Austin"}),
            )
            .await;

        let (status, body) = app
            .put(
                &format!("/api/v1/cities/{city_id}"),
                json!({"name": "Dallas", "state_id": "ignored"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Dallas");
        assert_eq!(body["state_id"], state_id.as_str());

        let (status, body) = app.delete(&format!("/api/v1/cities/{city_id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
        let (status, _) = app.get(&format!("/api/v1/cities/{city_id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_remove_cities_with_their_state() {
        let app = TestApp::new();
        let state_id = app.create("/api/v1/states", json!({"name": "Utah"})).await;
        let city_id = app
            .create(
                &format!("/api/v1/states/{state_id}/cities"),
                json!({"name": "Provo"}),
            )
            .await;

        app.delete(&format!("/api/v1/states/{state_id}")).await;

        let (status, _) = app.get(&format!("/api/v1/cities/{city_id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
