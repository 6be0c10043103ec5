//! JSON REST handlers for reviews, nested under their place.

use axum::Json;
use axum::extract::{Path, State};

use hbnb_app::ports::Repositories;
use hbnb_domain::id::{PlaceId, ReviewId};
use hbnb_domain::review::Review;

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse, parse_id};
use crate::body::JsonBody;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/v1/places/{place_id}/reviews`
pub async fn list<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse<Review>, ApiError> {
    let place_id: PlaceId = parse_id(&place_id, "Place")?;
    let reviews = state.review_service.list_reviews(place_id).await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `GET /api/v1/reviews/{review_id}`
pub async fn get<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(review_id): Path<String>,
) -> Result<GetResponse<Review>, ApiError> {
    let review_id: ReviewId = parse_id(&review_id, "Review")?;
    let review = state.review_service.get_review(review_id).await?;
    Ok(GetResponse::Ok(Json(review)))
}

/// `POST /api/v1/places/{place_id}/reviews`
pub async fn create<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(place_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<CreateResponse<Review>, ApiError> {
    let place_id: PlaceId = parse_id(&place_id, "Place")?;
    let review = state.review_service.create_review(place_id, payload).await?;
    Ok(CreateResponse::Created(Json(review)))
}

/// `PUT /api/v1/reviews/{review_id}`
///
/// The review is looked up before the body is inspected.
pub async fn update<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(review_id): Path<String>,
    JsonBody(payload): JsonBody,
) -> Result<GetResponse<Review>, ApiError> {
    let review_id: ReviewId = parse_id(&review_id, "Review")?;
    let review = state
        .review_service
        .update_review(review_id, payload)
        .await?;
    Ok(GetResponse::Ok(Json(review)))
}

/// `DELETE /api/v1/reviews/{review_id}`
pub async fn delete<R: Repositories>(
    State(state): State<AppState<R>>,
    Path(review_id): Path<String>,
) -> Result<DeleteResponse, ApiError> {
    let review_id: ReviewId = parse_id(&review_id, "Review")?;
    state.review_service.delete_review(review_id).await?;
    Ok(DeleteResponse::Ok)
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    async fn place_and_user(app: &TestApp) -> (String, String) {
        let state_id = app.create("/api/v1/states", json!({"name": "Maine"})).await;
        let city_id = app
            .create(
                &format!("/api/v1/states/{state_id}/cities"),
                json!({"name": "Portland"}),
            )
            .await;
        let user_id = app
            .create(
                "/api/v1/users",
                json!({"email": "guest@hbnb.io", "password": "pwd"}),
            )
            .await;
        let place_id = app
            .create(
                &format!("/api/v1/cities/{city_id}/places"),
                json!({"user_id": user_id, "name": "Barn"}),
            )
            .await;
        (place_id, user_id)
    }

    #[tokio::test]
    async fn should_complete_review_crud_cycle() {
        let app = TestApp::new();
        let (place_id, user_id) = place_and_user(&app).await;

        let (status, body) = app
            .post(
                &format!("/api/v1/places/{place_id}/reviews"),
                json!({"user_id": user_id, "text": "Lovely"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["__class__"], "Review");
        assert_eq!(body["place_id"], place_id.as_str());
        let id = body["id"].as_str().unwrap().to_string();

        let (_, body) = app.get(&format!("/api/v1/places/{place_id}/reviews")).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = app
            .put(&format!("/api/v1/reviews/{id}"), json!({"text": "Cosy"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "Cosy");

        let (status, _) = app.delete(&format!("/api/v1/reviews/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = app.get(&format!("/api/v1/reviews/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_check_review_creation_in_order() {
        let app = TestApp::new();
        let (place_id, user_id) = place_and_user(&app).await;
        let uri = format!("/api/v1/places/{place_id}/reviews");

        let (status, body) = app.raw("POST", &uri, "application/json", "[]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Not a JSON");

        let (status, body) = app.post(&uri, json!({"text": "Nice"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing user_id");

        let (status, body) = app.post(&uri, json!({"user_id": user_id})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing text");
    }

    #[tokio::test]
    async fn should_report_unknown_review_before_bad_body() {
        let app = TestApp::new();
        let (status, _) = app
            .raw(
                "PUT",
                "/api/v1/reviews/00000000-0000-4000-8000-000000000000",
                "text/plain",
                "x",
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
