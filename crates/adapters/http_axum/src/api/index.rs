//! Service status and object counts.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hbnb_app::ports::Repositories;
use hbnb_app::services::stats_service::Stats;

use crate::error::ApiError;
use crate::state::AppState;

use super::GetResponse;

#[derive(Serialize)]
pub struct StatusBody {
    status: &'static str,
}

/// Object counts keyed by collection name.
#[derive(Serialize)]
pub struct StatsBody {
    amenities: usize,
    cities: usize,
    places: usize,
    reviews: usize,
    states: usize,
    users: usize,
}

impl From<Stats> for StatsBody {
    fn from(stats: Stats) -> Self {
        Self {
            amenities: stats.amenities,
            cities: stats.cities,
            places: stats.places,
            reviews: stats.reviews,
            states: stats.states,
            users: stats.users,
        }
    }
}

/// `GET /api/v1/status`
pub async fn status() -> GetResponse<StatusBody> {
    GetResponse::Ok(Json(StatusBody { status: "OK" }))
}

/// `GET /api/v1/stats`
pub async fn stats<R: Repositories>(
    State(state): State<AppState<R>>,
) -> Result<GetResponse<StatsBody>, ApiError> {
    let stats = state.stats_service.stats().await?;
    Ok(GetResponse::Ok(Json(stats.into())))
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn should_report_ok_status() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/v1/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "OK"}));
    }

    #[tokio::test]
    async fn should_count_objects_per_collection() {
        let app = TestApp::new();
        app.post("/api/v1/states", json!({"name": "Ohio"})).await;
        app.post("/api/v1/amenities", json!({"name": "Wifi"})).await;
        app.post("/api/v1/amenities", json!({"name": "Pool"})).await;

        let (status, body) = app.get("/api/v1/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "amenities": 2,
                "cities": 0,
                "places": 0,
                "reviews": 0,
                "states": 1,
                "users": 0
            })
        );
    }
}
