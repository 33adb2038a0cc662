//! Forecast save route.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use database::forecast_store;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to fetch and save a forecast.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Save confirmation.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub message: &'static str,
    pub id: i32,
}

/// Fetch the forecast for the requested city and store it under `name`.
pub async fn save_forecast(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SaveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Unparsable save request");
        ApiError::Validation("Invalid JSON")
    })?;

    let (name, city) = match (req.name.as_deref(), req.city.as_deref()) {
        (Some(name), Some(city)) if !name.is_empty() && !city.is_empty() => (name, city),
        _ => return Err(ApiError::Validation("name and city required")),
    };

    info!(name, city, "Save requested");

    let forecast = state.forecast.fetch(city).await?;
    let id = forecast_store::save_forecast(&state.db, name, city, &forecast).await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            message: "saved",
            id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::routes::router;
    use crate::routes::test_support::{json_body, test_state};

    async fn post(body: &'static str, base_url: &str) -> axum::http::Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri("/save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        router()
            .with_state(test_state(base_url))
            .oneshot(request)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let response = post("{not json", "http://127.0.0.1:1").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "Invalid JSON"})
        );
    }

    #[tokio::test]
    async fn test_missing_content_type_is_invalid_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/save")
            .body(Body::from(r#"{"name":"bob","city":"Oslo"}"#))
            .unwrap();

        let response = router()
            .with_state(test_state("http://127.0.0.1:1"))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "Invalid JSON"})
        );
    }

    #[tokio::test]
    async fn test_missing_city() {
        let response = post(r#"{"name":"bob"}"#, "http://127.0.0.1:1").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "name and city required"})
        );
    }

    #[tokio::test]
    async fn test_empty_name() {
        let response = post(r#"{"name":"","city":"London"}"#, "http://127.0.0.1:1").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "name and city required"})
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_json_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = post(r#"{"name":"bob","city":"London"}"#, &mock_server.uri()).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_storage_failure_is_json_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [],
                "city": {"name": "London", "country": "GB"}
            })))
            .mount(&mock_server)
            .await;

        // The test database points at a closed port.
        let response = post(r#"{"name":"bob","city":"London"}"#, &mock_server.uri()).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("connection error"));
    }
}
