//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub weather: ServiceStatus,
    pub inference: ServiceStatus,
}

/// Status of a backing service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
}

/// Readiness check - is the server ready to accept requests?
///
/// The weather provider gates readiness; inference is reported but optional
/// since the dashboard degrades gracefully without styled descriptions.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let (weather_healthy, inference_healthy) = tokio::join!(
        state.weather_service.is_available(),
        state.condition_stylist.is_healthy()
    );

    let ready = weather_healthy;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            weather: ServiceStatus {
                healthy: weather_healthy,
            },
            inference: ServiceStatus {
                healthy: inference_healthy,
            },
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_returns_ok() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
    }

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("status"));
        assert!(json.contains("ok"));
    }

    #[test]
    fn readiness_response_serialization() {
        let resp = ReadinessResponse {
            ready: true,
            weather: ServiceStatus { healthy: true },
            inference: ServiceStatus { healthy: false },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"ready\":true"));
        assert!(json.contains("weather"));
        assert!(json.contains("inference"));
    }

    #[test]
    fn readiness_response_deserialization() {
        let json = r#"{"ready":false,"weather":{"healthy":false},"inference":{"healthy":true}}"#;
        let resp: ReadinessResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.ready);
        assert!(!resp.weather.healthy);
        assert!(resp.inference.healthy);
    }
}
