use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Health check endpoint response structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Test endpoint response structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/health
///
/// Liveness stub: always reports "healthy", no dependency is checked.
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /api/test
pub async fn api_test() -> impl IntoResponse {
    let response = MessageResponse {
        message: "Backend API is working".to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_test() {
        let response = api_test().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_payload_shapes() {
        let health = serde_json::to_string(&HealthResponse {
            status: "healthy".to_string(),
        })
        .unwrap();
        assert_eq!(health, r#"{"status":"healthy"}"#);

        let message = serde_json::to_string(&MessageResponse {
            message: "Backend API is working".to_string(),
        })
        .unwrap();
        assert_eq!(message, r#"{"message":"Backend API is working"}"#);
    }
}
