//! Error conversions - transport integrations for [`AppError`].

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details, plus a machine-readable `code`
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "code": self.code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_into_response_problem_document() {
        let response = AppError::conflict("Limit exceeded")
            .with_code("LIMIT_EXCEEDED_UNIDENTIFIED")
            .into_response();
        assert_eq!(response.status().as_u16(), 409);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 409);
        assert_eq!(body["title"], "Conflict");
        assert_eq!(body["code"], "LIMIT_EXCEEDED_UNIDENTIFIED");
        assert_eq!(body["detail"], "Limit exceeded");
    }

    #[test]
    fn test_server_error_status() {
        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status().as_u16(), 500);
    }
}
