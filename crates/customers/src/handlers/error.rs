use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use customers_core::storage::{repository_error_to_status_code, RepositoryError};
use serde::de::DeserializeOwned;
use serde_json::json;

/// A request body that could not be decoded into the expected shape.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BadRequest(pub String);

/// Handler error that wraps `anyhow::Error`.
///
/// The status code comes from the wrapped error: repository errors use
/// [`repository_error_to_status_code`], [`BadRequest`] is a 400 and anything
/// else is a 500. The body is always `{"error": "<message>"}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.is::<BadRequest>() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Decodes a JSON request body.
///
/// Content-Type is not checked; only the body itself has to be well-formed
/// JSON of the expected shape.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, BadRequest> {
    serde_json::from_slice(body).map_err(|e| BadRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_404() {
        let err = AppError::from(RepositoryError::NotFound {
            entity_type: "Customer",
            id: "3".to_string(),
        });

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Customer not found: 3");
    }

    #[tokio::test]
    async fn test_query_failed_renders_500() {
        let err = AppError::from(RepositoryError::QueryFailed("disk I/O error".to_string()));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Query failed: disk I/O error");
    }

    #[tokio::test]
    async fn test_bad_request_renders_400() {
        let err = AppError::from(BadRequest("expected value".to_string()));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "expected value");
    }

    #[tokio::test]
    async fn test_other_errors_render_500() {
        let (status, _) = render(AppError::from(anyhow::anyhow!("boom"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_parse_json_body() {
        let value: serde_json::Value = parse_json_body(br#"{"a": 1}"#).unwrap();
        assert_eq!(value["a"], 1);

        assert!(parse_json_body::<serde_json::Value>(b"{not json").is_err());
        assert!(parse_json_body::<serde_json::Value>(b"").is_err());
    }
}
