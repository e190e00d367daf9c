//! API error types with IntoResponse
//!
//! Errors become `{status: "error", message}` with the status chosen by
//! [`Operation`]. Driver details are logged, never returned.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::operation::Operation;
use crate::db::repos::StoreError;

/// Why a statement could not produce a result.
#[derive(Debug)]
pub enum Cause {
    Store(StoreError),
    Body(JsonRejection),
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No row matched (404)
    NotFound(Operation),

    /// Statement failed; status depends on the operation
    Failed { op: Operation, cause: Cause },
}

impl ApiError {
    pub fn store(op: Operation, e: StoreError) -> Self {
        Self::Failed {
            op,
            cause: Cause::Store(e),
        }
    }

    pub fn body(op: Operation, e: JsonRejection) -> Self {
        Self::Failed {
            op,
            cause: Cause::Body(e),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Failed { op, .. } => op.failure_status(),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound(op) => op.not_found_message(),
            Self::Failed { op, .. } => op.failure_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Failed { op, cause } = &self {
            match cause {
                Cause::Store(e) => tracing::error!(operation = ?op, "Database error: {}", e),
                Cause::Body(e) => tracing::warn!(operation = ?op, "Unreadable body: {}", e),
            }
        }

        let body = Json(json!({
            "status": "error",
            "message": self.message(),
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound(Operation::Get).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "error", "message": "No se encontro la tarea" })
        );
    }

    #[tokio::test]
    async fn list_query_failure_is_404() {
        let err = ApiError::store(Operation::List, StoreError::EmptyPatch);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn driver_detail_is_not_leaked() {
        let err = ApiError::store(
            Operation::Create,
            StoreError::Constraint("column 'title' cannot be null".into()),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "No se pudo crear la tarea");
        assert!(!body.to_string().contains("title"));
    }
}
