//! Maps core and binding errors onto HTTP responses.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use credit_calculator_core::CreditError;
use tracing::error;

/// Body sent for failures the caller cannot act on. Detail stays in the log.
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Errors a handler can answer with.
///
/// Validation failures and unbindable query strings answer 400 with a JSON
/// array of messages, in field order. Anything else answers 500 with a
/// single opaque message.
pub enum ApiError {
    Core(CreditError),
    Query(QueryRejection),
}

impl From<CreditError> for ApiError {
    fn from(err: CreditError) -> Self {
        ApiError::Core(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Query(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(CreditError::Validation(violations)) => {
                let messages: Vec<String> =
                    violations.into_iter().map(|v| v.message).collect();
                (StatusCode::BAD_REQUEST, Json(messages)).into_response()
            }
            ApiError::Core(CreditError::Internal(detail)) => {
                error!(%detail, "schedule computation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(vec![INTERNAL_ERROR_MESSAGE.to_string()]),
                )
                    .into_response()
            }
            ApiError::Query(rejection) => {
                (StatusCode::BAD_REQUEST, Json(vec![rejection.body_text()])).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use credit_calculator_core::Violation;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_every_message() {
        let err = ApiError::Core(CreditError::Validation(vec![
            Violation {
                field: "principal".into(),
                message: "principal is required".into(),
            },
            Violation {
                field: "term_months".into(),
                message: "term_months cannot be less than 12".into(),
            },
        ]));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!(["principal is required", "term_months cannot be less than 12"])
        );
    }

    #[tokio::test]
    async fn test_internal_maps_to_500_with_opaque_message() {
        let err = ApiError::Core(CreditError::Internal("annuity factor is zero".into()));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!(["internal server error"])
        );
    }
}
