//! Validated query-string extractor
//!
//! The query-string counterpart of [`super::ValidatedJson`]: a parameter that
//! does not parse, or fails its validation rules, is a 422 rendered as
//! `ApiResponse::error`, never axum's plain-text rejection.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;

pub struct ValidatedQuery<T>(pub T);

pub enum ValidatedQueryRejection {
    QueryError(QueryRejection),
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::QueryError(rejection) => {
                format!("Invalid query parameters: {}", rejection.body_text())
            }
            Self::ValidationError(errors) => format!("Invalid query parameters: {}", errors),
        };
        let body = ApiResponse::<()>::error(message);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedQueryRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Window {
        offset: Option<u64>,
        #[validate(range(min = 1))]
        limit: Option<u64>,
    }

    async fn handler(ValidatedQuery(w): ValidatedQuery<Window>) -> String {
        format!("{:?}/{:?}", w.offset, w.limit)
    }

    async fn send(uri: &str) -> (StatusCode, serde_json::Value) {
        use tower::Service;
        let mut svc = Router::new().route("/q", get(handler)).into_service();
        let resp = svc
            .call(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn well_formed_query_passes() {
        let (status, _) = send("/q?offset=3&limit=2").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send("/q").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unparseable_number_is_structured_422() {
        let (status, body) = send("/q?limit=-1").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("limit"));
    }

    #[tokio::test]
    async fn failed_rule_is_422() {
        let (status, body) = send("/q?limit=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
    }
}
