//! Response bodies

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::PageRequest;
use crate::shared::Paged;

/// OCPI status code for a generic success.
pub const OCPI_SUCCESS: u32 = 1000;

/// Standard API wrapper for non-OCPI endpoints and for every error.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload, `null` on error
    pub data: Option<T>,
    /// Error description, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// OCPI response envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OcpiResponse<T> {
    pub data: T,
    /// 1000 on success
    pub status_code: u32,
    pub status_message: String,
    /// RFC 3339, UTC
    pub timestamp: DateTime<Utc>,
}

impl<T> OcpiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data,
            status_code: OCPI_SUCCESS,
            status_message: "Success".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// `?offset=&limit=` on OCPI list endpoints.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Items to skip. Default 0
    pub offset: Option<u64>,
    /// Page size, capped by the hub. Default 50
    pub limit: Option<u64>,
}

impl From<PaginationParams> for PageRequest {
    fn from(p: PaginationParams) -> Self {
        PageRequest {
            offset: p.offset,
            limit: p.limit,
        }
    }
}

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const LIMIT_HEADER: &str = "x-limit";

/// Envelope a page of results and attach the OCPI pagination headers.
pub fn paged_response<T: Serialize>(paged: Paged<T>) -> Response {
    let mut response = Json(OcpiResponse::success(paged.items)).into_response();
    let headers = response.headers_mut();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(paged.total));
    headers.insert(LIMIT_HEADER, HeaderValue::from(paged.limit));
    response
}
