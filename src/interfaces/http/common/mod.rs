//! Shared HTTP plumbing: response envelopes, error mapping, extractors

pub mod bearer;
pub mod error;
pub mod response;
pub mod validated_json;
pub mod validated_query;

pub use bearer::BearerHeader;
pub use error::ApiError;
pub use response::{paged_response, ApiResponse, OcpiResponse, PaginationParams};
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
