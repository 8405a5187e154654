//! Sessions handlers

use axum::extract::State;
use axum::response::Response;

use crate::domain::Session;
use crate::interfaces::http::common::{
    paged_response, ApiError, ApiResponse, BearerHeader, OcpiResponse, PaginationParams,
    ValidatedQuery,
};
use crate::interfaces::http::state::HubState;

/// CPOs see sessions at their locations, eMSPs the sessions of their drivers.
#[utoipa::path(
    get,
    path = "/ocpi/2.3.0/sessions",
    tag = "Sessions",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of sessions visible to the caller", body = OcpiResponse<Vec<Session>>),
        (status = 401, description = "Missing or unknown token", body = ApiResponse<String>),
        (status = 403, description = "Role may not read sessions", body = ApiResponse<String>),
        (status = 422, description = "Malformed offset or limit", body = ApiResponse<String>)
    )
)]
pub async fn list_sessions(
    State(state): State<HubState>,
    bearer: BearerHeader,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Response, ApiError> {
    let party = state.authenticator.authenticate(bearer.as_deref()).await?;
    let page = state.resources.list_sessions(&party, params.into()).await?;
    Ok(paged_response(page))
}
