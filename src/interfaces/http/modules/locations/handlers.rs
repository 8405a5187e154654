//! Locations handlers

use axum::extract::State;
use axum::response::Response;
use axum::Json;

use crate::domain::Location;
use crate::interfaces::http::common::{
    paged_response, ApiError, ApiResponse, BearerHeader, OcpiResponse, PaginationParams,
    ValidatedJson, ValidatedQuery,
};
use crate::interfaces::http::state::HubState;

#[utoipa::path(
    get,
    path = "/ocpi/2.3.0/locations",
    tag = "Locations",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of locations; X-Total-Count and X-Limit headers set", body = OcpiResponse<Vec<Location>>),
        (status = 401, description = "Missing or unknown token", body = ApiResponse<String>),
        (status = 403, description = "Role may not read locations", body = ApiResponse<String>),
        (status = 422, description = "Malformed offset or limit", body = ApiResponse<String>)
    )
)]
pub async fn list_locations(
    State(state): State<HubState>,
    bearer: BearerHeader,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Response, ApiError> {
    let party = state.authenticator.authenticate(bearer.as_deref()).await?;
    let page = state.resources.list_locations(&party, params.into()).await?;
    Ok(paged_response(page))
}

#[utoipa::path(
    post,
    path = "/ocpi/2.3.0/locations",
    tag = "Locations",
    security(("bearer_auth" = [])),
    request_body = Location,
    responses(
        (status = 200, description = "Stored location echoed", body = OcpiResponse<Location>),
        (status = 401, description = "Missing or unknown token", body = ApiResponse<String>),
        (status = 403, description = "Not a CPO, or not the caller's party", body = ApiResponse<String>),
        (status = 422, description = "Malformed location", body = ApiResponse<String>)
    )
)]
pub async fn put_location(
    State(state): State<HubState>,
    bearer: BearerHeader,
    ValidatedJson(location): ValidatedJson<Location>,
) -> Result<Json<OcpiResponse<Location>>, ApiError> {
    let party = state.authenticator.authenticate(bearer.as_deref()).await?;
    let stored = state.resources.put_location(&party, location).await?;
    Ok(Json(OcpiResponse::success(stored)))
}
