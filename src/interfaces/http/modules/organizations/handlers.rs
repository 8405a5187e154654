//! Organization registry handlers
//!
//! Public endpoints. Delegates to `PartyRegistry`.

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{OrganizationDto, RegisterOrganizationRequest};
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::state::HubState;

#[utoipa::path(
    post,
    path = "/organizations/register",
    tag = "Organizations",
    request_body = RegisterOrganizationRequest,
    responses(
        (status = 200, description = "Organization registered", body = OrganizationDto),
        (status = 400, description = "Party already registered", body = ApiResponse<String>),
        (status = 422, description = "Validation error", body = ApiResponse<String>)
    )
)]
pub async fn register_organization(
    State(state): State<HubState>,
    ValidatedJson(body): ValidatedJson<RegisterOrganizationRequest>,
) -> Result<Json<OrganizationDto>, ApiError> {
    // The plaintext token stays in-process; it is never part of this response.
    let registration = state.registry.register(body.into()).await?;
    Ok(Json(registration.organization.into()))
}

#[utoipa::path(
    get,
    path = "/organizations",
    tag = "Organizations",
    responses(
        (status = 200, description = "All organizations in registration order", body = Vec<OrganizationDto>)
    )
)]
pub async fn list_organizations(
    State(state): State<HubState>,
) -> Result<Json<Vec<OrganizationDto>>, ApiError> {
    let orgs = state.registry.list().await?;
    Ok(Json(orgs.into_iter().map(OrganizationDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/organizations/{id}",
    tag = "Organizations",
    params(("id" = String, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization", body = OrganizationDto),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_organization(
    State(state): State<HubState>,
    Path(id): Path<String>,
) -> Result<Json<OrganizationDto>, ApiError> {
    let org = state.registry.get(&id).await?;
    Ok(Json(org.into()))
}
