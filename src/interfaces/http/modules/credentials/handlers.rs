//! Credentials handlers
//!
//! Body extraction runs before authentication; a malformed body is a 422
//! whatever the token.

use axum::extract::State;
use axum::Json;

use super::dto::CredentialsDto;
use crate::interfaces::http::common::{ApiError, ApiResponse, BearerHeader, OcpiResponse, ValidatedJson};
use crate::interfaces::http::state::HubState;

#[utoipa::path(
    get,
    path = "/ocpi/2.3.0/credentials",
    tag = "Credentials",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The hub's credentials for the caller", body = OcpiResponse<CredentialsDto>),
        (status = 401, description = "Missing or unknown token", body = ApiResponse<String>),
        (status = 403, description = "Role may not use this module", body = ApiResponse<String>)
    )
)]
pub async fn get_credentials(
    State(state): State<HubState>,
    bearer: BearerHeader,
) -> Result<Json<OcpiResponse<CredentialsDto>>, ApiError> {
    let party = state.authenticator.authenticate(bearer.as_deref()).await?;
    let own = state.handshake.issue_own_credentials(&party)?;
    Ok(Json(OcpiResponse::success(own.into())))
}

#[utoipa::path(
    post,
    path = "/ocpi/2.3.0/credentials",
    tag = "Credentials",
    security(("bearer_auth" = [])),
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Partner credentials recorded", body = OcpiResponse<CredentialsDto>),
        (status = 401, description = "Missing or unknown token", body = ApiResponse<String>),
        (status = 403, description = "Role may not use this module", body = ApiResponse<String>),
        (status = 422, description = "Malformed credentials object", body = ApiResponse<String>)
    )
)]
pub async fn post_credentials(
    State(state): State<HubState>,
    bearer: BearerHeader,
    ValidatedJson(body): ValidatedJson<CredentialsDto>,
) -> Result<Json<OcpiResponse<CredentialsDto>>, ApiError> {
    let party = state.authenticator.authenticate(bearer.as_deref()).await?;
    let accepted = state
        .handshake
        .accept_partner_credentials(&party, body.into())
        .await?;
    Ok(Json(OcpiResponse::success(accepted.into())))
}
