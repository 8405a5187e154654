//! Tokens handlers

use axum::extract::State;
use axum::response::Response;

use crate::domain::Token;
use crate::interfaces::http::common::{
    paged_response, ApiError, ApiResponse, BearerHeader, OcpiResponse, PaginationParams,
    ValidatedQuery,
};
use crate::interfaces::http::state::HubState;

#[utoipa::path(
    get,
    path = "/ocpi/2.3.0/tokens",
    tag = "Tokens",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of tokens issued by the calling eMSP", body = OcpiResponse<Vec<Token>>),
        (status = 401, description = "Missing or unknown token", body = ApiResponse<String>),
        (status = 403, description = "Only eMSPs may read tokens", body = ApiResponse<String>),
        (status = 422, description = "Malformed offset or limit", body = ApiResponse<String>)
    )
)]
pub async fn list_tokens(
    State(state): State<HubState>,
    bearer: BearerHeader,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Response, ApiError> {
    let party = state.authenticator.authenticate(bearer.as_deref()).await?;
    let page = state.resources.list_tokens(&party, params.into()).await?;
    Ok(paged_response(page))
}
