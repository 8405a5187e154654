//! Credentials DTOs (OCPI 2.3.0 credentials object)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::location::model::{validate_country_code, validate_party_id};
use crate::domain::{CredentialsPayload, CredentialsRole, Role};
use crate::interfaces::http::modules::organizations::dto::validate_http_url;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CredentialsRoleDto {
    pub role: Role,
    #[serde(default = "empty_object")]
    #[schema(value_type = Object)]
    pub business_details: serde_json::Value,
    #[validate(custom(function = "validate_party_id"))]
    pub party_id: String,
    #[validate(custom(function = "validate_country_code"))]
    pub country_code: String,
}

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CredentialsDto {
    /// Token to present when calling `url`
    #[validate(length(min = 1))]
    pub token: String,
    /// Versions endpoint of the sender
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
    #[validate(length(min = 1), nested)]
    pub roles: Vec<CredentialsRoleDto>,
}

impl From<CredentialsDto> for CredentialsPayload {
    fn from(d: CredentialsDto) -> Self {
        CredentialsPayload {
            token: d.token,
            url: d.url,
            roles: d
                .roles
                .into_iter()
                .map(|r| CredentialsRole {
                    role: r.role,
                    business_details: r.business_details,
                    party_id: r.party_id,
                    country_code: r.country_code,
                })
                .collect(),
        }
    }
}

impl From<CredentialsPayload> for CredentialsDto {
    fn from(p: CredentialsPayload) -> Self {
        CredentialsDto {
            token: p.token,
            url: p.url,
            roles: p
                .roles
                .into_iter()
                .map(|r| CredentialsRoleDto {
                    role: r.role,
                    business_details: r.business_details,
                    party_id: r.party_id,
                    country_code: r.country_code,
                })
                .collect(),
        }
    }
}
