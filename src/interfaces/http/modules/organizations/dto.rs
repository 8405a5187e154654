//! Organization DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::RegisterParty;
use crate::domain::location::model::{validate_country_code, validate_party_id};
use crate::domain::{Organization, Role};

pub(crate) fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(u) if matches!(u.scheme(), "http" | "https") && u.has_host() => Ok(()),
        _ => {
            let mut err = ValidationError::new("url");
            err.message = Some("must be an absolute http(s) URL".into());
            Err(err)
        }
    }
}

fn validate_object(value: &serde_json::Value) -> Result<(), ValidationError> {
    if value.is_object() {
        Ok(())
    } else {
        let mut err = ValidationError::new("business_details");
        err.message = Some("must be a JSON object".into());
        Err(err)
    }
}

/// Organization as listed by the directory. Never carries the token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizationDto {
    pub id: String,
    pub name: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub country_code: String,
    pub party_id: String,
    pub role: Role,
    #[schema(value_type = Option<Object>)]
    pub business_details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationDto {
    fn from(o: Organization) -> Self {
        Self {
            id: o.id,
            name: o.name,
            website: o.website,
            logo: o.logo,
            country_code: o.country_code,
            party_id: o.party_id,
            role: o.role,
            business_details: o.business_details,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// Register organization request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterOrganizationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(custom(function = "validate_http_url"))]
    pub website: Option<String>,
    #[validate(custom(function = "validate_http_url"))]
    pub logo: Option<String>,
    /// ISO 3166-1 alpha-2, upper case
    #[validate(custom(function = "validate_country_code"))]
    pub country_code: String,
    /// Three upper-case letters or digits
    #[validate(custom(function = "validate_party_id"))]
    pub party_id: String,
    pub role: Role,
    #[validate(custom(function = "validate_object"))]
    #[schema(value_type = Option<Object>)]
    pub business_details: Option<serde_json::Value>,
}

impl From<RegisterOrganizationRequest> for RegisterParty {
    fn from(r: RegisterOrganizationRequest) -> Self {
        RegisterParty {
            name: r.name,
            website: r.website,
            logo: r.logo,
            country_code: r.country_code,
            party_id: r.party_id,
            role: r.role,
            business_details: r.business_details,
        }
    }
}
