//! Organization domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OCPI party role. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Cpo,
    Emsp,
    Hub,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpo => "CPO",
            Self::Emsp => "EMSP",
            Self::Hub => "HUB",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CPO" => Ok(Self::Cpo),
            "EMSP" => Ok(Self::Emsp),
            "HUB" => Ok(Self::Hub),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Registered party. Carries no token material.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    /// ISO 3166-1 alpha-2
    pub country_code: String,
    pub party_id: String,
    pub role: Role,
    pub business_details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for the registry. `api_token_hash` is the SHA-256 digest
/// of the minted token; the plaintext is never stored.
#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub organization: Organization,
    pub api_token_hash: String,
}

/// Two upper-case ASCII letters.
pub fn is_valid_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Three upper-case ASCII letters or digits.
pub fn is_valid_party_id(party_id: &str) -> bool {
    party_id.len() == 3
        && party_id
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
