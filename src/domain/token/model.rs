//! Token domain entities (OCPI 2.3.0 Tokens module)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    AdHocUser,
    AppUser,
    Other,
    Rfid,
}

/// OCPI Token object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub country_code: String,
    pub party_id: String,
    pub uid: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub contract_id: String,
    pub visual_number: Option<String>,
    pub issuer: String,
    pub group_id: Option<String>,
    pub valid: bool,
    pub whitelist: String,
    pub language: Option<String>,
    pub default_profile_type: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub energy_contract: Option<serde_json::Value>,
    pub last_updated: DateTime<Utc>,
}

impl Token {
    /// Whether the token may currently authorize a charge.
    pub fn is_usable(&self) -> bool {
        self.valid && self.whitelist != "NEVER"
    }
}

/// A token with the eMSP organization that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredToken {
    pub emsp_id: String,
    pub token: Token,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn token(uid: &str, valid: bool) -> Token {
        Token {
            country_code: "DE".to_string(),
            party_id: "MSP".to_string(),
            uid: uid.to_string(),
            token_type: TokenType::Rfid,
            contract_id: format!("DE-MSP-{}", uid),
            visual_number: None,
            issuer: "Mobility Co".to_string(),
            group_id: None,
            valid,
            whitelist: "ALLOWED".to_string(),
            language: Some("de".to_string()),
            default_profile_type: None,
            energy_contract: None,
            last_updated: Utc::now(),
        }
    }
}
