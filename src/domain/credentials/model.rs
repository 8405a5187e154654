//! Credentials domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::organization::model::{is_valid_country_code, is_valid_party_id};
use crate::domain::organization::Role;

/// One role advertised inside a credentials object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialsRole {
    pub role: Role,
    #[serde(default = "empty_object")]
    pub business_details: serde_json::Value,
    pub party_id: String,
    pub country_code: String,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

/// OCPI credentials object: the token to use when calling `url`, and the
/// roles the sender plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialsPayload {
    pub token: String,
    pub url: String,
    pub roles: Vec<CredentialsRole>,
}

impl CredentialsPayload {
    /// Structural checks applied before a partner submission is recorded.
    pub fn check(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("token must not be empty".to_string());
        }

        match url::Url::parse(&self.url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") && u.has_host() => {}
            _ => return Err(format!("url '{}' is not an absolute http(s) URL", self.url)),
        }

        if self.roles.is_empty() {
            return Err("roles must not be empty".to_string());
        }

        for role in &self.roles {
            if !is_valid_country_code(&role.country_code) {
                return Err(format!("invalid country_code '{}'", role.country_code));
            }
            if !is_valid_party_id(&role.party_id) {
                return Err(format!("invalid party_id '{}'", role.party_id));
            }
        }

        Ok(())
    }
}

/// A partner's credentials submission, as recorded. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerCredential {
    /// Receipt sequence; strictly increasing across all appends.
    pub seq: i64,
    pub organization_id: String,
    pub credentials: CredentialsPayload,
    pub received_at: DateTime<Utc>,
}

/// Per-relationship handshake progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandshakeState {
    None,
    HandshakeReceived,
    /// Partner URL confirmed by the hub calling back. Not produced yet.
    Active,
}

impl HandshakeState {
    pub fn from_received_count(count: u64) -> Self {
        if count == 0 {
            Self::None
        } else {
            Self::HandshakeReceived
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CredentialsPayload {
        CredentialsPayload {
            token: "partner-token".to_string(),
            url: "https://partner.example.com/ocpi/versions".to_string(),
            roles: vec![CredentialsRole {
                role: Role::Emsp,
                business_details: serde_json::json!({"name": "Partner"}),
                party_id: "PRT".to_string(),
                country_code: "DE".to_string(),
            }],
        }
    }

    #[test]
    fn well_formed_payload_passes() {
        assert!(payload().check().is_ok());
    }

    #[test]
    fn blank_token_is_rejected() {
        let mut p = payload();
        p.token = "   ".to_string();
        assert!(p.check().unwrap_err().contains("token"));
    }

    #[test]
    fn relative_or_non_http_url_is_rejected() {
        let mut p = payload();
        p.url = "/ocpi/versions".to_string();
        assert!(p.check().is_err());
        p.url = "ftp://partner.example.com".to_string();
        assert!(p.check().is_err());
    }

    #[test]
    fn empty_roles_rejected() {
        let mut p = payload();
        p.roles.clear();
        assert!(p.check().unwrap_err().contains("roles"));
    }

    #[test]
    fn role_business_details_default_to_object() {
        let role: CredentialsRole = serde_json::from_value(serde_json::json!({
            "role": "CPO",
            "party_id": "EPS",
            "country_code": "TR"
        }))
        .unwrap();
        assert!(role.business_details.is_object());
    }

    #[test]
    fn handshake_state_from_count() {
        assert_eq!(HandshakeState::from_received_count(0), HandshakeState::None);
        assert_eq!(
            HandshakeState::from_received_count(3),
            HandshakeState::HandshakeReceived
        );
    }
}
