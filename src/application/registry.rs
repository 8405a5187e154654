//! Party registry — owns organization identity and token minting
//!
//! HTTP handlers and the CLI are thin wrappers that delegate here.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::organization::model::{is_valid_country_code, is_valid_party_id};
use crate::domain::{
    DomainError, DomainResult, NewOrganization, Organization, RepositoryProvider, Role,
};
use crate::infrastructure::crypto::{hash_token, mint_token};
use crate::shared::errors::AuthFailure;

/// Everything a party supplies to join the hub.
#[derive(Debug, Clone)]
pub struct RegisterParty {
    pub name: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub country_code: String,
    pub party_id: String,
    pub role: Role,
    pub business_details: Option<serde_json::Value>,
}

/// Result of a successful registration. `token` is the only copy of the
/// plaintext credential; the store keeps its digest.
pub struct Registration {
    pub organization: Organization,
    pub token: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("organization", &self.organization)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct PartyRegistry {
    repos: Arc<dyn RepositoryProvider>,
}

impl PartyRegistry {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Register a party and mint its bearer token.
    ///
    /// Uniqueness of (country_code, party_id) is decided by the store in the
    /// same step as the insert; a clash yields [`DomainError::DuplicateParty`].
    pub async fn register(&self, req: RegisterParty) -> DomainResult<Registration> {
        if req.name.trim().is_empty() {
            return Err(DomainError::Validation("name must not be empty".into()));
        }
        if !is_valid_country_code(&req.country_code) {
            return Err(DomainError::Validation(format!(
                "invalid country_code '{}'",
                req.country_code
            )));
        }
        if !is_valid_party_id(&req.party_id) {
            return Err(DomainError::Validation(format!(
                "invalid party_id '{}'",
                req.party_id
            )));
        }

        let token = mint_token();
        let now = Utc::now();
        let organization = Organization {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            website: req.website,
            logo: req.logo,
            country_code: req.country_code,
            party_id: req.party_id,
            role: req.role,
            business_details: req.business_details,
            created_at: now,
            updated_at: now,
        };

        let result = self
            .repos
            .organizations()
            .insert(NewOrganization {
                organization,
                api_token_hash: hash_token(&token),
            })
            .await;

        match result {
            Ok(organization) => {
                metrics::counter!("ocpi_registrations_total", "role" => organization.role.as_str())
                    .increment(1);
                info!(
                    org_id = %organization.id,
                    country_code = %organization.country_code,
                    party_id = %organization.party_id,
                    role = %organization.role,
                    "Organization registered"
                );
                Ok(Registration {
                    organization,
                    token,
                })
            }
            Err(e @ DomainError::DuplicateParty { .. }) => {
                warn!("Registration rejected: {}", e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve a presented token to its organization.
    pub async fn lookup_by_token(&self, token: &str) -> DomainResult<Organization> {
        self.repos
            .organizations()
            .find_by_token_hash(&hash_token(token))
            .await?
            .ok_or(DomainError::Auth(AuthFailure::InvalidToken))
    }

    /// All organizations in registration order.
    pub async fn list(&self) -> DomainResult<Vec<Organization>> {
        self.repos.organizations().find_all().await
    }

    pub async fn get(&self, id: &str) -> DomainResult<Organization> {
        self.repos
            .organizations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Organization", "id", id))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::request;
    use super::*;
    use crate::infrastructure::InMemoryStorage;

    fn registry() -> PartyRegistry {
        PartyRegistry::new(Arc::new(InMemoryStorage::new()))
    }

    #[tokio::test]
    async fn register_mints_a_token_that_resolves() {
        let registry = registry();
        let reg = registry.register(request("TR", "EPS", Role::Cpo)).await.unwrap();

        assert_eq!(reg.token.len(), 43);
        let found = registry.lookup_by_token(&reg.token).await.unwrap();
        assert_eq!(found.id, reg.organization.id);
        assert_eq!(found.role, Role::Cpo);
    }

    #[tokio::test]
    async fn duplicate_party_fails() {
        let registry = registry();
        registry.register(request("TR", "EPS", Role::Cpo)).await.unwrap();
        let err = registry
            .register(request("TR", "EPS", Role::Emsp))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateParty { .. }));
        assert_eq!(registry.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_party_id_in_other_country_is_distinct() {
        let registry = registry();
        registry.register(request("TR", "EPS", Role::Cpo)).await.unwrap();
        registry.register(request("DE", "EPS", Role::Cpo)).await.unwrap();
        assert_eq!(registry.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn malformed_identity_rejected() {
        let registry = registry();
        let err = registry
            .register(request("tr", "EPS", Role::Cpo))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let err = registry
            .register(request("TR", "EP", Role::Cpo))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let registry = registry();
        registry.register(request("TR", "EPS", Role::Cpo)).await.unwrap();
        let err = registry.lookup_by_token("not-a-token").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthFailure::InvalidToken)));
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let registry = registry();
        assert!(matches!(
            registry.get("missing").await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn list_keeps_registration_order() {
        let registry = registry();
        for pid in ["CCC", "AAA", "BBB"] {
            registry.register(request("NL", pid, Role::Emsp)).await.unwrap();
        }
        let pids: Vec<_> = registry
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.party_id)
            .collect();
        assert_eq!(pids, vec!["CCC", "AAA", "BBB"]);
    }

    #[test]
    fn registration_debug_hides_token() {
        let now = Utc::now();
        let reg = Registration {
            organization: Organization {
                id: "x".into(),
                name: "x".into(),
                website: None,
                logo: None,
                country_code: "TR".into(),
                party_id: "EPS".into(),
                role: Role::Cpo,
                business_details: None,
                created_at: now,
                updated_at: now,
            },
            token: "secret-token-value".into(),
        };
        assert!(!format!("{:?}", reg).contains("secret-token-value"));
    }
}
