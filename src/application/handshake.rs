//! OCPI credentials handshake

use std::sync::Arc;

use tracing::info;

use super::auth::AuthenticatedParty;
use super::role_gate::{Module, Operation, RoleGate};
use crate::domain::{
    CredentialsPayload, CredentialsRole, DomainError, DomainResult, HandshakeState,
    RepositoryProvider,
};

/// OCPI version path the hub serves its modules under.
pub const OCPI_VERSION_PATH: &str = "/ocpi/2.3.0";

#[derive(Clone)]
pub struct CredentialsHandshake {
    repos: Arc<dyn RepositoryProvider>,
    credentials_url: String,
}

impl CredentialsHandshake {
    pub fn new(repos: Arc<dyn RepositoryProvider>, public_url: &str) -> Self {
        Self {
            repos,
            credentials_url: format!("{}{}", public_url.trim_end_matches('/'), OCPI_VERSION_PATH),
        }
    }

    /// The credentials object the caller should use against this hub.
    /// Repeated calls return the same token: the one the caller presented.
    pub fn issue_own_credentials(
        &self,
        party: &AuthenticatedParty,
    ) -> DomainResult<CredentialsPayload> {
        let org = &party.organization;
        RoleGate::authorize(org.role, Module::Credentials, Operation::Read)?;
        Ok(CredentialsPayload {
            token: party.token.expose().to_string(),
            url: self.credentials_url.clone(),
            roles: vec![CredentialsRole {
                role: org.role,
                business_details: org
                    .business_details
                    .clone()
                    .unwrap_or_else(|| serde_json::json!({})),
                party_id: org.party_id.clone(),
                country_code: org.country_code.clone(),
            }],
        })
    }

    /// Record a partner's credentials submission. Every call appends.
    pub async fn accept_partner_credentials(
        &self,
        party: &AuthenticatedParty,
        credentials: CredentialsPayload,
    ) -> DomainResult<CredentialsPayload> {
        RoleGate::authorize(party.organization.role, Module::Credentials, Operation::Write)?;
        credentials.check().map_err(DomainError::Validation)?;

        let record = self
            .repos
            .partner_credentials()
            .append(&party.organization.id, credentials)
            .await?;

        info!(
            org_id = %record.organization_id,
            seq = record.seq,
            partner_url = %record.credentials.url,
            "Partner credentials received"
        );
        Ok(record.credentials)
    }

    pub async fn handshake_state(&self, org_id: &str) -> DomainResult<HandshakeState> {
        let count = self
            .repos
            .partner_credentials()
            .count_for_organization(org_id)
            .await?;
        Ok(HandshakeState::from_received_count(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::auth::TokenAuthenticator;
    use crate::application::registry::fixtures::request;
    use crate::application::registry::PartyRegistry;
    use crate::domain::Role;
    use crate::infrastructure::InMemoryStorage;

    async fn setup(role: Role) -> (CredentialsHandshake, AuthenticatedParty, Arc<dyn RepositoryProvider>) {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryStorage::new());
        let registry = PartyRegistry::new(repos.clone());
        let reg = registry.register(request("TR", "EPS", role)).await.unwrap();
        let party = TokenAuthenticator::new(registry)
            .authenticate(Some(&format!("Bearer {}", reg.token)))
            .await
            .unwrap();
        let handshake = CredentialsHandshake::new(repos.clone(), "https://hub.example.com/");
        (handshake, party, repos)
    }

    fn partner(token: &str) -> CredentialsPayload {
        CredentialsPayload {
            token: token.to_string(),
            url: "https://partner.example.com/ocpi/versions".to_string(),
            roles: vec![CredentialsRole {
                role: Role::Emsp,
                business_details: serde_json::json!({"name": "Partner"}),
                party_id: "PRT".to_string(),
                country_code: "DE".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn own_credentials_are_idempotent() {
        let (handshake, party, _) = setup(Role::Cpo).await;
        let first = handshake.issue_own_credentials(&party).unwrap();
        let second = handshake.issue_own_credentials(&party).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.token, party.token.expose());
        assert_eq!(first.url, "https://hub.example.com/ocpi/2.3.0");
        assert_eq!(first.roles.len(), 1);
        assert_eq!(first.roles[0].role, Role::Cpo);
        assert_eq!(first.roles[0].country_code, "TR");
        assert_eq!(first.roles[0].party_id, "EPS");
    }

    #[tokio::test]
    async fn accepting_moves_state_to_received() {
        let (handshake, party, _) = setup(Role::Emsp).await;
        let org_id = party.organization.id.clone();
        assert_eq!(handshake.handshake_state(&org_id).await.unwrap(), HandshakeState::None);

        let ack = handshake
            .accept_partner_credentials(&party, partner("p-1"))
            .await
            .unwrap();
        assert_eq!(ack, partner("p-1"));
        assert_eq!(
            handshake.handshake_state(&org_id).await.unwrap(),
            HandshakeState::HandshakeReceived
        );
    }

    #[tokio::test]
    async fn submissions_kept_in_receipt_order() {
        let (handshake, party, repos) = setup(Role::Emsp).await;
        for t in ["p-1", "p-2", "p-3"] {
            handshake.accept_partner_credentials(&party, partner(t)).await.unwrap();
        }
        let tokens: Vec<_> = repos
            .partner_credentials()
            .find_for_organization(&party.organization.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.credentials.token)
            .collect();
        assert_eq!(tokens, vec!["p-1", "p-2", "p-3"]);
    }

    #[tokio::test]
    async fn hub_cannot_use_credentials_module() {
        let (handshake, party, _) = setup(Role::Hub).await;
        assert!(matches!(
            handshake.issue_own_credentials(&party),
            Err(DomainError::Forbidden(_))
        ));
        assert!(matches!(
            handshake.accept_partner_credentials(&party, partner("p-1")).await,
            Err(DomainError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn malformed_submission_is_not_recorded() {
        let (handshake, party, repos) = setup(Role::Cpo).await;
        let mut bad = partner("p-1");
        bad.url = "not a url".to_string();
        let err = handshake.accept_partner_credentials(&party, bad).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            repos
                .partner_credentials()
                .count_for_organization(&party.organization.id)
                .await
                .unwrap(),
            0
        );
    }
}
