//! Party-scoped access to the Locations, Sessions and Tokens modules
//!
//! Every call runs the role gate first, then narrows the listing to what the
//! caller may see. Accessors never own entities; they filter and project.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use super::auth::AuthenticatedParty;
use super::role_gate::{Module, Operation, RoleGate};
use crate::domain::{
    DomainError, DomainResult, Location, RepositoryProvider, Role, Session, SessionScope, Token,
};
use crate::shared::errors::ForbiddenReason;
use crate::shared::{Page, Paged};

/// Offset/limit as requested by the client, before capping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRequest {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Clone)]
pub struct ResourceAccessor {
    repos: Arc<dyn RepositoryProvider>,
    page_limit: u64,
}

impl ResourceAccessor {
    pub fn new(repos: Arc<dyn RepositoryProvider>, page_limit: u64) -> Self {
        Self { repos, page_limit }
    }

    fn page(&self, req: PageRequest) -> Page {
        Page::new(req.offset, req.limit, self.page_limit)
    }

    // ── Locations ───────────────────────────────────────────────

    pub async fn list_locations(
        &self,
        party: &AuthenticatedParty,
        req: PageRequest,
    ) -> DomainResult<Paged<Location>> {
        RoleGate::authorize(party.organization.role, Module::Locations, Operation::Read)?;
        self.repos.locations().find_page(self.page(req)).await
    }

    /// Publish or replace one of the caller's own locations.
    pub async fn put_location(
        &self,
        party: &AuthenticatedParty,
        location: Location,
    ) -> DomainResult<Location> {
        let org = &party.organization;
        RoleGate::authorize(org.role, Module::Locations, Operation::Write)?;

        if location.country_code != org.country_code || location.party_id != org.party_id {
            return Err(ForbiddenReason::PartyMismatch {
                country_code: location.country_code,
                party_id: location.party_id,
            }
            .into());
        }

        location
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let stored = self.repos.locations().upsert(&org.id, location).await?;
        info!(
            org_id = %org.id,
            location_id = %stored.location.id,
            "Location stored"
        );
        Ok(stored.location)
    }

    // ── Sessions ────────────────────────────────────────────────

    pub async fn list_sessions(
        &self,
        party: &AuthenticatedParty,
        req: PageRequest,
    ) -> DomainResult<Paged<Session>> {
        let org = &party.organization;
        RoleGate::authorize(org.role, Module::Sessions, Operation::Read)?;

        let scope = match org.role {
            Role::Cpo => SessionScope::LocationOwner(org.id.clone()),
            Role::Emsp => SessionScope::Emsp(org.id.clone()),
            Role::Hub => {
                return Err(ForbiddenReason::RoleViolation {
                    role: org.role,
                    module: Module::Sessions.as_str(),
                    operation: Operation::Read.as_str(),
                }
                .into())
            }
        };
        self.repos.sessions().find_page(&scope, self.page(req)).await
    }

    // ── Tokens ──────────────────────────────────────────────────

    pub async fn list_tokens(
        &self,
        party: &AuthenticatedParty,
        req: PageRequest,
    ) -> DomainResult<Paged<Token>> {
        let org = &party.organization;
        RoleGate::authorize(org.role, Module::Tokens, Operation::Read)?;
        self.repos
            .tokens()
            .find_page_for_emsp(&org.id, self.page(req))
            .await
    }
}
