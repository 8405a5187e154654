//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::RwLock;

use crate::domain::credentials::PartnerCredentialRepository;
use crate::domain::location::LocationRepository;
use crate::domain::organization::OrganizationRepository;
use crate::domain::session::SessionRepository;
use crate::domain::token::TokenRepository;
use crate::domain::{
    CredentialsPayload, DomainError, DomainResult, Location, NewOrganization, Organization,
    PartnerCredential, RepositoryProvider, Session, SessionScope, SessionStatus, StoredLocation,
    StoredSession, StoredToken, Token,
};
use crate::shared::{Page, Paged};

type PartyKey = (String, String);
type ObjectKey = (String, String, String);

/// Ordered rows with a unique-key index into them.
struct Keyed<K, V> {
    rows: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K: std::hash::Hash + Eq, V> Default for Keyed<K, V> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: std::hash::Hash + Eq, V> Keyed<K, V> {
    /// Replace the row under `key` in place, or append it.
    fn upsert(&mut self, key: K, value: V) -> &V {
        let pos = match self.index.get(&key).copied() {
            Some(pos) => {
                self.rows[pos] = value;
                pos
            }
            None => {
                self.rows.push(value);
                let pos = self.rows.len() - 1;
                self.index.insert(key, pos);
                pos
            }
        };
        &self.rows[pos]
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.rows[pos])
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get(key).map(|&pos| &mut self.rows[pos])
    }
}

#[derive(Default)]
struct OrganizationTable {
    rows: Vec<Organization>,
    by_party: HashMap<PartyKey, usize>,
    by_token_hash: HashMap<String, usize>,
}

#[derive(Default)]
pub struct MemoryOrganizationRepository {
    table: RwLock<OrganizationTable>,
}

#[async_trait]
impl OrganizationRepository for MemoryOrganizationRepository {
    async fn insert(&self, new: NewOrganization) -> DomainResult<Organization> {
        let org = new.organization;
        let key = (org.country_code.clone(), org.party_id.clone());

        // Check and insert under one write guard.
        let mut table = self.table.write().await;
        if table.by_party.contains_key(&key) {
            return Err(DomainError::DuplicateParty {
                country_code: org.country_code,
                party_id: org.party_id,
            });
        }

        let pos = table.rows.len();
        table.rows.push(org.clone());
        table.by_party.insert(key, pos);
        table.by_token_hash.insert(new.api_token_hash, pos);
        Ok(org)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Organization>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> DomainResult<Option<Organization>> {
        let table = self.table.read().await;
        Ok(table
            .by_token_hash
            .get(token_hash)
            .map(|&pos| table.rows[pos].clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Organization>> {
        Ok(self.table.read().await.rows.clone())
    }
}

pub struct MemoryPartnerCredentialRepository {
    by_organization: DashMap<String, Vec<PartnerCredential>>,
    seq: AtomicI64,
}

impl Default for MemoryPartnerCredentialRepository {
    fn default() -> Self {
        Self {
            by_organization: DashMap::new(),
            seq: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl PartnerCredentialRepository for MemoryPartnerCredentialRepository {
    async fn append(
        &self,
        organization_id: &str,
        credentials: CredentialsPayload,
    ) -> DomainResult<PartnerCredential> {
        let record = PartnerCredential {
            seq: self.seq.fetch_add(1, Ordering::SeqCst),
            organization_id: organization_id.to_string(),
            credentials,
            received_at: Utc::now(),
        };
        self.by_organization
            .entry(organization_id.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn find_for_organization(
        &self,
        organization_id: &str,
    ) -> DomainResult<Vec<PartnerCredential>> {
        Ok(self
            .by_organization
            .get(organization_id)
            .map(|v| v.clone())
            .unwrap_or_default())
    }

    async fn count_for_organization(&self, organization_id: &str) -> DomainResult<u64> {
        Ok(self
            .by_organization
            .get(organization_id)
            .map_or(0, |v| v.len() as u64))
    }
}

#[derive(Default)]
pub struct MemoryLocationRepository {
    table: RwLock<Keyed<ObjectKey, StoredLocation>>,
}

#[async_trait]
impl LocationRepository for MemoryLocationRepository {
    async fn upsert(&self, owner_org_id: &str, location: Location) -> DomainResult<StoredLocation> {
        let key = (
            location.country_code.clone(),
            location.party_id.clone(),
            location.id.clone(),
        );
        let mut table = self.table.write().await;
        let stored = match table.get(&key) {
            Some(existing) => StoredLocation {
                owner_org_id: existing.owner_org_id.clone(),
                created_at: existing.created_at,
                location,
            },
            None => StoredLocation {
                owner_org_id: owner_org_id.to_string(),
                created_at: Utc::now(),
                location,
            },
        };
        Ok(table.upsert(key, stored).clone())
    }

    async fn find(
        &self,
        country_code: &str,
        party_id: &str,
        id: &str,
    ) -> DomainResult<Option<StoredLocation>> {
        let key = (country_code.to_string(), party_id.to_string(), id.to_string());
        Ok(self.table.read().await.get(&key).cloned())
    }

    async fn find_page(&self, page: Page) -> DomainResult<Paged<Location>> {
        let table = self.table.read().await;
        let all: Vec<Location> = table.rows.iter().map(|s| s.location.clone()).collect();
        Ok(Paged::from_slice(&all, page))
    }
}

#[derive(Default)]
pub struct MemorySessionRepository {
    table: RwLock<Keyed<ObjectKey, StoredSession>>,
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn upsert(&self, stored: StoredSession) -> DomainResult<()> {
        let key = (
            stored.session.country_code.clone(),
            stored.session.party_id.clone(),
            stored.session.id.clone(),
        );
        let mut table = self.table.write().await;
        let stored = match table.get(&key) {
            Some(existing) => StoredSession {
                location_owner_id: existing.location_owner_id.clone(),
                emsp_id: existing.emsp_id.clone(),
                session: stored.session,
            },
            None => stored,
        };
        table.upsert(key, stored);
        Ok(())
    }

    async fn update_status(
        &self,
        country_code: &str,
        party_id: &str,
        id: &str,
        status: SessionStatus,
    ) -> DomainResult<Session> {
        let key = (country_code.to_string(), party_id.to_string(), id.to_string());
        let mut table = self.table.write().await;
        let stored = table
            .get_mut(&key)
            .ok_or_else(|| DomainError::not_found("Session", "id", id))?;
        stored.session.status = status;
        stored.session.last_updated = Utc::now();
        Ok(stored.session.clone())
    }

    async fn find_page(&self, scope: &SessionScope, page: Page) -> DomainResult<Paged<Session>> {
        let table = self.table.read().await;
        let visible: Vec<Session> = table
            .rows
            .iter()
            .filter(|s| scope.admits(s))
            .map(|s| s.session.clone())
            .collect();
        Ok(Paged::from_slice(&visible, page))
    }
}

#[derive(Default)]
pub struct MemoryTokenRepository {
    table: RwLock<Keyed<ObjectKey, StoredToken>>,
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn upsert(&self, stored: StoredToken) -> DomainResult<()> {
        let key = (
            stored.token.country_code.clone(),
            stored.token.party_id.clone(),
            stored.token.uid.clone(),
        );
        let mut table = self.table.write().await;
        let stored = match table.get(&key) {
            Some(existing) => StoredToken {
                emsp_id: existing.emsp_id.clone(),
                token: stored.token,
            },
            None => stored,
        };
        table.upsert(key, stored);
        Ok(())
    }

    async fn find_page_for_emsp(&self, emsp_id: &str, page: Page) -> DomainResult<Paged<Token>> {
        let table = self.table.read().await;
        let issued: Vec<Token> = table
            .rows
            .iter()
            .filter(|t| t.emsp_id == emsp_id)
            .map(|t| t.token.clone())
            .collect();
        Ok(Paged::from_slice(&issued, page))
    }
}

/// In-memory storage for development and testing
#[derive(Default)]
pub struct InMemoryStorage {
    organizations: MemoryOrganizationRepository,
    partner_credentials: MemoryPartnerCredentialRepository,
    locations: MemoryLocationRepository,
    sessions: MemorySessionRepository,
    tokens: MemoryTokenRepository,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryStorage {
    fn organizations(&self) -> &dyn OrganizationRepository {
        &self.organizations
    }

    fn partner_credentials(&self) -> &dyn PartnerCredentialRepository {
        &self.partner_credentials
    }

    fn locations(&self) -> &dyn LocationRepository {
        &self.locations
    }

    fn sessions(&self) -> &dyn SessionRepository {
        &self.sessions
    }

    fn tokens(&self) -> &dyn TokenRepository {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::location::model::fixtures::location;
    use crate::domain::session::model::fixtures::stored;
    use crate::domain::token::model::fixtures::token;
    use crate::domain::Role;

    fn new_org(id: &str, cc: &str, pid: &str) -> NewOrganization {
        let now = Utc::now();
        NewOrganization {
            organization: Organization {
                id: id.to_string(),
                name: id.to_string(),
                website: None,
                logo: None,
                country_code: cc.to_string(),
                party_id: pid.to_string(),
                role: Role::Cpo,
                business_details: None,
                created_at: now,
                updated_at: now,
            },
            api_token_hash: format!("hash-{}", id),
        }
    }

    #[tokio::test]
    async fn duplicate_party_rejected() {
        let storage = InMemoryStorage::new();
        storage.organizations().insert(new_org("a", "TR", "EPS")).await.unwrap();
        let err = storage
            .organizations()
            .insert(new_org("b", "TR", "EPS"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateParty { .. }));
        assert!(storage.organizations().find_by_token_hash("hash-b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_registration_of_same_party() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                storage
                    .organizations()
                    .insert(new_org(&format!("org-{}", i), "DE", "ABC"))
                    .await
                    .is_ok()
            }));
        }
        let mut admitted = 0;
        for h in handles {
            if h.await.unwrap() {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 1);
        assert_eq!(storage.organizations().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn token_hash_lookup() {
        let storage = InMemoryStorage::new();
        storage.organizations().insert(new_org("a", "TR", "EPS")).await.unwrap();
        let found = storage.organizations().find_by_token_hash("hash-a").await.unwrap();
        assert_eq!(found.map(|o| o.id), Some("a".to_string()));
    }

    #[tokio::test]
    async fn location_replace_keeps_position_and_owner() {
        let storage = InMemoryStorage::new();
        storage.locations().upsert("cpo", location("TR", "EPS", "L1")).await.unwrap();
        storage.locations().upsert("cpo", location("TR", "EPS", "L2")).await.unwrap();

        let mut changed = location("TR", "EPS", "L1");
        changed.name = Some("Renamed".to_string());
        let stored = storage.locations().upsert("other", changed).await.unwrap();
        assert_eq!(stored.owner_org_id, "cpo");

        let page = storage.locations().find_page(Page::default()).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].name.as_deref(), Some("Renamed"));
    }

    #[tokio::test]
    async fn credentials_seq_increases() {
        let storage = InMemoryStorage::new();
        let payload = CredentialsPayload {
            token: "t".into(),
            url: "https://p.example.com".into(),
            roles: vec![],
        };
        let a = storage.partner_credentials().append("o", payload.clone()).await.unwrap();
        let b = storage.partner_credentials().append("o", payload).await.unwrap();
        assert!(b.seq > a.seq);
        assert_eq!(storage.partner_credentials().count_for_organization("o").await.unwrap(), 2);
        assert!(storage
            .partner_credentials()
            .find_for_organization("x")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn session_scope_and_status() {
        let storage = InMemoryStorage::new();
        storage.sessions().upsert(stored("S1", "cpo", "emsp")).await.unwrap();
        storage.sessions().upsert(stored("S2", "cpo-2", "emsp")).await.unwrap();

        let owner = storage
            .sessions()
            .find_page(&SessionScope::LocationOwner("cpo".into()), Page::default())
            .await
            .unwrap();
        assert_eq!(owner.total, 1);

        let s = storage
            .sessions()
            .update_status("TR", "EPS", "S2", SessionStatus::Completed)
            .await
            .unwrap();
        assert_eq!(s.status, SessionStatus::Completed);
        assert!(storage
            .sessions()
            .update_status("TR", "EPS", "nope", SessionStatus::Completed)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn tokens_by_issuer() {
        let storage = InMemoryStorage::new();
        for (emsp, uid) in [("m1", "T1"), ("m2", "T2"), ("m1", "T3")] {
            storage
                .tokens()
                .upsert(StoredToken { emsp_id: emsp.into(), token: token(uid, true) })
                .await
                .unwrap();
        }
        let page = storage
            .tokens()
            .find_page_for_emsp("m1", Page { offset: 1, limit: 10 })
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].uid, "T3");
    }
}
