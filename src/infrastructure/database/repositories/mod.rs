//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod location_repository;
pub mod organization_repository;
pub mod partner_credential_repository;
pub mod repository_provider;
pub mod session_repository;
pub mod token_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

pub(super) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::location::model::fixtures::location;
    use crate::domain::session::model::fixtures::stored;
    use crate::domain::token::model::fixtures::token;
    use crate::domain::{
        CredentialsPayload, CredentialsRole, NewOrganization, Organization, RepositoryProvider,
        Role, SessionScope, SessionStatus, StoredToken,
    };
    use crate::infrastructure::database::{init_and_migrate, DatabaseConfig};
    use crate::shared::Page;

    async fn provider() -> SeaOrmRepositoryProvider {
        let db = init_and_migrate(&DatabaseConfig::in_memory()).await.unwrap();
        SeaOrmRepositoryProvider::new(db)
    }

    fn new_org(id: &str, cc: &str, pid: &str, role: Role) -> NewOrganization {
        let now = Utc::now();
        NewOrganization {
            organization: Organization {
                id: id.to_string(),
                name: format!("Org {}", id),
                website: None,
                logo: None,
                country_code: cc.to_string(),
                party_id: pid.to_string(),
                role,
                business_details: Some(serde_json::json!({"name": "Org"})),
                created_at: now,
                updated_at: now,
            },
            api_token_hash: format!("hash-{}", id),
        }
    }

    #[tokio::test]
    async fn organizations_insert_and_lookup() {
        let repos = provider().await;
        let org = repos
            .organizations()
            .insert(new_org("o1", "TR", "EPS", Role::Cpo))
            .await
            .unwrap();

        let by_hash = repos
            .organizations()
            .find_by_token_hash("hash-o1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_hash, org);
        assert_eq!(by_hash.business_details, Some(serde_json::json!({"name": "Org"})));

        assert!(repos.organizations().find_by_id("nope").await.unwrap().is_none());
        assert!(repos
            .organizations()
            .find_by_token_hash("hash-nope")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_party_is_rejected() {
        let repos = provider().await;
        repos
            .organizations()
            .insert(new_org("o1", "TR", "EPS", Role::Cpo))
            .await
            .unwrap();

        let err = repos
            .organizations()
            .insert(new_org("o2", "TR", "EPS", Role::Emsp))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateParty { .. }));
        assert_eq!(repos.organizations().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_duplicate_registration_admits_one() {
        let repos = provider().await;
        let (a, b) = tokio::join!(
            repos.organizations().insert(new_org("o1", "DE", "ABC", Role::Cpo)),
            repos.organizations().insert(new_org("o2", "DE", "ABC", Role::Cpo)),
        );
        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        assert_eq!(repos.organizations().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn organizations_list_in_creation_order() {
        let repos = provider().await;
        for (id, pid) in [("o3", "CCC"), ("o1", "AAA"), ("o2", "BBB")] {
            repos
                .organizations()
                .insert(new_org(id, "NL", pid, Role::Emsp))
                .await
                .unwrap();
        }
        let ids: Vec<_> = repos
            .organizations()
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec!["o3", "o1", "o2"]);
    }

    #[tokio::test]
    async fn partner_credentials_append_only() {
        let repos = provider().await;
        repos
            .organizations()
            .insert(new_org("o1", "TR", "EPS", Role::Cpo))
            .await
            .unwrap();

        let payload = |token: &str| CredentialsPayload {
            token: token.to_string(),
            url: "https://partner.example.com/ocpi".to_string(),
            roles: vec![CredentialsRole {
                role: Role::Emsp,
                business_details: serde_json::json!({}),
                party_id: "PRT".to_string(),
                country_code: "DE".to_string(),
            }],
        };

        let first = repos.partner_credentials().append("o1", payload("t1")).await.unwrap();
        let second = repos.partner_credentials().append("o1", payload("t2")).await.unwrap();
        assert!(second.seq > first.seq);

        let all = repos.partner_credentials().find_for_organization("o1").await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].credentials.token, "t1");
        assert_eq!(all[1].credentials.roles[0].party_id, "PRT");
        assert_eq!(repos.partner_credentials().count_for_organization("o1").await.unwrap(), 2);
        assert_eq!(repos.partner_credentials().count_for_organization("o2").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn location_upsert_replaces_in_place() {
        let repos = provider().await;
        repos.locations().upsert("o1", location("TR", "EPS", "L1")).await.unwrap();
        repos.locations().upsert("o1", location("TR", "EPS", "L2")).await.unwrap();

        let mut changed = location("TR", "EPS", "L1");
        changed.city = "Ankara".to_string();
        let stored = repos.locations().upsert("o1", changed).await.unwrap();
        assert_eq!(stored.owner_org_id, "o1");

        let page = repos.locations().find_page(Page::default()).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].id, "L1");
        assert_eq!(page.items[0].city, "Ankara");
        assert_eq!(page.items[1].id, "L2");
    }

    #[tokio::test]
    async fn location_page_window() {
        let repos = provider().await;
        for i in 0..5 {
            repos
                .locations()
                .upsert("o1", location("TR", "EPS", &format!("L{}", i)))
                .await
                .unwrap();
        }
        let page = repos
            .locations()
            .find_page(Page { offset: 2, limit: 2 })
            .await
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.limit, 2);
        let ids: Vec<_> = page.items.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["L2", "L3"]);
    }

    #[tokio::test]
    async fn sessions_are_scoped() {
        let repos = provider().await;
        repos.sessions().upsert(stored("S1", "cpo-a", "emsp-x")).await.unwrap();
        repos.sessions().upsert(stored("S2", "cpo-b", "emsp-x")).await.unwrap();
        repos.sessions().upsert(stored("S3", "cpo-a", "emsp-y")).await.unwrap();

        let cpo = repos
            .sessions()
            .find_page(&SessionScope::LocationOwner("cpo-a".into()), Page::default())
            .await
            .unwrap();
        let ids: Vec<_> = cpo.items.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S3"]);

        let emsp = repos
            .sessions()
            .find_page(&SessionScope::Emsp("emsp-x".into()), Page::default())
            .await
            .unwrap();
        assert_eq!(emsp.total, 2);

        let none = repos
            .sessions()
            .find_page(&SessionScope::Emsp("cpo-a".into()), Page::default())
            .await
            .unwrap();
        assert!(none.items.is_empty());
    }

    #[tokio::test]
    async fn session_status_update() {
        let repos = provider().await;
        repos.sessions().upsert(stored("S1", "cpo-a", "emsp-x")).await.unwrap();

        let updated = repos
            .sessions()
            .update_status("TR", "EPS", "S1", SessionStatus::Completed)
            .await
            .unwrap();
        assert_eq!(updated.status, SessionStatus::Completed);

        let page = repos
            .sessions()
            .find_page(&SessionScope::Emsp("emsp-x".into()), Page::default())
            .await
            .unwrap();
        assert_eq!(page.items[0].status, SessionStatus::Completed);

        let missing = repos
            .sessions()
            .update_status("TR", "EPS", "S9", SessionStatus::Invalid)
            .await;
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn tokens_filtered_by_issuer() {
        let repos = provider().await;
        repos
            .tokens()
            .upsert(StoredToken { emsp_id: "emsp-x".into(), token: token("T1", true) })
            .await
            .unwrap();
        repos
            .tokens()
            .upsert(StoredToken { emsp_id: "emsp-y".into(), token: token("T2", true) })
            .await
            .unwrap();
        repos
            .tokens()
            .upsert(StoredToken { emsp_id: "emsp-x".into(), token: token("T1", false) })
            .await
            .unwrap();

        let page = repos.tokens().find_page_for_emsp("emsp-x", Page::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert!(!page.items[0].valid);
    }
}
