//! Bearer-token authentication of OCPI callers

use tracing::debug;

use super::registry::PartyRegistry;
use crate::domain::{DomainError, DomainResult, Organization};
use crate::shared::errors::AuthFailure;

/// A presented bearer token. Its value never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Parse an `Authorization` header value of the form `Bearer <token>`.
    /// The scheme is matched case-insensitively.
    pub fn parse(header: &str) -> Result<Self, AuthFailure> {
        let (scheme, rest) = header
            .trim()
            .split_once(char::is_whitespace)
            .ok_or(AuthFailure::InvalidToken)?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AuthFailure::InvalidToken);
        }
        let token = rest.trim();
        if token.is_empty() {
            return Err(AuthFailure::InvalidToken);
        }
        Ok(Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// The organization behind a request, plus the token it presented.
#[derive(Debug, Clone)]
pub struct AuthenticatedParty {
    pub organization: Organization,
    pub token: BearerToken,
}

#[derive(Clone)]
pub struct TokenAuthenticator {
    registry: PartyRegistry,
}

impl TokenAuthenticator {
    pub fn new(registry: PartyRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the raw `Authorization` header value. Fails closed: any
    /// header that does not resolve to a registered party is rejected.
    pub async fn authenticate(&self, header: Option<&str>) -> DomainResult<AuthenticatedParty> {
        let result = self.resolve(header).await;
        if let Err(DomainError::Auth(failure)) = &result {
            let reason = match failure {
                AuthFailure::MissingCredentials => "missing",
                AuthFailure::InvalidToken => "invalid",
            };
            metrics::counter!("ocpi_auth_failures_total", "reason" => reason).increment(1);
            debug!("Authentication failed: {}", failure);
        }
        result
    }

    async fn resolve(&self, header: Option<&str>) -> DomainResult<AuthenticatedParty> {
        let header = header.ok_or(AuthFailure::MissingCredentials)?;
        let token = BearerToken::parse(header)?;
        let organization = self.registry.lookup_by_token(token.expose()).await?;
        Ok(AuthenticatedParty {
            organization,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::registry::fixtures::request;
    use crate::domain::Role;
    use crate::infrastructure::InMemoryStorage;

    #[test]
    fn parses_bearer_scheme_case_insensitively() {
        assert_eq!(BearerToken::parse("Bearer abc").unwrap().expose(), "abc");
        assert_eq!(BearerToken::parse("bearer  abc ").unwrap().expose(), "abc");
        assert_eq!(BearerToken::parse("BEARER abc").unwrap().expose(), "abc");
    }

    #[test]
    fn rejects_other_schemes_and_empty_tokens() {
        assert_eq!(BearerToken::parse("Basic abc"), Err(AuthFailure::InvalidToken));
        assert_eq!(BearerToken::parse("Bearer"), Err(AuthFailure::InvalidToken));
        assert_eq!(BearerToken::parse("Bearer   "), Err(AuthFailure::InvalidToken));
        assert_eq!(BearerToken::parse("abc"), Err(AuthFailure::InvalidToken));
    }

    #[test]
    fn debug_redacts_value() {
        let token = BearerToken::parse("Bearer super-secret").unwrap();
        assert!(!format!("{:?}", token).contains("super-secret"));
    }

    #[tokio::test]
    async fn authenticate_outcomes() {
        let registry = PartyRegistry::new(Arc::new(InMemoryStorage::new()));
        let reg = registry.register(request("TR", "EPS", Role::Cpo)).await.unwrap();
        let auth = TokenAuthenticator::new(registry);

        let party = auth
            .authenticate(Some(&format!("Bearer {}", reg.token)))
            .await
            .unwrap();
        assert_eq!(party.organization.id, reg.organization.id);
        assert_eq!(party.token.expose(), reg.token);

        assert!(matches!(
            auth.authenticate(None).await,
            Err(DomainError::Auth(AuthFailure::MissingCredentials))
        ));
        assert!(matches!(
            auth.authenticate(Some("Bearer wrong")).await,
            Err(DomainError::Auth(AuthFailure::InvalidToken))
        ));
        assert!(matches!(
            auth.authenticate(Some(&format!("Token {}", reg.token))).await,
            Err(DomainError::Auth(AuthFailure::InvalidToken))
        ));
    }
}
