use thiserror::Error;

use crate::domain::organization::Role;

/// Why a bearer credential was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("missing credentials")]
    MissingCredentials,

    #[error("invalid token")]
    InvalidToken,
}

/// Why an authenticated party was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForbiddenReason {
    #[error("role {role} may not {operation} {module}")]
    RoleViolation {
        role: Role,
        module: &'static str,
        operation: &'static str,
    },

    #[error("party {country_code}/{party_id} does not belong to the caller")]
    PartyMismatch {
        country_code: String,
        party_id: String,
    },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Organization with country_code {country_code} and party_id {party_id} already exists")]
    DuplicateParty {
        country_code: String,
        party_id: String,
    },

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthFailure),

    #[error("Forbidden: {0}")]
    Forbidden(#[from] ForbiddenReason),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}
