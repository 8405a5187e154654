//! # OCPI Hub
//!
//! OCPI 2.3.0 hub brokering locations, sessions and tokens between
//! Charge Point Operators and e-Mobility Service Providers.
//!
//! ## Architecture
//!
//! - **domain**: entities and repository traits per aggregate
//! - **application**: party registry, token authentication, role gate,
//!   credentials handshake and resource access
//! - **infrastructure**: SeaORM storage, in-memory storage, token crypto
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: process lifecycle (database, listener, shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{
    init_and_migrate, init_database, DatabaseConfig, InMemoryStorage, SeaOrmRepositoryProvider,
};

pub use interfaces::http::{create_api_router, HubState};
