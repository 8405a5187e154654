pub mod credentials;
pub mod health;
pub mod locations;
pub mod metrics;
pub mod organizations;
pub mod request_id;
pub mod sessions;
pub mod tokens;
