//! Cryptographic helpers

pub mod party_token;

pub use party_token::{hash_token, mint_token};
