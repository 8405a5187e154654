//! Token aggregate
//!
//! eMSP-issued authorization tokens (RFID cards, app users, ad-hoc).

pub mod model;
pub mod repository;

pub use model::{StoredToken, Token, TokenType};
pub use repository::TokenRepository;
