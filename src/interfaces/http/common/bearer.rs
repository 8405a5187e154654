//! Raw `Authorization` header extractor
//!
//! Never rejects. Resolution happens in the handler, after the body
//! extractors have run, so a malformed body is reported before a bad token.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::convert::Infallible;

pub struct BearerHeader(pub Option<String>);

impl BearerHeader {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for BearerHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A header that is not valid visible ASCII counts as present but unusable.
        let value = parts.headers.get(AUTHORIZATION).map(|v| {
            v.to_str()
                .map(str::to_string)
                .unwrap_or_default()
        });
        Ok(Self(value))
    }
}
