//! Database entities module

pub mod location;
pub mod organization;
pub mod partner_credential;
pub mod session;
pub mod token;

pub use location::Entity as Location;
pub use organization::Entity as Organization;
pub use partner_credential::Entity as PartnerCredential;
pub use session::Entity as Session;
pub use token::Entity as Token;
