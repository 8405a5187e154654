//! Session domain entities (OCPI 2.3.0 Sessions module)

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Active,
    Completed,
    Invalid,
    Pending,
    Reservation,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Invalid => "INVALID",
            Self::Pending => "PENDING",
            Self::Reservation => "RESERVATION",
        }
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            "INVALID" => Ok(Self::Invalid),
            "PENDING" => Ok(Self::Pending),
            "RESERVATION" => Ok(Self::Reservation),
            other => Err(format!("unknown session status '{}'", other)),
        }
    }
}

/// OCPI Session object as exchanged on the wire. Scoping ids live on
/// [`StoredSession`], not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub country_code: String,
    pub party_id: String,
    pub id: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub kwh: f64,
    #[schema(value_type = Object)]
    pub cdr_token: serde_json::Value,
    pub auth_method: String,
    pub authorization_reference: Option<String>,
    pub location_id: String,
    pub evse_uid: String,
    pub connector_id: String,
    pub meter_id: Option<String>,
    pub currency: String,
    #[schema(value_type = Option<Vec<Object>>)]
    pub charging_periods: Option<Vec<serde_json::Value>>,
    #[schema(value_type = Option<Object>)]
    pub total_cost: Option<serde_json::Value>,
    pub status: SessionStatus,
    pub last_updated: DateTime<Utc>,
}

/// A session with the two parties allowed to see it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    /// Organization id of the CPO owning the location.
    pub location_owner_id: String,
    /// Organization id of the eMSP.
    pub emsp_id: String,
    pub session: Session,
}

/// Which side of a session the caller is looking from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionScope {
    LocationOwner(String),
    Emsp(String),
}

impl SessionScope {
    pub fn admits(&self, stored: &StoredSession) -> bool {
        match self {
            Self::LocationOwner(id) => &stored.location_owner_id == id,
            Self::Emsp(id) => &stored.emsp_id == id,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn session(id: &str, status: SessionStatus) -> Session {
        Session {
            country_code: "TR".to_string(),
            party_id: "EPS".to_string(),
            id: id.to_string(),
            start_date_time: Utc::now(),
            end_date_time: None,
            kwh: 12.5,
            cdr_token: serde_json::json!({"uid": "RFID-1", "type": "RFID", "contract_id": "TR-MSP-C1"}),
            auth_method: "WHITELIST".to_string(),
            authorization_reference: None,
            location_id: "LOC1".to_string(),
            evse_uid: "EVSE-1".to_string(),
            connector_id: "1".to_string(),
            meter_id: None,
            currency: "TRY".to_string(),
            charging_periods: None,
            total_cost: None,
            status,
            last_updated: Utc::now(),
        }
    }

    pub fn stored(id: &str, location_owner_id: &str, emsp_id: &str) -> StoredSession {
        StoredSession {
            location_owner_id: location_owner_id.to_string(),
            emsp_id: emsp_id.to_string(),
            session: session(id, SessionStatus::Active),
        }
    }
}
