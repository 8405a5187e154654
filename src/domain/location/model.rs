//! Location domain entities (OCPI 2.3.0 Locations module)
//!
//! Only the fields the hub reasons about are typed; nested objects it merely
//! relays (opening times, energy mix, images, ...) stay opaque JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::organization::model::{is_valid_country_code, is_valid_party_id};

fn now() -> DateTime<Utc> {
    Utc::now()
}

fn default_true() -> bool {
    true
}

fn coded_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

pub(crate) fn validate_country_code(code: &str) -> Result<(), ValidationError> {
    if is_valid_country_code(code) {
        Ok(())
    } else {
        Err(coded_error(
            "country_code",
            "must be an ISO 3166-1 alpha-2 code in upper case",
        ))
    }
}

pub(crate) fn validate_party_id(party_id: &str) -> Result<(), ValidationError> {
    if is_valid_party_id(party_id) {
        Ok(())
    } else {
        Err(coded_error(
            "party_id",
            "must be three upper-case letters or digits",
        ))
    }
}

fn validate_latitude(value: &str) -> Result<(), ValidationError> {
    match value.parse::<f64>() {
        Ok(v) if (-90.0..=90.0).contains(&v) => Ok(()),
        _ => Err(coded_error("latitude", "must be a decimal degree in [-90, 90]")),
    }
}

fn validate_longitude(value: &str) -> Result<(), ValidationError> {
    match value.parse::<f64>() {
        Ok(v) if (-180.0..=180.0).contains(&v) => Ok(()),
        _ => Err(coded_error(
            "longitude",
            "must be a decimal degree in [-180, 180]",
        )),
    }
}

fn validate_evses(evses: &[Evse]) -> Result<(), ValidationError> {
    for evse in evses {
        if evse.uid.trim().is_empty() {
            return Err(coded_error("evses", "every EVSE needs a uid"));
        }
        if let Some(coords) = &evse.coordinates {
            if coords.validate().is_err() {
                return Err(coded_error("evses", "EVSE coordinates are out of range"));
            }
        }
        for connector in &evse.connectors {
            if connector.id.trim().is_empty() {
                return Err(coded_error("evses", "every connector needs an id"));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeoLocation {
    #[validate(custom(function = "validate_latitude"))]
    pub latitude: String,
    #[validate(custom(function = "validate_longitude"))]
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Connector {
    pub id: String,
    pub standard: String,
    pub format: String,
    pub power_type: String,
    pub max_voltage: i32,
    pub max_amperage: i32,
    pub max_electric_power: Option<i32>,
    pub tariff_ids: Option<Vec<String>>,
    pub terms_and_conditions: Option<String>,
    #[serde(default = "now")]
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Evse {
    pub uid: String,
    pub evse_id: Option<String>,
    pub status: String,
    #[schema(value_type = Option<Vec<Object>>)]
    pub status_schedule: Option<Vec<serde_json::Value>>,
    pub capabilities: Option<Vec<String>>,
    pub connectors: Vec<Connector>,
    pub floor_level: Option<String>,
    pub coordinates: Option<GeoLocation>,
    pub physical_reference: Option<String>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub directions: Option<Vec<serde_json::Value>>,
    pub parking_restrictions: Option<Vec<String>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub images: Option<Vec<serde_json::Value>>,
    #[serde(default = "now")]
    pub last_updated: DateTime<Utc>,
}

/// OCPI Location as published by its CPO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Location {
    #[validate(custom(function = "validate_country_code"))]
    pub country_code: String,
    #[validate(custom(function = "validate_party_id"))]
    pub party_id: String,
    #[validate(length(min = 1, max = 36))]
    pub id: String,
    #[serde(default = "default_true")]
    pub publish: bool,
    #[schema(value_type = Option<Vec<Object>>)]
    pub publish_allowed_to: Option<Vec<serde_json::Value>>,
    pub name: Option<String>,
    #[validate(length(min = 1, max = 45))]
    pub address: String,
    #[validate(length(min = 1, max = 45))]
    pub city: String,
    #[validate(length(max = 10))]
    pub postal_code: String,
    pub state: Option<String>,
    #[validate(length(equal = 3))]
    pub country: String,
    #[validate(nested)]
    pub coordinates: GeoLocation,
    #[schema(value_type = Option<Vec<Object>>)]
    pub related_locations: Option<Vec<serde_json::Value>>,
    pub parking_type: Option<String>,
    #[validate(custom(function = "validate_evses"))]
    pub evses: Option<Vec<Evse>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub directions: Option<Vec<serde_json::Value>>,
    #[schema(value_type = Option<Object>)]
    pub operator: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub suboperator: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub owner: Option<serde_json::Value>,
    pub facilities: Option<Vec<String>>,
    #[validate(length(min = 1, max = 255))]
    pub time_zone: String,
    #[schema(value_type = Option<Object>)]
    pub opening_times: Option<serde_json::Value>,
    #[serde(default = "charging_when_closed_default")]
    pub charging_when_closed: Option<bool>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub images: Option<Vec<serde_json::Value>>,
    #[schema(value_type = Option<Object>)]
    pub energy_mix: Option<serde_json::Value>,
    #[serde(default = "now")]
    pub last_updated: DateTime<Utc>,
}

fn charging_when_closed_default() -> Option<bool> {
    Some(true)
}

/// A location together with the organization that published it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLocation {
    pub owner_org_id: String,
    pub location: Location,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal valid location for `country_code`/`party_id`.
    pub fn location(country_code: &str, party_id: &str, id: &str) -> Location {
        serde_json::from_value(serde_json::json!({
            "country_code": country_code,
            "party_id": party_id,
            "id": id,
            "address": "Istiklal Cd. 1",
            "city": "Istanbul",
            "postal_code": "34430",
            "country": "TUR",
            "coordinates": { "latitude": "41.0339", "longitude": "28.9770" },
            "time_zone": "Europe/Istanbul",
            "evses": [{
                "uid": "EVSE-1",
                "status": "AVAILABLE",
                "connectors": [{
                    "id": "1",
                    "standard": "IEC_62196_T2",
                    "format": "SOCKET",
                    "power_type": "AC_3_PHASE",
                    "max_voltage": 400,
                    "max_amperage": 32
                }]
            }]
        }))
        .expect("fixture location must deserialize")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::location;
    use super::*;

    #[test]
    fn fixture_is_valid() {
        let loc = location("TR", "EPS", "LOC1");
        assert!(loc.validate().is_ok());
        assert!(loc.publish);
        assert_eq!(loc.charging_when_closed, Some(true));
    }

    #[test]
    fn lower_case_country_code_fails() {
        let mut loc = location("TR", "EPS", "LOC1");
        loc.country_code = "tr".to_string();
        let errors = loc.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("country_code"));
    }

    #[test]
    fn out_of_range_coordinates_fail() {
        let mut loc = location("TR", "EPS", "LOC1");
        loc.coordinates.latitude = "123.0".to_string();
        assert!(loc.validate().is_err());
    }

    #[test]
    fn evse_without_uid_fails() {
        let mut loc = location("TR", "EPS", "LOC1");
        if let Some(evses) = loc.evses.as_mut() {
            evses[0].uid = String::new();
        }
        assert!(loc.validate().is_err());
    }

    #[test]
    fn missing_required_field_does_not_deserialize() {
        let result: Result<Location, _> = serde_json::from_value(serde_json::json!({
            "country_code": "TR",
            "party_id": "EPS",
            "id": "LOC1"
        }));
        assert!(result.is_err());
    }
}
