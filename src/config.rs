//! Facility configuration and session scripts.
//!
//! The core consumes its layout and tariff as data: a JSON file describing
//! floors with their spot classes plus a rate table. A session script is a
//! JSON list of timestamped park/unpark events, used by the CLI to drive a
//! facility deterministically.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::clock::Clock;
use crate::error::ConfigError;
use crate::fees::RateTable;
use crate::model::{ParkingFacility, ParkingFloor, SpotClass, VehicleClass};

/// One floor of the facility: its number and the class of each spot, in
/// spot-number order.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorConfig {
    pub number: u32,
    pub spots: Vec<SpotClass>,
}

/// The full facility description consumed at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityConfig {
    pub floors: Vec<FloorConfig>,
    pub rates: RateTable,
}

impl FacilityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.floors.is_empty() {
            return Err(ConfigError::Invalid {
                message: "facility has no floors".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for floor in &self.floors {
            if !seen.insert(floor.number) {
                return Err(ConfigError::Invalid {
                    message: format!("duplicate floor number {}", floor.number),
                });
            }
        }
        Ok(())
    }

    /// Builds the facility this configuration describes.
    ///
    /// Validates first, so a configuration deserialized directly (without
    /// going through [`load_config`]) still cannot produce a facility with
    /// ambiguous floor numbers.
    pub fn build(&self, clock: Box<dyn Clock>) -> Result<ParkingFacility, ConfigError> {
        self.validate()?;
        let floors = self
            .floors
            .iter()
            .map(|f| ParkingFloor::new(f.number, &f.spots))
            .collect();
        Ok(ParkingFacility::new(floors, clock))
    }
}

/// A single scripted entry or exit event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum SessionEvent {
    Park {
        at: DateTime<Utc>,
        plate: String,
        class: VehicleClass,
    },
    Unpark {
        at: DateTime<Utc>,
        plate: String,
    },
}

/// Loads and validates a facility configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FacilityConfig, ConfigError> {
    let content = read_file(path.as_ref())?;
    let config: FacilityConfig =
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

/// Loads a session script: a JSON array of [`SessionEvent`]s.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<Vec<SessionEvent>, ConfigError> {
    let content = read_file(path.as_ref())?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "floors": [
            { "number": 2, "spots": ["Car", "Truck"] },
            { "number": 1, "spots": ["Bike", "Car", "Car"] }
        ],
        "rates": {
            "base_rate_minor": 1000,
            "unit_minutes": 60,
            "multipliers": { "Large": 3 }
        }
    }"#;

    #[test]
    fn parses_a_full_facility_description() {
        let config: FacilityConfig = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(config.floors.len(), 2);
        assert_eq!(config.floors[1].spots.len(), 3);
        assert_eq!(config.rates.base_rate_minor, 1000);
        assert_eq!(config.rates.multiplier(VehicleClass::Large), 3);
        config.validate().unwrap();
    }

    #[test]
    fn built_facility_orders_floors_by_number() {
        let config: FacilityConfig = serde_json::from_str(SAMPLE).unwrap();
        let start = Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap();
        let facility = config.build(Box::new(FixedClock::new(start))).unwrap();

        let numbers: Vec<u32> = facility.floors().iter().map(ParkingFloor::number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn duplicate_floor_numbers_are_rejected() {
        let config: FacilityConfig = serde_json::from_str(
            r#"{
                "floors": [
                    { "number": 1, "spots": ["Car"] },
                    { "number": 1, "spots": ["Car"] }
                ],
                "rates": { "base_rate_minor": 100, "unit_minutes": 30 }
            }"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        // Building straight from the deserialized config must refuse too;
        // two same-numbered floors would make record-to-spot lookup
        // ambiguous.
        let start = Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap();
        let err = config
            .build(Box::new(FixedClock::new(start)))
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn empty_facility_is_rejected() {
        let config: FacilityConfig = serde_json::from_str(
            r#"{ "floors": [], "rates": { "base_rate_minor": 100, "unit_minutes": 30 } }"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_minute_billing_unit_does_not_parse() {
        let result: Result<RateTable, _> =
            serde_json::from_str(r#"{ "base_rate_minor": 100, "unit_minutes": 0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn session_events_parse_with_tagged_actions() {
        let events: Vec<SessionEvent> = serde_json::from_str(
            r#"[
                { "action": "park", "at": "2026-08-26T09:00:00Z", "plate": "AB-123", "class": "Compact" },
                { "action": "unpark", "at": "2026-08-26T09:05:00Z", "plate": "AB-123" }
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], SessionEvent::Park { plate, .. } if plate == "AB-123"));
        assert!(matches!(&events[1], SessionEvent::Unpark { .. }));
    }
}
