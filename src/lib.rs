//! # parklot
//!
//! Core of a multi-floor parking facility: spot allocation, occupancy
//! tickets, and fee calculation.
//!
//! ## Features
//!
//! - First-fit allocation across floors (lowest floor, lowest spot wins)
//! - Class-based compatibility between vehicles and spots
//! - Time-stamped occupancy records with an open/closed lifecycle
//! - Fee computation in integer minor currency units, partial billing
//!   units rounded up
//! - Injectable clock for deterministic timestamps
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use parklot::clock::FixedClock;
//! use parklot::model::{ParkingFacility, ParkingFloor, SpotClass, Vehicle, VehicleClass};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap());
//! let mut facility = ParkingFacility::new(
//!     vec![ParkingFloor::new(1, &[SpotClass::Car, SpotClass::Car])],
//!     Box::new(clock.clone()),
//! );
//!
//! let ticket = facility.park_vehicle(Vehicle::new("AB-123", VehicleClass::Compact))?;
//! clock.advance(Duration::minutes(65));
//! let closed = facility.unpark_vehicle("AB-123")?;
//! assert_eq!(closed.spot(), ticket.spot());
//! # Ok::<(), parklot::error::ParkingError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod fees;
pub mod model;
