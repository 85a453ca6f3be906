use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParkingError;
use crate::model::{Vehicle, VehicleClass};

/// The size class of a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotClass {
    Bike,
    Car,
    Truck,
}

impl fmt::Display for SpotClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bike => "Bike",
            Self::Car => "Car",
            Self::Truck => "Truck",
        };
        f.write_str(name)
    }
}

// Which vehicle classes a spot class accepts. Extending the facility with a
// new class means adding a row here; nothing else changes.
const COMPATIBILITY: &[(SpotClass, VehicleClass)] = &[
    (SpotClass::Bike, VehicleClass::Small),
    (SpotClass::Car, VehicleClass::Compact),
    (SpotClass::Truck, VehicleClass::Large),
];

/// Returns true if a vehicle of `vehicle_class` may occupy a spot of
/// `spot_class`. Pure and total: unlisted pairings are incompatible, not an
/// error.
#[must_use]
pub fn fits(spot_class: SpotClass, vehicle_class: VehicleClass) -> bool {
    COMPATIBILITY.contains(&(spot_class, vehicle_class))
}

/// Identifies a spot within the facility by floor and spot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotId {
    pub floor: u32,
    pub spot: u32,
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.floor, self.spot)
    }
}

/// The smallest occupancy unit. Owned exclusively by its floor; created
/// once at facility initialization with a fixed class, never destroyed.
#[derive(Debug, Clone)]
pub struct ParkingSpot {
    id: SpotId,
    class: SpotClass,
    occupant: Option<Vehicle>,
}

impl ParkingSpot {
    #[must_use]
    pub fn new(id: SpotId, class: SpotClass) -> Self {
        Self {
            id,
            class,
            occupant: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SpotId {
        self.id
    }

    #[must_use]
    pub fn class(&self) -> SpotClass {
        self.class
    }

    #[must_use]
    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// True if the spot is free and the vehicle's class fits its class.
    #[must_use]
    pub fn can_accept(&self, vehicle: &Vehicle) -> bool {
        self.is_free() && fits(self.class, vehicle.class())
    }

    /// Marks the spot occupied by `vehicle`.
    ///
    /// Callers are expected to check [`ParkingSpot::can_accept`] first; the
    /// checks here keep a misbehaving caller from corrupting state.
    pub fn assign(&mut self, vehicle: Vehicle) -> Result<(), ParkingError> {
        if let Some(occupant) = &self.occupant {
            return Err(ParkingError::InvalidState {
                spot: self.id,
                message: format!("already occupied by '{}'", occupant.plate()),
            });
        }
        if !fits(self.class, vehicle.class()) {
            return Err(ParkingError::InvalidState {
                spot: self.id,
                message: format!(
                    "{} vehicle does not fit a {} spot",
                    vehicle.class(),
                    self.class
                ),
            });
        }
        self.occupant = Some(vehicle);
        Ok(())
    }

    /// Frees the spot and returns the vehicle that occupied it.
    pub fn release(&mut self) -> Result<Vehicle, ParkingError> {
        self.occupant
            .take()
            .ok_or_else(|| ParkingError::InvalidState {
                spot: self.id,
                message: "release of a free spot".to_string(),
            })
    }
}
