use serde::{Deserialize, Serialize};
use std::fmt;

/// The size class of a vehicle. Determines which spots it fits and which
/// rate multiplier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    Small,
    Compact,
    Large,
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Small => "Small",
            Self::Compact => "Compact",
            Self::Large => "Large",
        };
        f.write_str(name)
    }
}

/// A vehicle seeking (or holding) a spot. Immutable once constructed;
/// identity is the license plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    plate: String,
    class: VehicleClass,
}

impl Vehicle {
    #[must_use]
    pub fn new(plate: impl Into<String>, class: VehicleClass) -> Self {
        Self {
            plate: plate.into(),
            class,
        }
    }

    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    #[must_use]
    pub fn class(&self) -> VehicleClass {
        self.class
    }
}
