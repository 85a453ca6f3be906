use crate::error::ParkingError;
use crate::model::{ParkingSpot, SpotClass, SpotId, Vehicle};

/// An ordered group of spots. Spot order is ascending spot number and is
/// part of the contract: it decides which physical spot a vehicle lands in
/// when several qualify.
#[derive(Debug, Clone)]
pub struct ParkingFloor {
    number: u32,
    spots: Vec<ParkingSpot>,
}

impl ParkingFloor {
    /// Builds a floor whose spots get numbers `1..=classes.len()` in the
    /// order given.
    #[must_use]
    pub fn new(number: u32, classes: &[SpotClass]) -> Self {
        let spots = classes
            .iter()
            .enumerate()
            .map(|(i, &class)| {
                let spot_number = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
                ParkingSpot::new(
                    SpotId {
                        floor: number,
                        spot: spot_number,
                    },
                    class,
                )
            })
            .collect();
        Self { number, spots }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    #[must_use]
    pub fn free_spots(&self) -> usize {
        self.spots.iter().filter(|s| s.is_free()).count()
    }

    /// Assigns the vehicle to the first free, compatible spot, scanning in
    /// ascending spot-number order. Returns the spot's identity, or `None`
    /// if this floor has nothing for it.
    pub fn try_park(&mut self, vehicle: &Vehicle) -> Result<Option<SpotId>, ParkingError> {
        for spot in &mut self.spots {
            if spot.can_accept(vehicle) {
                spot.assign(vehicle.clone())?;
                return Ok(Some(spot.id()));
            }
        }
        Ok(None)
    }

    /// Frees the spot occupied by the vehicle with the given plate.
    /// Returns the freed spot's identity, or `None` if the vehicle is not
    /// on this floor.
    pub fn release(&mut self, plate: &str) -> Result<Option<SpotId>, ParkingError> {
        for spot in &mut self.spots {
            if spot.occupant().is_some_and(|v| v.plate() == plate) {
                spot.release()?;
                return Ok(Some(spot.id()));
            }
        }
        Ok(None)
    }

    /// Frees a specific spot by number and returns the vehicle that held
    /// it. Used by the facility when it already knows the spot from an
    /// occupancy record.
    pub fn release_spot(&mut self, spot_number: u32) -> Result<Vehicle, ParkingError> {
        let spot = self
            .spots
            .iter_mut()
            .find(|s| s.id().spot == spot_number)
            .ok_or_else(|| ParkingError::InvalidState {
                spot: SpotId {
                    floor: self.number,
                    spot: spot_number,
                },
                message: "no such spot on this floor".to_string(),
            })?;
        spot.release()
    }
}
