use std::collections::HashMap;

use crate::clock::Clock;
use crate::error::ParkingError;
use crate::model::{OccupancyRecord, ParkingFloor, Vehicle};

/// The full facility: an ordered group of floors plus the registry of open
/// occupancy records. The sole mutator of its floors and spots.
///
/// "Nearest available spot" is realized as first-fit by ascending floor
/// number, then ascending spot number; the numbering is assumed to encode
/// physical proximity.
///
/// The facility is a plain owned value. Callers serving concurrent entry
/// and exit requests must serialize `park_vehicle`/`unpark_vehicle` with a
/// lock around the whole facility; every operation here is a single
/// bounded, synchronous step, so holding one is cheap.
pub struct ParkingFacility {
    floors: Vec<ParkingFloor>,
    open_records: HashMap<String, OccupancyRecord>,
    next_ticket_id: u64,
    clock: Box<dyn Clock>,
}

impl ParkingFacility {
    /// Builds a facility from its floors. Floors are kept in ascending
    /// floor-number order regardless of the order given.
    #[must_use]
    pub fn new(mut floors: Vec<ParkingFloor>, clock: Box<dyn Clock>) -> Self {
        floors.sort_by_key(ParkingFloor::number);
        Self {
            floors,
            open_records: HashMap::new(),
            // Ticket ids come from this counter, never from the clock, so
            // two near-simultaneous park events cannot collide.
            next_ticket_id: 1,
            clock,
        }
    }

    #[must_use]
    pub fn floors(&self) -> &[ParkingFloor] {
        &self.floors
    }

    /// The vehicle's open record, if it is currently parked here.
    #[must_use]
    pub fn open_record(&self, plate: &str) -> Option<&OccupancyRecord> {
        self.open_records.get(plate)
    }

    #[must_use]
    pub fn vehicles_parked(&self) -> usize {
        self.open_records.len()
    }

    /// Assigns the vehicle to the first free, compatible spot, scanning
    /// floors in ascending floor-number order, and issues a ticket for it.
    ///
    /// Fails with [`ParkingError::DuplicateEntry`] if the plate already
    /// holds an open record, and with [`ParkingError::FacilityFull`] if no
    /// floor can take the vehicle. Returns the issued (open) record.
    pub fn park_vehicle(&mut self, vehicle: Vehicle) -> Result<OccupancyRecord, ParkingError> {
        if let Some(record) = self.open_records.get(vehicle.plate()) {
            return Err(ParkingError::DuplicateEntry {
                plate: vehicle.plate().to_string(),
                ticket_id: record.ticket_id(),
            });
        }

        for floor in &mut self.floors {
            if let Some(spot) = floor.try_park(&vehicle)? {
                let record = OccupancyRecord::new(
                    self.next_ticket_id,
                    vehicle.clone(),
                    spot,
                    self.clock.now(),
                );
                self.next_ticket_id += 1;
                self.open_records
                    .insert(vehicle.plate().to_string(), record.clone());
                return Ok(record);
            }
        }

        Err(ParkingError::FacilityFull {
            vehicle_class: vehicle.class().to_string(),
        })
    }

    /// Closes the vehicle's open record, frees its spot, and returns the
    /// closed record for fee computation.
    ///
    /// The spot is located through the record's spot identity rather than
    /// by re-scanning floors for the plate. Fails with
    /// [`ParkingError::VehicleNotFound`] if the plate has no open record.
    pub fn unpark_vehicle(&mut self, plate: &str) -> Result<OccupancyRecord, ParkingError> {
        let spot = self
            .open_records
            .get(plate)
            .ok_or_else(|| ParkingError::VehicleNotFound {
                plate: plate.to_string(),
            })?
            .spot();

        // Free the spot before touching the registry so a failure here
        // leaves the record registered and the state consistent.
        let floor = self
            .floors
            .iter_mut()
            .find(|f| f.number() == spot.floor)
            .ok_or_else(|| ParkingError::InvalidState {
                spot,
                message: "record points at a floor that does not exist".to_string(),
            })?;
        floor.release_spot(spot.spot)?;

        let mut record = self
            .open_records
            .remove(plate)
            .ok_or_else(|| ParkingError::VehicleNotFound {
                plate: plate.to_string(),
            })?;
        record.close(self.clock.now())?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::{SpotClass, SpotId, VehicleClass};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap()
    }

    fn facility(layout: &[&[SpotClass]]) -> (ParkingFacility, FixedClock) {
        let clock = FixedClock::new(start());
        let floors = layout
            .iter()
            .enumerate()
            .map(|(i, classes)| ParkingFloor::new(u32::try_from(i).unwrap() + 1, classes))
            .collect();
        let facility = ParkingFacility::new(floors, Box::new(clock.clone()));
        (facility, clock)
    }

    fn compact(plate: &str) -> Vehicle {
        Vehicle::new(plate, VehicleClass::Compact)
    }

    #[test]
    fn park_assigns_lowest_floor_then_lowest_spot() {
        let (mut facility, _clock) = facility(&[
            &[SpotClass::Truck, SpotClass::Car],
            &[SpotClass::Car, SpotClass::Car],
        ]);

        let first = facility.park_vehicle(compact("AB-123")).unwrap();
        assert_eq!(first.spot(), SpotId { floor: 1, spot: 2 });

        let second = facility.park_vehicle(compact("CD-456")).unwrap();
        assert_eq!(second.spot(), SpotId { floor: 2, spot: 1 });
    }

    #[test]
    fn issued_record_carries_the_vehicle_and_entry_time() {
        let (mut facility, _clock) = facility(&[&[SpotClass::Car]]);
        let record = facility.park_vehicle(compact("AB-123")).unwrap();

        assert_eq!(record.vehicle().plate(), "AB-123");
        assert_eq!(record.entry_time(), start());
        assert!(!record.is_closed());
        assert_eq!(facility.vehicles_parked(), 1);
    }

    #[test]
    fn ticket_ids_are_unique_and_monotonic() {
        let (mut facility, _clock) = facility(&[&[SpotClass::Car, SpotClass::Car]]);
        let a = facility.park_vehicle(compact("AB-123")).unwrap();
        let b = facility.park_vehicle(compact("CD-456")).unwrap();
        assert!(b.ticket_id() > a.ticket_id());

        // Ids are never reused, even after the spot frees up.
        facility.unpark_vehicle("AB-123").unwrap();
        let c = facility.park_vehicle(compact("AB-123")).unwrap();
        assert!(c.ticket_id() > b.ticket_id());
    }

    #[test]
    fn duplicate_plate_is_rejected_before_any_search() {
        let (mut facility, _clock) = facility(&[&[SpotClass::Car, SpotClass::Car]]);
        facility.park_vehicle(compact("AB-123")).unwrap();

        let err = facility.park_vehicle(compact("AB-123")).unwrap_err();
        assert!(matches!(err, ParkingError::DuplicateEntry { .. }));
        // The second attempt must not have taken a spot.
        assert_eq!(facility.floors()[0].free_spots(), 1);
    }

    #[test]
    fn full_facility_rejects_the_extra_vehicle() {
        let (mut facility, _clock) = facility(&[&[SpotClass::Car, SpotClass::Car]]);
        facility.park_vehicle(compact("AB-123")).unwrap();
        facility.park_vehicle(compact("CD-456")).unwrap();

        let err = facility.park_vehicle(compact("EF-789")).unwrap_err();
        assert!(matches!(err, ParkingError::FacilityFull { .. }));
    }

    #[test]
    fn incompatible_spots_do_not_count_as_capacity() {
        let (mut facility, _clock) = facility(&[&[SpotClass::Bike, SpotClass::Truck]]);
        let err = facility.park_vehicle(compact("AB-123")).unwrap_err();
        assert!(matches!(err, ParkingError::FacilityFull { .. }));
    }

    #[test]
    fn unpark_frees_the_exact_spot_and_closes_the_record() {
        let (mut facility, clock) = facility(&[&[SpotClass::Car]]);
        let open = facility.park_vehicle(compact("AB-123")).unwrap();

        clock.advance(Duration::minutes(30));
        let closed = facility.unpark_vehicle("AB-123").unwrap();

        assert_eq!(closed.ticket_id(), open.ticket_id());
        assert_eq!(closed.spot(), open.spot());
        assert_eq!(closed.exit_time(), Some(start() + Duration::minutes(30)));
        assert_eq!(facility.vehicles_parked(), 0);
        assert_eq!(facility.floors()[0].free_spots(), 1);
    }

    #[test]
    fn unpark_of_unknown_plate_fails() {
        let (mut facility, _clock) = facility(&[&[SpotClass::Car]]);
        let err = facility.unpark_vehicle("ZZ-999").unwrap_err();
        assert!(matches!(err, ParkingError::VehicleNotFound { .. }));
    }

    #[test]
    fn unpark_twice_fails_the_second_time() {
        let (mut facility, _clock) = facility(&[&[SpotClass::Car]]);
        facility.park_vehicle(compact("AB-123")).unwrap();
        facility.unpark_vehicle("AB-123").unwrap();

        let err = facility.unpark_vehicle("AB-123").unwrap_err();
        assert!(matches!(err, ParkingError::VehicleNotFound { .. }));
    }

    #[test]
    fn freed_spot_goes_to_the_next_arrival() {
        // 1 floor, 2 car spots: the walk-through from the facility's
        // observable contract.
        let (mut facility, _clock) = facility(&[&[SpotClass::Car, SpotClass::Car]]);

        let first = facility.park_vehicle(compact("AB-123")).unwrap();
        assert_eq!(first.spot(), SpotId { floor: 1, spot: 1 });
        let second = facility.park_vehicle(compact("CD-456")).unwrap();
        assert_eq!(second.spot(), SpotId { floor: 1, spot: 2 });

        let err = facility.park_vehicle(compact("EF-789")).unwrap_err();
        assert!(matches!(err, ParkingError::FacilityFull { .. }));

        facility.unpark_vehicle("AB-123").unwrap();
        let third = facility.park_vehicle(compact("EF-789")).unwrap();
        assert_eq!(third.spot(), SpotId { floor: 1, spot: 1 });
    }

    #[test]
    fn park_unpark_and_bill_a_truck_end_to_end() {
        use crate::fees::{compute_fee, RateTable};
        use std::collections::HashMap;
        use std::num::NonZeroU32;

        let (mut facility, clock) = facility(&[&[SpotClass::Truck]]);
        facility
            .park_vehicle(Vehicle::new("TR-001", VehicleClass::Large))
            .unwrap();
        clock.advance(Duration::minutes(5));
        let record = facility.unpark_vehicle("TR-001").unwrap();

        let rates = RateTable {
            base_rate_minor: 10,
            unit_minutes: NonZeroU32::new(60).unwrap(),
            multipliers: HashMap::from([(VehicleClass::Large, 3)]),
        };
        let fee = compute_fee(&record, &rates).unwrap();
        assert_eq!(fee.amount_minor, 30);
    }

    #[test]
    fn spot_state_and_record_spot_stay_consistent() {
        let (mut facility, _clock) =
            facility(&[&[SpotClass::Car, SpotClass::Truck], &[SpotClass::Bike]]);
        facility.park_vehicle(compact("AB-123")).unwrap();
        facility
            .park_vehicle(Vehicle::new("TR-001", VehicleClass::Large))
            .unwrap();

        for floor in facility.floors() {
            for spot in floor.spots() {
                match spot.occupant() {
                    Some(vehicle) => {
                        let record = facility.open_record(vehicle.plate()).unwrap();
                        assert_eq!(record.spot(), spot.id());
                    }
                    None => {
                        // Free spots are referenced by no open record.
                        assert!(!facility
                            .open_records
                            .values()
                            .any(|r| r.spot() == spot.id()));
                    }
                }
            }
        }
    }
}
