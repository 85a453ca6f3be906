use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::ParkingError;
use crate::model::{SpotId, Vehicle};

/// The time-stamped proof of a park event. Open while the vehicle is
/// parked; closed exactly once on exit. Closed is terminal.
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyRecord {
    ticket_id: u64,
    vehicle: Vehicle,
    spot: SpotId,
    entry_time: DateTime<Utc>,
    exit_time: Option<DateTime<Utc>>,
}

impl OccupancyRecord {
    #[must_use]
    pub(crate) fn new(
        ticket_id: u64,
        vehicle: Vehicle,
        spot: SpotId,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            ticket_id,
            vehicle,
            spot,
            entry_time,
            exit_time: None,
        }
    }

    #[must_use]
    pub fn ticket_id(&self) -> u64 {
        self.ticket_id
    }

    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    #[must_use]
    pub fn spot(&self) -> SpotId {
        self.spot
    }

    #[must_use]
    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    #[must_use]
    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit_time
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.exit_time.is_some()
    }

    /// Stamps the exit time, closing the record. The exit timestamp never
    /// precedes the entry timestamp; a clock that went backwards is
    /// clamped to the entry time.
    pub(crate) fn close(&mut self, exit_time: DateTime<Utc>) -> Result<(), ParkingError> {
        if self.exit_time.is_some() {
            return Err(ParkingError::AlreadyExited {
                ticket_id: self.ticket_id,
            });
        }
        self.exit_time = Some(exit_time.max(self.entry_time));
        Ok(())
    }

    /// Time between entry and exit. `None` while the record is open.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.exit_time.map(|exit| exit - self.entry_time)
    }
}
