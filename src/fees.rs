//! Fee calculation for closed occupancy records.
//!
//! Money is carried in integer minor currency units (cents) end to end, so
//! the same closed record always produces the same fee.

use std::collections::HashMap;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::ParkingError;
use crate::model::{OccupancyRecord, VehicleClass};

/// Pricing data, injected into [`compute_fee`]: the length of one billing
/// unit, the base rate per unit, and per-class multipliers.
///
/// Classes absent from the multiplier table bill at the base rate. Adding a
/// class to the tariff means adding a map entry, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Base rate per billing unit, in minor currency units.
    pub base_rate_minor: u64,
    /// Length of one billing unit in minutes.
    pub unit_minutes: NonZeroU32,
    /// Per-class scaling of the base rate.
    #[serde(default)]
    pub multipliers: HashMap<VehicleClass, u64>,
}

impl RateTable {
    #[must_use]
    pub fn multiplier(&self, class: VehicleClass) -> u64 {
        self.multipliers.get(&class).copied().unwrap_or(1)
    }
}

/// A computed fee. Derived from a closed record and a rate table, never
/// stored; recomputing it yields the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fee {
    pub ticket_id: u64,
    pub billed_units: u64,
    pub amount_minor: u64,
}

/// Computes the fee for a closed record.
///
/// The parked duration is rounded up to whole billing units, so one minute
/// bills the same as a nearly full unit. Fails with
/// [`ParkingError::TicketNotClosed`] if the record is still open.
pub fn compute_fee(record: &OccupancyRecord, rates: &RateTable) -> Result<Fee, ParkingError> {
    let duration = record.duration().ok_or(ParkingError::TicketNotClosed {
        ticket_id: record.ticket_id(),
    })?;

    // Bill from milliseconds, not whole seconds: a sub-second sliver past a
    // unit boundary is still a partial unit and must round up. Exit never
    // precedes entry, but clamp anyway so billing math stays in unsigned
    // territory.
    let parked_millis = u64::try_from(duration.num_milliseconds()).unwrap_or(0);
    let unit_millis = u64::from(rates.unit_minutes.get()) * 60_000;
    let billed_units = parked_millis.div_ceil(unit_millis);

    let multiplier = rates.multiplier(record.vehicle().class());
    let amount_minor = rates
        .base_rate_minor
        .saturating_mul(multiplier)
        .saturating_mul(billed_units);

    Ok(Fee {
        ticket_id: record.ticket_id(),
        billed_units,
        amount_minor,
    })
}
