//! Receipt handoff to persistence collaborators.
//!
//! The core does not keep closed records; it hands them off. A [`Receipt`]
//! pairs a closed occupancy record with its computed fee and can be written
//! out as CSV or JSON.

pub mod csv;
pub mod json;

use serde::Serialize;

use crate::fees::Fee;
use crate::model::OccupancyRecord;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;

/// A closed record together with its fee.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub record: OccupancyRecord,
    pub fee: Fee,
}
