//! Error types for the parking facility core.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::SpotId;

/// Errors that can occur during parking operations.
///
/// Each condition is a distinct variant so callers can react appropriately
/// (redirect elsewhere on [`ParkingError::FacilityFull`], show a lookup
/// prompt on [`ParkingError::VehicleNotFound`], and so on). None of these
/// leave the facility partially mutated.
#[derive(Debug, Error)]
pub enum ParkingError {
    /// The vehicle already holds an open occupancy record.
    #[error("vehicle '{plate}' is already parked under ticket #{ticket_id}")]
    DuplicateEntry { plate: String, ticket_id: u64 },

    /// No free, compatible spot exists anywhere in the facility.
    #[error("facility full: no free spot fits a {vehicle_class} vehicle")]
    FacilityFull { vehicle_class: String },

    /// Unpark was requested for a vehicle with no open record.
    #[error("vehicle '{plate}' is not parked here")]
    VehicleNotFound { plate: String },

    /// The occupancy record was already closed by a previous exit.
    #[error("ticket #{ticket_id} was already closed")]
    AlreadyExited { ticket_id: u64 },

    /// A fee was requested for a record that is still open.
    #[error("ticket #{ticket_id} is still open; close it before computing a fee")]
    TicketNotClosed { ticket_id: u64 },

    /// A spot assign/release precondition was violated. This indicates a
    /// bug in the caller or in the core, not a normal user error.
    #[error("invalid state at spot {spot}: {message}")]
    InvalidState { spot: SpotId, message: String },
}

/// Errors that can occur when loading facility configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The configuration parsed but describes an unusable facility.
    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Errors that can occur when exporting receipts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to flush buffered output to the file.
    #[error("failed to flush output '{path}': {source}")]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
