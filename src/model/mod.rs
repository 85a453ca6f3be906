pub mod facility;
pub mod floor;
pub mod spot;
pub mod ticket;
pub mod vehicle;

pub use facility::ParkingFacility;
pub use floor::ParkingFloor;
pub use spot::{fits, ParkingSpot, SpotClass, SpotId};
pub use ticket::OccupancyRecord;
pub use vehicle::{Vehicle, VehicleClass};
