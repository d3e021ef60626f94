//! Domain types for the buoy server.
//!
//! Station identifiers are validated at construction, so the fetcher and
//! parser can trust any `StationId` they are handed.

mod observation;
mod station;

pub use observation::{Measurement, Observation};
pub use station::{InvalidStationId, Station, StationId};
