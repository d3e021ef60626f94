//! Static registry of monitored Gulf of Maine stations.
//!
//! The set is fixed at build time. Adding a station means editing
//! [`STATIONS`] and redeploying.

use crate::domain::{Station, StationId};

/// Monitored NDBC buoys and C-MAN platforms, in display order.
#[rustfmt::skip]
pub static STATIONS: [Station; 11] = [
    Station { id: "44007", name: "Portland Approach", lat: 43.525, lon: -70.140 },
    Station { id: "44011", name: "Georges Bank", lat: 41.088, lon: -66.546 },
    Station { id: "44013", name: "Boston Offshore", lat: 42.346, lon: -70.651 },
    Station { id: "44020", name: "Nantucket Sound", lat: 41.497, lon: -70.283 },
    Station { id: "44027", name: "Jonesport, ME", lat: 44.284, lon: -67.301 },
    Station { id: "44029", name: "SE of Cape Ann", lat: 42.523, lon: -70.566 },
    Station { id: "44030", name: "Biddeford Pool", lat: 43.179, lon: -70.426 },
    Station { id: "44034", name: "Frenchman Bay", lat: 44.103, lon: -68.112 },
    Station { id: "44098", name: "Jeffrey's Ledge", lat: 42.800, lon: -70.169 },
    Station { id: "MDRM1", name: "Mt. Desert Rock", lat: 43.969, lon: -68.128 },
    Station { id: "MISM1", name: "Matinicus Rock", lat: 43.784, lon: -68.855 },
];

/// All registered stations, unfiltered and in order.
pub fn all() -> &'static [Station] {
    &STATIONS
}

/// Look up a registered station, ignoring case.
pub fn find(id: &StationId) -> Option<&'static Station> {
    STATIONS.iter().find(|s| id.matches(s.id))
}
