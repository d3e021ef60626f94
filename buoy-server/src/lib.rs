//! Gulf of Maine buoy monitor server.
//!
//! Proxies NDBC realtime reports for a fixed set of stations and returns
//! the newest observation for each as normalized JSON.

pub mod config;
pub mod domain;
pub mod ndbc;
pub mod stations;
pub mod web;
