//! NDBC realtime report client and parser.
//!
//! The National Data Buoy Center publishes a plain-text "realtime2" report
//! per station at `/data/realtime2/{STATION}.txt`. Key characteristics:
//! - Rows are whitespace-delimited and newest first
//! - The first line is a `#`-prefixed header of column names, followed by
//!   a `#`-prefixed units line
//! - Unmeasured values are written as `MM` or as an all-nines fill value
//!   (999, 99.0, 9999.0 depending on the column)
//! - Column order is not guaranteed between stations

mod client;
mod error;
mod report;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, NdbcClient, NdbcConfig};
pub use error::NdbcError;
pub use report::{Report, infer_year, parse_observation};
