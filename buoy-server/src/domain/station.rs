//! Station identifier and registry entry types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station ID: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A syntactically valid NDBC station identifier.
///
/// Station identifiers are 5 to 8 ASCII letters or digits. Letters may be
/// of either case; the identifier is kept exactly as supplied so responses
/// can echo it back, and uppercased when addressing the provider.
///
/// # Examples
///
/// ```
/// use buoy_server::domain::StationId;
///
/// let id = StationId::parse("mdrm1").unwrap();
/// assert_eq!(id.as_str(), "mdrm1");
/// assert_eq!(id.upstream_code(), "MDRM1");
///
/// // Too short
/// assert!(StationId::parse("ab").is_err());
///
/// // Punctuation is rejected
/// assert!(StationId::parse("44-013").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Shortest accepted identifier.
    pub const MIN_LEN: usize = 5;

    /// Longest accepted identifier.
    pub const MAX_LEN: usize = 8;

    /// Parse a station identifier, matching `^[A-Z0-9]{5,8}$` case-insensitively.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&s.len()) {
            return Err(InvalidStationId {
                reason: "must be 5 to 8 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStationId {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier as the provider names its report files.
    pub fn upstream_code(&self) -> String {
        self.0.to_ascii_uppercase()
    }

    /// Case-insensitive comparison against a stored code.
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A known buoy or C-MAN platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Station {
    /// Station code as published by NDBC
    pub id: &'static str,

    /// Human-readable label
    pub name: &'static str,

    /// Latitude in decimal degrees (south negative)
    pub lat: f64,

    /// Longitude in decimal degrees (west negative)
    pub lon: f64,
}
