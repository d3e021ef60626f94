//! Realtime report parsing.
//!
//! A realtime2 report looks like:
//!
//! ```text
//! #YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE
//! #yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft
//! 2024 03 15 14 30 270  8.5 11.2   1.3     7   5.5 280 1013.2   9.5   6.2   4.1   MM   MM    MM
//! 2024 03 15 14 20 270  8.0 10.8    MM    MM    MM  MM 1013.3   9.5   6.2   4.0   MM   MM    MM
//! ```
//!
//! Only the first data row (the newest observation) is read. Columns are
//! always looked up by header name since the provider does not guarantee a
//! fixed order.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::debug;

use crate::domain::{Measurement, Observation, StationId};

/// Prefix of header and units rows.
const COMMENT_MARKER: char = '#';

/// Literal token the provider writes for "not measured".
const MISSING: &str = "MM";

/// Fewest non-empty lines a usable report can have: header, units, one row.
const MIN_LINES: usize = 3;

/// Header columns paired with the newest data row.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    columns: Vec<&'a str>,
    values: Vec<&'a str>,
}

impl<'a> Report<'a> {
    /// Locate the header and newest data row in raw report text.
    ///
    /// Returns `None` when the report is too short or has no data row.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if lines.len() < MIN_LINES {
            debug!(lines = lines.len(), "report too short");
            return None;
        }

        let header = lines[0];
        let header = header
            .strip_prefix(COMMENT_MARKER)
            .unwrap_or(header)
            .trim_start();
        let columns = header.split_whitespace().collect();

        let Some(row) = lines.iter().copied().find(|l| !l.starts_with(COMMENT_MARKER)) else {
            debug!("report has no data row");
            return None;
        };
        let values = row.split_whitespace().collect();

        Some(Self { columns, values })
    }

    /// Raw token in the data row under the named column.
    ///
    /// `None` if the header lacks the column or the row is too short to
    /// reach it.
    pub fn value(&self, column: &str) -> Option<&'a str> {
        let idx = self.columns.iter().position(|c| *c == column)?;
        self.values.get(idx).copied()
    }

    /// Numeric value under the named column.
    ///
    /// `None` for the `MM` token, anything that isn't a finite number, and
    /// any value at or above `missing_threshold`.
    pub fn number(&self, column: &str, missing_threshold: f64) -> Option<f64> {
        let raw = self.value(column)?;
        if raw == MISSING {
            return None;
        }
        let n: f64 = raw.parse().ok()?;
        (n.is_finite() && n < missing_threshold).then_some(n)
    }

    /// Observation time from the YY, MM, DD, hh and mm columns.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let year = self.value("YY")?;
        let month = self.value("MM")?;
        let day = self.value("DD")?;
        let hour = self.value("hh")?;
        let minute = self.value("mm")?;

        // Four-digit years only
        let year = infer_year(year.parse().ok()?);
        if !(1000..=9999).contains(&year) {
            return None;
        }

        let naive = NaiveDate::from_ymd_opt(year, two_digits(month)?, two_digits(day)?)?
            .and_hms_opt(two_digits(hour)?, two_digits(minute)?, 0)?;
        Some(Utc.from_utc_datetime(&naive))
    }
}

/// Expand a legacy two-digit year; four-digit years pass through.
///
/// Years below 50 are taken as 20xx, the rest as 19xx.
pub fn infer_year(yr: i32) -> i32 {
    if yr > 1900 {
        yr
    } else if yr < 50 {
        2000 + yr
    } else {
        1900 + yr
    }
}

/// A one- or two-digit date/time field.
fn two_digits(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse the newest observation out of a realtime report.
///
/// The result is tagged with the requested station, not anything read from
/// the report. `None` means the report had nothing usable.
pub fn parse_observation(raw: &str, station: &StationId) -> Option<Observation> {
    let report = Report::parse(raw)?;

    let mut obs = Observation::new(station.as_str(), report.timestamp());
    for m in Measurement::ALL {
        obs.set(m, report.number(m.column(), m.missing_threshold()));
    }

    Some(obs)
}
