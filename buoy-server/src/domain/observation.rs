//! Normalized observation record and the measurement table.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// One of the eleven measurements carried by an [`Observation`].
///
/// Each variant knows the provider column it is read from and the value at
/// or above which the provider means "not measured".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    /// Wind direction, degrees true
    WindDir,
    /// Wind speed, m/s
    WindSpeed,
    /// Peak gust speed, m/s
    GustSpeed,
    /// Significant wave height, m
    WaveHeight,
    /// Dominant wave period, s
    DomPeriod,
    /// Average wave period, s
    AvgPeriod,
    /// Mean wave direction, degrees true
    WaveDir,
    /// Sea level pressure, hPa
    Pressure,
    /// Air temperature, °C
    AirTemp,
    /// Sea surface temperature, °C
    WaterTemp,
    /// Dew point, °C
    DewPoint,
}

impl Measurement {
    /// All measurements, in output order.
    pub const ALL: [Measurement; 11] = [
        Measurement::WindDir,
        Measurement::WindSpeed,
        Measurement::GustSpeed,
        Measurement::WaveHeight,
        Measurement::DomPeriod,
        Measurement::AvgPeriod,
        Measurement::WaveDir,
        Measurement::Pressure,
        Measurement::AirTemp,
        Measurement::WaterTemp,
        Measurement::DewPoint,
    ];

    /// Column name in the realtime report header.
    pub fn column(self) -> &'static str {
        match self {
            Measurement::WindDir => "WDIR",
            Measurement::WindSpeed => "WSPD",
            Measurement::GustSpeed => "GST",
            Measurement::WaveHeight => "WVHT",
            Measurement::DomPeriod => "DPD",
            Measurement::AvgPeriod => "APD",
            Measurement::WaveDir => "MWD",
            Measurement::Pressure => "PRES",
            Measurement::AirTemp => "ATMP",
            Measurement::WaterTemp => "WTMP",
            Measurement::DewPoint => "DEWP",
        }
    }

    /// Values at or above this are the provider's missing-data fill.
    pub fn missing_threshold(self) -> f64 {
        match self {
            Measurement::WindDir | Measurement::WaveDir => 999.0,
            Measurement::WindSpeed
            | Measurement::GustSpeed
            | Measurement::WaveHeight
            | Measurement::DomPeriod
            | Measurement::AvgPeriod => 99.0,
            Measurement::Pressure => 9999.0,
            Measurement::AirTemp | Measurement::WaterTemp | Measurement::DewPoint => 999.0,
        }
    }

    /// Key used for this measurement in JSON responses.
    pub fn json_key(self) -> &'static str {
        match self {
            Measurement::WindDir => "windDir",
            Measurement::WindSpeed => "windSpeed",
            Measurement::GustSpeed => "gustSpeed",
            Measurement::WaveHeight => "waveHeight",
            Measurement::DomPeriod => "domPeriod",
            Measurement::AvgPeriod => "avgPeriod",
            Measurement::WaveDir => "waveDir",
            Measurement::Pressure => "pressure",
            Measurement::AirTemp => "airTemp",
            Measurement::WaterTemp => "waterTemp",
            Measurement::DewPoint => "dewPoint",
        }
    }
}

/// The most recent observation for a station.
///
/// Every measurement is optional: `None` means the provider did not report
/// it, which is distinct from a measured zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Identifier exactly as requested
    pub station_id: String,

    /// Observation time, if all date/time columns were readable
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,

    pub wind_dir: Option<f64>,
    pub wind_speed: Option<f64>,
    pub gust_speed: Option<f64>,
    pub wave_height: Option<f64>,
    pub dom_period: Option<f64>,
    pub avg_period: Option<f64>,
    pub wave_dir: Option<f64>,
    pub pressure: Option<f64>,
    pub air_temp: Option<f64>,
    pub water_temp: Option<f64>,
    pub dew_point: Option<f64>,
}

impl Observation {
    /// Create an observation with every measurement absent.
    pub fn new(station_id: impl Into<String>, timestamp: Option<DateTime<Utc>>) -> Self {
        Self {
            station_id: station_id.into(),
            timestamp,
            wind_dir: None,
            wind_speed: None,
            gust_speed: None,
            wave_height: None,
            dom_period: None,
            avg_period: None,
            wave_dir: None,
            pressure: None,
            air_temp: None,
            water_temp: None,
            dew_point: None,
        }
    }

    fn slot(&mut self, m: Measurement) -> &mut Option<f64> {
        match m {
            Measurement::WindDir => &mut self.wind_dir,
            Measurement::WindSpeed => &mut self.wind_speed,
            Measurement::GustSpeed => &mut self.gust_speed,
            Measurement::WaveHeight => &mut self.wave_height,
            Measurement::DomPeriod => &mut self.dom_period,
            Measurement::AvgPeriod => &mut self.avg_period,
            Measurement::WaveDir => &mut self.wave_dir,
            Measurement::Pressure => &mut self.pressure,
            Measurement::AirTemp => &mut self.air_temp,
            Measurement::WaterTemp => &mut self.water_temp,
            Measurement::DewPoint => &mut self.dew_point,
        }
    }

    /// Read a measurement.
    pub fn get(&self, m: Measurement) -> Option<f64> {
        match m {
            Measurement::WindDir => self.wind_dir,
            Measurement::WindSpeed => self.wind_speed,
            Measurement::GustSpeed => self.gust_speed,
            Measurement::WaveHeight => self.wave_height,
            Measurement::DomPeriod => self.dom_period,
            Measurement::AvgPeriod => self.avg_period,
            Measurement::WaveDir => self.wave_dir,
            Measurement::Pressure => self.pressure,
            Measurement::AirTemp => self.air_temp,
            Measurement::WaterTemp => self.water_temp,
            Measurement::DewPoint => self.dew_point,
        }
    }

    /// Overwrite a measurement.
    pub fn set(&mut self, m: Measurement, value: Option<f64>) {
        *self.slot(m) = value;
    }

    /// Number of measurements that are present.
    pub fn present_count(&self) -> usize {
        Measurement::ALL
            .iter()
            .filter(|m| self.get(**m).is_some())
            .count()
    }
}

/// Timestamps go out as `2024-03-15T14:30:00.000Z`.
fn serialize_timestamp<S>(ts: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ts {
        Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => serializer.serialize_none(),
    }
}
