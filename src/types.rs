use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::error::SkylightError;

/// A validated position on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CoordinatesRepr", into = "CoordinatesRepr")
)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SkylightError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(SkylightError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SkylightError::LatitudeOutOfRange { latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SkylightError::LongitudeOutOfRange { longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CoordinatesRepr {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinatesRepr> for Coordinates {
    type Error = SkylightError;

    fn try_from(repr: CoordinatesRepr) -> Result<Self, Self::Error> {
        Coordinates::new(repr.latitude, repr.longitude)
    }
}

#[cfg(feature = "serde")]
impl From<Coordinates> for CoordinatesRepr {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// An absolute instant, in milliseconds since the Unix epoch.
///
/// Carries no time zone. Use [`SolarEvent::with_timezone`] to display it in
/// local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SolarEvent(i64);

impl SolarEvent {
    pub const fn from_epoch_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn epoch_millis(self) -> i64 {
        self.0
    }

    /// Saturates at the bounds of `DateTime<Utc>`.
    pub fn to_utc(self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.0).unwrap_or(if self.0 < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    pub fn with_timezone<Tz: TimeZone>(self, tz: &Tz) -> DateTime<Tz> {
        self.to_utc().with_timezone(tz)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SolarEvent {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl From<SolarEvent> for DateTime<Utc> {
    fn from(event: SolarEvent) -> Self {
        event.to_utc()
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// How the sun behaved at a location over one calendar date.
///
/// Dawn and dusk are civil twilight crossings; sunrise and sunset are horizon
/// crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind")
)]
pub enum DayResult {
    Typical {
        dawn: SolarEvent,
        sunrise: SolarEvent,
        sunset: SolarEvent,
        dusk: SolarEvent,
    },
    /// The sun never goes below the horizon.
    AlwaysDaytime,
    /// The sun goes below the horizon but never below civil twilight.
    AlwaysLight {
        sunrise: SolarEvent,
        sunset: SolarEvent,
    },
    /// The sun reaches civil twilight but never rises above the horizon.
    NeverDaytime { dawn: SolarEvent, dusk: SolarEvent },
    /// The sun never rises above civil twilight.
    NeverLight,
}

impl DayResult {
    pub fn name(&self) -> &'static str {
        match self {
            DayResult::Typical { .. } => "typical",
            DayResult::AlwaysDaytime => "always daytime",
            DayResult::AlwaysLight { .. } => "always light",
            DayResult::NeverDaytime { .. } => "never daytime",
            DayResult::NeverLight => "never light",
        }
    }

    /// All events of the day, in chronological order.
    pub fn events(&self) -> Vec<SolarEvent> {
        match *self {
            DayResult::Typical {
                dawn,
                sunrise,
                sunset,
                dusk,
            } => vec![dawn, sunrise, sunset, dusk],
            DayResult::AlwaysLight { sunrise, sunset } => vec![sunrise, sunset],
            DayResult::NeverDaytime { dawn, dusk } => vec![dawn, dusk],
            DayResult::AlwaysDaytime | DayResult::NeverLight => Vec::new(),
        }
    }

    /// Whether the sun is above civil twilight at `instant`, judged against
    /// this day's events only.
    pub fn is_light_at(&self, instant: SolarEvent) -> bool {
        match *self {
            DayResult::Typical { dawn, dusk, .. } | DayResult::NeverDaytime { dawn, dusk } => {
                dawn <= instant && instant < dusk
            }
            DayResult::AlwaysDaytime | DayResult::AlwaysLight { .. } => true,
            DayResult::NeverLight => false,
        }
    }

    /// Whether the sun is above the horizon at `instant`.
    pub fn is_daytime_at(&self, instant: SolarEvent) -> bool {
        match *self {
            DayResult::Typical {
                sunrise, sunset, ..
            }
            | DayResult::AlwaysLight { sunrise, sunset } => sunrise <= instant && instant < sunset,
            DayResult::AlwaysDaytime => true,
            DayResult::NeverDaytime { .. } | DayResult::NeverLight => false,
        }
    }
}

/// A [`DayResult`] together with the date it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkylightDay {
    date: NaiveDate,
    result: DayResult,
}

impl SkylightDay {
    pub fn new(date: NaiveDate, result: DayResult) -> Self {
        Self { date, result }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn result(&self) -> &DayResult {
        &self.result
    }

    pub fn into_result(self) -> DayResult {
        self.result
    }
}

/// 0.01 rad below the geometric horizon.
pub const DEFAULT_HORIZON_ALTITUDE_DEG: f64 = -0.572_957_795_130_823_2;
pub const STANDARD_REFRACTION_ALTITUDE_DEG: f64 = -0.833;
pub const CIVIL_TWILIGHT_ALTITUDE_DEG: f64 = -6.0;

/// Solar altitudes, in degrees, that define the day's crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CalculatorConfigRepr", into = "CalculatorConfigRepr")
)]
pub struct CalculatorConfig {
    horizon_altitude_deg: f64,
    twilight_altitude_deg: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            horizon_altitude_deg: DEFAULT_HORIZON_ALTITUDE_DEG,
            twilight_altitude_deg: CIVIL_TWILIGHT_ALTITUDE_DEG,
        }
    }
}

impl CalculatorConfig {
    pub fn new(horizon_altitude_deg: f64, twilight_altitude_deg: f64) -> Result<Self, SkylightError> {
        check_altitude("horizon", horizon_altitude_deg)?;
        check_altitude("twilight", twilight_altitude_deg)?;
        if twilight_altitude_deg >= horizon_altitude_deg {
            return Err(SkylightError::ThresholdOrder {
                horizon: horizon_altitude_deg,
                twilight: twilight_altitude_deg,
            });
        }
        Ok(Self {
            horizon_altitude_deg,
            twilight_altitude_deg,
        })
    }

    /// Horizon at -0.833°, the usual allowance for refraction and the solar disc.
    pub fn standard_refraction() -> Self {
        Self {
            horizon_altitude_deg: STANDARD_REFRACTION_ALTITUDE_DEG,
            twilight_altitude_deg: CIVIL_TWILIGHT_ALTITUDE_DEG,
        }
    }

    pub fn with_horizon_altitude(self, degrees: f64) -> Result<Self, SkylightError> {
        Self::new(degrees, self.twilight_altitude_deg)
    }

    pub fn with_twilight_altitude(self, degrees: f64) -> Result<Self, SkylightError> {
        Self::new(self.horizon_altitude_deg, degrees)
    }

    pub fn horizon_altitude_deg(&self) -> f64 {
        self.horizon_altitude_deg
    }

    pub fn twilight_altitude_deg(&self) -> f64 {
        self.twilight_altitude_deg
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CalculatorConfigRepr {
    horizon_altitude_deg: f64,
    twilight_altitude_deg: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CalculatorConfigRepr> for CalculatorConfig {
    type Error = SkylightError;

    fn try_from(repr: CalculatorConfigRepr) -> Result<Self, Self::Error> {
        CalculatorConfig::new(repr.horizon_altitude_deg, repr.twilight_altitude_deg)
    }
}

#[cfg(feature = "serde")]
impl From<CalculatorConfig> for CalculatorConfigRepr {
    fn from(c: CalculatorConfig) -> Self {
        Self {
            horizon_altitude_deg: c.horizon_altitude_deg,
            twilight_altitude_deg: c.twilight_altitude_deg,
        }
    }
}

fn check_altitude(name: &'static str, altitude: f64) -> Result<(), SkylightError> {
    if altitude.is_finite() && altitude > -90.0 && altitude < 90.0 {
        Ok(())
    } else {
        Err(SkylightError::InvalidAltitude { name, altitude })
    }
}

/// Intermediate solar-position values at a reference instant.
///
/// Angles are in radians; `equation_of_time` is in days and `transit` in days
/// since J2000.0 (2000-01-01 12:00 UTC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    pub julian_day: f64,
    pub mean_anomaly: f64,
    pub ecliptic_longitude: f64,
    pub declination: f64,
    pub equation_of_time: f64,
    pub transit: f64,
}
