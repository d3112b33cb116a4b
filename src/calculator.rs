//! Sunrise, sunset and civil twilight for a single date.
//!
//! The sun's position is evaluated once, at 12:00 UTC of the requested date,
//! and both crossings are placed symmetrically around that day's transit. This
//! makes the result depend on the date alone, at the cost of up to about a
//! minute of error compared with solving for each event separately.

use std::f64::consts::PI;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, trace};

use crate::angles;
use crate::types::{CalculatorConfig, Coordinates, DayResult, SolarEvent};

const MILLIS_PER_HOUR: i64 = 3_600_000;
const HALF_DAY_MILLIS: i64 = 12 * MILLIS_PER_HOUR;

/// How the sun relates to one altitude threshold over the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    AlwaysAbove,
    /// Half the time spent above the threshold, in whole milliseconds.
    Crosses(i64),
    NeverAbove,
}

impl Crossing {
    // Exactly +-1 counts as not crossing, and so does a window that rounds to
    // nothing. NaN lands on NeverAbove.
    fn from_cosine(cos_hour_angle: f64) -> Self {
        if cos_hour_angle <= -1.0 {
            return Crossing::AlwaysAbove;
        }
        if cos_hour_angle >= 1.0 || cos_hour_angle.is_nan() {
            return Crossing::NeverAbove;
        }
        let half_window =
            (cos_hour_angle.acos() / (2.0 * PI) * angles::MILLIS_PER_DAY).round() as i64;
        if half_window > 0 {
            Crossing::Crosses(half_window)
        } else {
            Crossing::NeverAbove
        }
    }
}

/// 12:00 UTC of `date`, in milliseconds since the Unix epoch.
pub fn noon_utc_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis() + 12 * MILLIS_PER_HOUR
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn compute(&self, coordinates: &Coordinates, date: NaiveDate) -> DayResult {
        let reference = noon_utc_millis(date);
        let geometry = angles::solar_geometry(reference, coordinates.longitude());

        let cos_horizon = angles::hour_angle_cosine(
            coordinates.latitude(),
            geometry.declination,
            self.config.horizon_altitude_deg(),
        );
        let cos_twilight = angles::hour_angle_cosine(
            coordinates.latitude(),
            geometry.declination,
            self.config.twilight_altitude_deg(),
        );
        trace!(
            reference,
            declination = angles::rad_to_deg(geometry.declination),
            transit = geometry.transit,
            cos_horizon,
            cos_twilight,
            mean_anomaly = angles::normalize_angle(angles::rad_to_deg(geometry.mean_anomaly)),
            "solar geometry"
        );

        let transit = angles::days_to_epoch_millis(geometry.transit);
        let around_transit = |half_window: i64| {
            (
                SolarEvent::from_epoch_millis(transit.saturating_sub(half_window)),
                SolarEvent::from_epoch_millis(transit.saturating_add(half_window)),
            )
        };

        let result = match (
            Crossing::from_cosine(cos_horizon),
            Crossing::from_cosine(cos_twilight),
        ) {
            (Crossing::AlwaysAbove, _) => DayResult::AlwaysDaytime,
            (Crossing::Crosses(horizon), Crossing::Crosses(twilight)) => {
                let (sunrise, sunset) = around_transit(horizon);
                let (dawn, dusk) = around_transit(twilight);
                DayResult::Typical {
                    dawn,
                    sunrise,
                    sunset,
                    dusk,
                }
            }
            // The twilight threshold lies below the horizon threshold, so a sun
            // that crosses the horizon can only stay above twilight.
            (Crossing::Crosses(horizon), _) => {
                let (sunrise, sunset) = around_transit(horizon);
                DayResult::AlwaysLight { sunrise, sunset }
            }
            (Crossing::NeverAbove, Crossing::Crosses(twilight)) => {
                let (dawn, dusk) = around_transit(twilight);
                DayResult::NeverDaytime { dawn, dusk }
            }
            // Twilight all day, only near the poles. Dawn and dusk widen to the
            // solar midnights on either side of the transit.
            (Crossing::NeverAbove, Crossing::AlwaysAbove) => {
                let (dawn, dusk) = around_transit(HALF_DAY_MILLIS);
                DayResult::NeverDaytime { dawn, dusk }
            }
            (Crossing::NeverAbove, Crossing::NeverAbove) => DayResult::NeverLight,
        };

        debug!(%date, regime = result.name(), "computed day");
        result
    }
}

/// Computes the day at `coordinates` with the default thresholds.
pub fn compute(coordinates: &Coordinates, date: NaiveDate) -> DayResult {
    Calculator::default().compute(coordinates, date)
}
