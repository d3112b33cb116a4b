use std::f64::consts::PI;

use crate::types::SolarGeometry;

/// Unix time of J2000.0, 2000-01-01 12:00 UTC.
pub const J2000_EPOCH_MILLIS: i64 = 946_728_000_000;
pub const J2000_JULIAN_DAY: f64 = 2_451_545.0;
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

const J0: f64 = 0.0009;
const MEAN_ANOMALY_AT_J2000: f64 = 6.240_059_968;
const MEAN_ANOMALY_PER_DAY: f64 = 0.017_201_97;

// equation of center coefficients
const C1: f64 = 0.033_419_6;
const C2: f64 = 0.000_349_066;
const C3: f64 = 0.000_005_236;

const ARGUMENT_OF_PERIHELION: f64 = 1.796_593_063;
pub const OBLIQUITY: f64 = 0.409_279_71;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn days_since_j2000(epoch_millis: i64) -> f64 {
    (epoch_millis - J2000_EPOCH_MILLIS) as f64 / MILLIS_PER_DAY
}

pub fn days_to_epoch_millis(days: f64) -> i64 {
    (days * MILLIS_PER_DAY).round() as i64 + J2000_EPOCH_MILLIS
}

pub fn julian_day(epoch_millis: i64) -> f64 {
    J2000_JULIAN_DAY + days_since_j2000(epoch_millis)
}

/// Mean anomaly in radians, not reduced to a single turn.
pub fn mean_anomaly(days: f64) -> f64 {
    MEAN_ANOMALY_AT_J2000 + MEAN_ANOMALY_PER_DAY * days
}

pub fn equation_of_center(mean_anomaly: f64) -> f64 {
    C1 * mean_anomaly.sin() + C2 * (2.0 * mean_anomaly).sin() + C3 * (3.0 * mean_anomaly).sin()
}

pub fn ecliptic_longitude(mean_anomaly: f64) -> f64 {
    mean_anomaly + equation_of_center(mean_anomaly) + ARGUMENT_OF_PERIHELION + PI
}

pub fn solar_declination(ecliptic_longitude: f64) -> f64 {
    (ecliptic_longitude.sin() * OBLIQUITY.sin()).asin()
}

/// Equation of time in days; positive when the sun transits late.
pub fn equation_of_time(mean_anomaly: f64, ecliptic_longitude: f64) -> f64 {
    0.0053 * mean_anomaly.sin() - 0.0069 * (2.0 * ecliptic_longitude).sin()
}

/// Solar transit nearest to `days`, in days since J2000, for an observer at
/// `longitude` degrees east.
pub fn solar_transit(days: f64, longitude: f64, equation_of_time: f64) -> f64 {
    let arc_longitude = -longitude / 360.0;
    let n = (days - J0 - arc_longitude).round();
    n + J0 + arc_longitude + equation_of_time
}

/// Cosine of the hour angle at which the sun's centre sits at `altitude_deg`.
///
/// Values outside (-1, 1) mean the sun never crosses that altitude: at or
/// below -1 it stays above, at or above 1 it stays below.
pub fn hour_angle_cosine(latitude: f64, declination: f64, altitude_deg: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    (deg_to_rad(altitude_deg).sin() - lat_rad.sin() * declination.sin())
        / (lat_rad.cos() * declination.cos())
}

pub fn solar_geometry(epoch_millis: i64, longitude: f64) -> SolarGeometry {
    let days = days_since_j2000(epoch_millis);
    let m = mean_anomaly(days);
    let lambda = ecliptic_longitude(m);
    let eot = equation_of_time(m, lambda);
    SolarGeometry {
        julian_day: julian_day(epoch_millis),
        mean_anomaly: m,
        ecliptic_longitude: lambda,
        declination: solar_declination(lambda),
        equation_of_time: eot,
        transit: solar_transit(days, longitude, eot),
    }
}
