//! Sunrise, sunset and civil twilight for any location and date.
//!
//! ```
//! use chrono::NaiveDate;
//! use skylight::{compute, Coordinates, DayResult};
//!
//! let amsterdam = Coordinates::new(52.3680, 4.9036)?;
//! let date = NaiveDate::from_ymd_opt(2019, 1, 6).unwrap();
//! match compute(&amsterdam, date) {
//!     DayResult::Typical { sunrise, sunset, .. } => assert!(sunrise < sunset),
//!     other => panic!("unexpected {}", other.name()),
//! }
//! # Ok::<(), skylight::SkylightError>(())
//! ```

pub mod angles;
pub mod calculator;
pub mod error;
pub mod skylight;
pub mod types;

pub use angles::{hour_angle_cosine, solar_geometry};

pub use calculator::{compute, noon_utc_millis, Calculator};

pub use error::SkylightError;

pub use skylight::Skylight;

pub use types::{
    CalculatorConfig, Coordinates, DayResult, SkylightDay, SolarEvent, SolarGeometry,
    CIVIL_TWILIGHT_ALTITUDE_DEG, DEFAULT_HORIZON_ALTITUDE_DEG, STANDARD_REFRACTION_ALTITUDE_DEG,
};
