use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Europe::{Amsterdam, Oslo};

use skylight::{compute, Calculator, Coordinates, DayResult, Skylight, SkylightError, SolarEvent};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn coords(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates::new(latitude, longitude).unwrap()
}

// ── Coordinates ──

#[test]
fn test_coordinates_accept_boundaries() {
    for &(lat, lon) in &[(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
        let c = coords(lat, lon);
        assert_eq!((c.latitude(), c.longitude()), (lat, lon));
    }
}

#[test]
fn test_coordinates_reject_out_of_range() {
    assert_eq!(
        Coordinates::new(90.5, 0.0),
        Err(SkylightError::LatitudeOutOfRange { latitude: 90.5 })
    );
    assert_eq!(
        Coordinates::new(0.0, -180.01),
        Err(SkylightError::LongitudeOutOfRange { longitude: -180.01 })
    );
    assert_eq!(
        Coordinates::new(f64::NAN, 0.0),
        Err(SkylightError::NonFiniteCoordinate)
    );
    assert_eq!(
        Coordinates::new(0.0, f64::INFINITY),
        Err(SkylightError::NonFiniteCoordinate)
    );
}

#[test]
fn test_error_messages() {
    let err = Coordinates::new(100.0, 0.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "latitude must be within [-90, 90] degrees, got 100"
    );
}

// ── SolarEvent ──

#[test]
fn test_solar_event_conversions() {
    let epoch = SolarEvent::from_epoch_millis(0);
    assert_eq!(epoch.to_utc(), Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(epoch.to_string(), "1970-01-01T00:00:00.000Z");

    let dt = New_York.with_ymd_and_hms(2019, 7, 20, 12, 0, 0).unwrap();
    let event = SolarEvent::from(dt);
    assert_eq!(event.epoch_millis(), 1_563_638_400_000);
    assert_eq!(event.with_timezone(&New_York), dt);
    assert_eq!(DateTime::<Utc>::from(event), dt.with_timezone(&Utc));
}

#[test]
fn test_solar_event_saturates() {
    assert_eq!(SolarEvent::from_epoch_millis(i64::MAX).to_utc(), DateTime::<Utc>::MAX_UTC);
    assert_eq!(SolarEvent::from_epoch_millis(i64::MIN).to_utc(), DateTime::<Utc>::MIN_UTC);
}

#[test]
fn test_solar_event_ordering() {
    let a = SolarEvent::from_epoch_millis(-5);
    let b = SolarEvent::from_epoch_millis(7);
    assert!(a < b);
    assert_eq!(a.max(b), b);
}

// ── DayResult ──

#[test]
fn test_light_window_is_half_open() {
    let at = SolarEvent::from_epoch_millis;
    let day = DayResult::Typical {
        dawn: at(100),
        sunrise: at(200),
        sunset: at(300),
        dusk: at(400),
    };
    assert!(!day.is_light_at(at(99)));
    assert!(day.is_light_at(at(100)));
    assert!(day.is_light_at(at(399)));
    assert!(!day.is_light_at(at(400)));
    assert!(!day.is_daytime_at(at(199)));
    assert!(day.is_daytime_at(at(200)));
    assert!(!day.is_daytime_at(at(300)));
    assert_eq!(day.events(), vec![at(100), at(200), at(300), at(400)]);
}

#[test]
fn test_eventless_days() {
    let at = SolarEvent::from_epoch_millis(0);
    assert!(DayResult::AlwaysDaytime.is_light_at(at));
    assert!(DayResult::AlwaysDaytime.is_daytime_at(at));
    assert!(!DayResult::NeverLight.is_light_at(at));
    assert!(!DayResult::NeverLight.is_daytime_at(at));
    assert!(DayResult::AlwaysDaytime.events().is_empty());
    assert!(DayResult::NeverLight.events().is_empty());
}

#[test]
fn test_partial_days() {
    let at = SolarEvent::from_epoch_millis;
    let light = DayResult::AlwaysLight {
        sunrise: at(10),
        sunset: at(20),
    };
    assert!(light.is_light_at(at(0)));
    assert!(!light.is_daytime_at(at(0)));
    assert!(light.is_daytime_at(at(15)));

    let dim = DayResult::NeverDaytime {
        dawn: at(10),
        dusk: at(20),
    };
    assert!(dim.is_light_at(at(15)));
    assert!(!dim.is_light_at(at(25)));
    assert!(!dim.is_daytime_at(at(15)));
}

// ── Skylight ──

#[test]
fn test_skylight_day_carries_date() {
    let calculator = Calculator::default();
    let amsterdam = coords(52.3680, 4.9036);
    let day = calculator.skylight_day(&amsterdam, date(2019, 1, 6));
    assert_eq!(day.date(), date(2019, 1, 6));
    assert_eq!(*day.result(), compute(&amsterdam, date(2019, 1, 6)));
    assert_eq!(day.into_result().name(), "typical");
}

#[test]
fn test_is_light_indianapolis() {
    let calculator = Calculator::default();
    let indianapolis = coords(39.7684, -86.1581);
    let noon = New_York.with_ymd_and_hms(2019, 7, 20, 12, 0, 0).unwrap();
    let night = New_York.with_ymd_and_hms(2019, 7, 20, 3, 0, 0).unwrap();
    assert!(calculator.is_light(&indianapolis, &noon));
    assert!(!calculator.is_dark(&indianapolis, &noon));
    assert!(calculator.is_dark(&indianapolis, &night));
}

#[test]
fn test_is_light_polar() {
    let calculator = Calculator::default();
    let svalbard = coords(77.8750, 20.9752);
    let tromso = coords(69.6492, 18.9553);
    let winter_noon = Oslo.with_ymd_and_hms(2019, 1, 6, 12, 0, 0).unwrap();
    let summer_midnight = Oslo.with_ymd_and_hms(2019, 6, 21, 0, 30, 0).unwrap();
    assert!(calculator.is_dark(&svalbard, &winter_noon));
    assert!(calculator.is_light(&tromso, &summer_midnight));
}

#[test]
fn test_is_light_uses_local_date() {
    let calculator = Calculator::default();
    let amsterdam = coords(52.3680, 4.9036);
    // 23:30 UTC on the 5th is already the 6th in Amsterdam
    let late = Amsterdam.with_ymd_and_hms(2019, 1, 6, 0, 30, 0).unwrap();
    assert_eq!(late.with_timezone(&Utc).date_naive(), date(2019, 1, 5));
    assert!(calculator.is_dark(&amsterdam, &late));
}

#[test]
fn test_days_from() {
    let calculator = Calculator::default();
    let amsterdam = coords(52.3680, 4.9036);
    let days = calculator.days_from(&amsterdam, date(2019, 1, 6), 3);
    let dates: Vec<NaiveDate> = days.iter().map(|d| d.date()).collect();
    assert_eq!(dates, vec![date(2019, 1, 6), date(2019, 1, 7), date(2019, 1, 8)]);
    for day in &days {
        assert_eq!(*day.result(), compute(&amsterdam, day.date()));
    }
    assert!(calculator.days_from(&amsterdam, date(2019, 1, 6), 0).is_empty());
}

#[test]
fn test_extreme_dates_still_classified() {
    let calculator = Calculator::default();
    for day in [NaiveDate::MIN, NaiveDate::MAX] {
        for c in [coords(0.0, 0.0), coords(89.0, 180.0), coords(-70.0, -45.0)] {
            let events = calculator.skylight_day(&c, day).result().events();
            assert!(events.windows(2).all(|w| w[0] < w[1]), "{} {:?}", day, events);
        }
    }
}

#[test]
fn test_upcoming_days() {
    let calculator = Calculator::default();
    let days = calculator.upcoming_days(&coords(52.3680, 4.9036));
    assert_eq!(days.len(), 2);
    assert_eq!(days[1].date(), days[0].date() + Duration::days(1));
    let utc_today = Utc::now().date_naive();
    assert!((days[0].date() - utc_today).num_days().abs() <= 1);
}

#[test]
fn test_skylight_as_trait_object() {
    let source: &dyn Skylight = &Calculator::default();
    let svalbard = coords(77.8750, 20.9752);
    let day = source.skylight_day(&svalbard, date(2019, 1, 6));
    assert_eq!(*day.result(), DayResult::NeverLight);
    assert_eq!(source.days_from(&svalbard, date(2019, 1, 6), 2).len(), 2);
}

// ── Serde ──

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use skylight::CalculatorConfig;

    #[test]
    fn test_day_result_is_tagged() {
        let json = serde_json::to_value(compute(&coords(77.8750, 20.9752), date(2019, 1, 6))).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "NeverLight" }));

        let day = DayResult::AlwaysLight {
            sunrise: SolarEvent::from_epoch_millis(1),
            sunset: SolarEvent::from_epoch_millis(2),
        };
        let json = serde_json::to_value(day).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "AlwaysLight", "sunrise": 1, "sunset": 2 })
        );
        assert_eq!(serde_json::from_value::<DayResult>(json).unwrap(), day);
    }

    #[test]
    fn test_coordinates_validated_on_deserialize() {
        let ok: Coordinates =
            serde_json::from_str(r#"{"latitude": 52.368, "longitude": 4.9036}"#).unwrap();
        assert_eq!(ok, coords(52.368, 4.9036));
        assert!(serde_json::from_str::<Coordinates>(r#"{"latitude": 91.0, "longitude": 0.0}"#).is_err());
    }

    #[test]
    fn test_config_validated_on_deserialize() {
        let json = serde_json::to_string(&CalculatorConfig::standard_refraction()).unwrap();
        let back: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CalculatorConfig::standard_refraction());
        assert!(serde_json::from_str::<CalculatorConfig>(
            r#"{"horizon_altitude_deg": -7.0, "twilight_altitude_deg": -6.0}"#
        )
        .is_err());
    }
}
