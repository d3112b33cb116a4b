use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing_subscriber::EnvFilter;

use skylight::{Calculator, Coordinates, DayResult, Skylight, SkylightError, SolarEvent};

fn local(event: SolarEvent, tz: Tz) -> String {
    event.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

fn main() -> Result<(), SkylightError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skylight=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let places: &[(&str, f64, f64, Tz)] = &[
        ("Amsterdam", 52.3680, 4.9036, chrono_tz::Europe::Amsterdam),
        ("Svalbard", 77.8750, 20.9752, chrono_tz::Arctic::Longyearbyen),
        ("Indianapolis", 39.7684, -86.1581, chrono_tz::America::Indiana::Indianapolis),
        ("Tromsø", 69.6492, 18.9553, chrono_tz::Europe::Oslo),
    ];
    let dates = [
        NaiveDate::from_ymd_opt(2019, 1, 6),
        NaiveDate::from_ymd_opt(2019, 7, 20),
    ];

    let calculator = Calculator::default();
    for &(name, latitude, longitude, tz) in places {
        let coordinates = Coordinates::new(latitude, longitude)?;
        println!("=== {} ({:.4}, {:.4}) ===", name, latitude, longitude);
        for date in dates.into_iter().flatten() {
            let day = calculator.skylight_day(&coordinates, date);
            println!("{}: {}", day.date(), day.result().name());
            match *day.result() {
                DayResult::Typical {
                    dawn,
                    sunrise,
                    sunset,
                    dusk,
                } => {
                    println!("  dawn    {}", local(dawn, tz));
                    println!("  sunrise {}", local(sunrise, tz));
                    println!("  sunset  {}", local(sunset, tz));
                    println!("  dusk    {}", local(dusk, tz));
                }
                DayResult::AlwaysLight { sunrise, sunset } => {
                    println!("  sunrise {}", local(sunrise, tz));
                    println!("  sunset  {}", local(sunset, tz));
                }
                DayResult::NeverDaytime { dawn, dusk } => {
                    println!("  dawn    {}", local(dawn, tz));
                    println!("  dusk    {}", local(dusk, tz));
                }
                DayResult::AlwaysDaytime | DayResult::NeverLight => {}
            }
        }
        println!();
    }
    Ok(())
}
