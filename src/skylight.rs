use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::calculator::Calculator;
use crate::types::{Coordinates, SkylightDay, SolarEvent};

/// A source of per-day sun information.
///
/// Only [`Skylight::skylight_day`] is required; the rest is derived from it.
pub trait Skylight {
    fn skylight_day(&self, coordinates: &Coordinates, date: NaiveDate) -> SkylightDay;

    /// Whether it is light (sun above civil twilight) at `at`.
    ///
    /// The day looked up is the calendar date of `at` in its own time zone.
    fn is_light<Tz: TimeZone>(&self, coordinates: &Coordinates, at: &DateTime<Tz>) -> bool
    where
        Self: Sized,
    {
        let instant = SolarEvent::from_epoch_millis(at.timestamp_millis());
        self.skylight_day(coordinates, at.date_naive())
            .result()
            .is_light_at(instant)
    }

    fn is_dark<Tz: TimeZone>(&self, coordinates: &Coordinates, at: &DateTime<Tz>) -> bool
    where
        Self: Sized,
    {
        !self.is_light(coordinates, at)
    }

    /// Up to `count` consecutive days starting at `start`.
    fn days_from(
        &self,
        coordinates: &Coordinates,
        start: NaiveDate,
        count: usize,
    ) -> Vec<SkylightDay> {
        start
            .iter_days()
            .take(count)
            .map(|date| self.skylight_day(coordinates, date))
            .collect()
    }

    /// Today and tomorrow, by the host's local calendar.
    fn upcoming_days(&self, coordinates: &Coordinates) -> Vec<SkylightDay> {
        self.days_from(coordinates, Local::now().date_naive(), 2)
    }
}

impl Skylight for Calculator {
    fn skylight_day(&self, coordinates: &Coordinates, date: NaiveDate) -> SkylightDay {
        SkylightDay::new(date, self.compute(coordinates, date))
    }
}
