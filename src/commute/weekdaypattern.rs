use std::fmt;

use chrono::Weekday;

use crate::commute::commuteerror::ConfigurationError;
use crate::time::utility::weekday_from_iso;

/// Weekdays on which the commute normally happens.
///
/// Stored as a bitmask, one bit per day: Mon(0), Tue(1), ..., Sun(6).
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdayPattern(u8);

impl WeekdayPattern {
    pub fn new<I>(weekdays: I) -> WeekdayPattern
        where I: IntoIterator<Item = Weekday> {
        let mut mask = 0u8;
        for weekday in weekdays {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekdayPattern(mask)
    }

    /// Builds a pattern from ISO weekday numbers (Monday = 1 ... Sunday = 7).
    /// Duplicates are ignored. An empty list or a number outside 1..=7 is a
    /// configuration error.
    pub fn from_iso_numbers(numbers: &[u32]) -> Result<WeekdayPattern, ConfigurationError> {
        let mut weekdays = Vec::with_capacity(numbers.len());
        for &number in numbers {
            let weekday = weekday_from_iso(number).ok_or(ConfigurationError::MalformedWeekday(number))?;
            weekdays.push(weekday);
        }
        if weekdays.is_empty() {
            return Err(ConfigurationError::EmptyWeekdayPattern);
        }
        Ok(WeekdayPattern::new(weekdays))
    }

    #[inline]
    pub fn contains(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in Monday-first order.
    pub fn weekdays(&self) -> Vec<Weekday> {
        let mut weekdays = Vec::with_capacity(7);
        for day in 0..7u8 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day) {
                    weekdays.push(weekday);
                }
            }
        }
        weekdays
    }
}

impl fmt::Debug for WeekdayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.weekdays()).finish()
    }
}
