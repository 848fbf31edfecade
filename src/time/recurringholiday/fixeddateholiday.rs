use std::collections::HashSet;

use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

/// Holiday on the same month and day every year, never moved off a
/// weekend.
#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// `None` unless the month/day pair exists in at least one year
    /// (February 29 is accepted).
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(FixedDateHoliday { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .into_iter()
            .collect()
    }
}
