use std::collections::HashSet;

use chrono::NaiveDate;

/// A source of public holidays for one region.
///
/// Unlike a business-day calendar, weekends are never holidays here: which
/// weekdays count is decided by the commuter's weekday pattern.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate>;
}
