use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;

/// The last occurrence of `weekday` strictly before `month`/`day`.
///
/// Repentance Day in Saxony, for instance, is the Wednesday before
/// November 23, and the last Monday of May is the Monday before June 1.
#[derive(Clone)]
pub struct LastWeekdayBeforeHoliday {
    month: u32,
    day: u32,
    weekday: Weekday,
}

impl LastWeekdayBeforeHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday) -> Option<LastWeekdayBeforeHoliday> {
        NaiveDate::from_ymd_opt(2001, month, day)?;
        Some(LastWeekdayBeforeHoliday { month, day, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayBeforeHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();
        let Some(anchor) = NaiveDate::from_ymd_opt(year, self.month, self.day) else {
            return holiday_set;
        };

        let days_back = ((anchor.weekday().num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7) as u64;
        // same weekday as the anchor: go back a full week
        let days_back = if days_back == 0 { 7 } else { days_back };

        if let Some(d) = anchor.checked_sub_days(Days::new(days_back)) {
            if d.year() == year {
                holiday_set.insert(d);
            }
        }
        holiday_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn repentance_day() {
        let holiday = LastWeekdayBeforeHoliday::new(11, 23, Weekday::Wed).unwrap();
        // 2024-11-23 is a Saturday
        assert_eq!(holiday.get_holiday(2024), HashSet::from([date(2024, 11, 20)]));
        // 2022-11-23 is itself a Wednesday
        assert_eq!(holiday.get_holiday(2022), HashSet::from([date(2022, 11, 16)]));
    }

    #[test]
    fn last_monday_of_may() {
        let holiday = LastWeekdayBeforeHoliday::new(6, 1, Weekday::Mon).unwrap();
        assert_eq!(holiday.get_holiday(2024), HashSet::from([date(2024, 5, 27)]));
    }

    #[test]
    fn never_leaks_into_previous_year() {
        let holiday = LastWeekdayBeforeHoliday::new(1, 1, Weekday::Fri).unwrap();
        assert!(holiday.get_holiday(2024).is_empty());
    }
}
