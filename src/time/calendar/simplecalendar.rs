use std::collections::HashSet;
use std::sync::Arc;

use chrono::{
    Datelike, 
    NaiveDate
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

pub struct SimpleCalendar {
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: HashSet<NaiveDate>
}

impl SimpleCalendar {
    /// Creates a new SimpleCalendar.
    /// 
    /// # Arguments
    /// * `recurring_holidays` - List of recurring holiday rules
    /// * `additional_holidays` - One-time holidays (takes ownership)
    pub fn new(
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
        additional_holidays: Vec<NaiveDate>
    ) -> SimpleCalendar {
        SimpleCalendar {
            recurring_holidays,
            additional_holidays: additional_holidays.into_iter().collect()
        }
    }

    pub fn is_recurring_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|r| r.is_holiday(&d))
    }

    #[inline]
    pub fn is_additional_holiday(&self, d: NaiveDate) -> bool {
        self.additional_holidays.contains(&d)
    }

    pub fn recurring_holiday_count(&self) -> usize {
        self.recurring_holidays.len()
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        // additional holidays are a plain lookup, check them first
        self.is_additional_holiday(d) || self.is_recurring_holiday(d)
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::with_capacity(16);

        for r in self.recurring_holidays.iter() {
            holiday_set.extend(r.get_holiday(year));
        }

        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|d| d.year() == year)
                .copied()
        );

        holiday_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn combines_recurring_and_additional_holidays() {
        let calendar = SimpleCalendar::new(
            vec![Arc::new(FixedDateHoliday::new(1, 1).unwrap())],
            vec![date(2024, 7, 15), date(2025, 7, 15)]
        );
        assert_eq!(
            calendar.get_holiday_set(2024),
            HashSet::from([date(2024, 1, 1), date(2024, 7, 15)])
        );
        assert!(calendar.is_holiday(date(2025, 7, 15)));
        assert!(calendar.is_holiday(date(2025, 1, 1)));
        assert!(!calendar.is_holiday(date(2025, 1, 2)));
    }

    #[test]
    fn weekends_are_not_holidays() {
        let calendar = SimpleCalendar::new(Vec::new(), Vec::new());
        // 2024-01-06 is a Saturday
        assert!(!calendar.is_holiday(date(2024, 1, 6)));
        assert!(calendar.get_holiday_set(2024).is_empty());
    }
}
