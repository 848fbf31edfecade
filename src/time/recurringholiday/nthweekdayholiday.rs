use std::collections::HashSet;

use chrono::{
    NaiveDate, 
    Weekday
};

use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_monday_of_october_2024() {
        let holiday = NthWeekdayHoliday::new(10, 1, Weekday::Mon).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 10, 7).unwrap();
        assert_eq!(holiday.get_holiday(2024), HashSet::from([expected]));
    }

    #[test]
    fn fifth_occurrence_may_not_exist() {
        // February 2023 has only four Mondays
        let holiday = NthWeekdayHoliday::new(2, 5, Weekday::Mon).unwrap();
        assert!(holiday.get_holiday(2023).is_empty());
    }

    #[test]
    fn rejects_out_of_range_arguments() {
        assert!(NthWeekdayHoliday::new(0, 1, Weekday::Mon).is_none());
        assert!(NthWeekdayHoliday::new(5, 6, Weekday::Mon).is_none());
    }
}
