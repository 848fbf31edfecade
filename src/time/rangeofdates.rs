use chrono::{
    Days,
    NaiveDate
};

use crate::commute::commuteerror::ConfigurationError;
use crate::time::utility::{first_day_of_year, last_day_of_year};

/// Closed interval of calendar dates, both bounds included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<RangeOfDates, ConfigurationError> {
        if start_date > end_date {
            Err(ConfigurationError::MalformedRange { start: start_date, end: end_date })
        } else {
            Ok(RangeOfDates { start_date, end_date })
        }
    }

    /// January 1 to December 31 of `year`. `None` when chrono cannot
    /// represent the year.
    pub fn year(year: i32) -> Option<RangeOfDates> {
        let start_date = first_day_of_year(year)?;
        let end_date = last_day_of_year(year)?;
        Some(RangeOfDates { start_date, end_date })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            range_of_dates: *self,
            index: 0,
        }
    }
}

impl IntoIterator for &RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> RangeOfDatesIterator {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    range_of_dates: RangeOfDates,
    index: usize,
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.start_date().checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range_of_dates.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_reversed_bounds() {
        let result = RangeOfDates::new(date(2024, 3, 2), date(2024, 3, 1));
        assert_eq!(
            result,
            Err(ConfigurationError::MalformedRange { start: date(2024, 3, 2), end: date(2024, 3, 1) })
        );
    }

    #[test]
    fn single_day_range_contains_only_that_day() {
        let range = RangeOfDates::new(date(2024, 5, 7), date(2024, 5, 7)).unwrap();
        assert_eq!(range.len(), 1);
        assert!(range.contain(date(2024, 5, 7)));
        assert!(!range.contain(date(2024, 5, 6)));
        assert!(!range.contain(date(2024, 5, 8)));
    }

    #[test]
    fn leap_year_covers_february_29() {
        let range = RangeOfDates::year(2024).unwrap();
        assert_eq!(range.len(), 366);
        let dates: Vec<NaiveDate> = range.iter().collect();
        assert_eq!(dates.len(), 366);
        assert!(dates.contains(&date(2024, 2, 29)));
        assert_eq!(dates.first(), Some(&date(2024, 1, 1)));
        assert_eq!(dates.last(), Some(&date(2024, 12, 31)));
    }

    #[test]
    fn common_year_has_365_days() {
        let range = RangeOfDates::year(2023).unwrap();
        assert_eq!(range.iter().count(), 365);
    }

    #[test]
    fn iteration_is_restartable() {
        let range = RangeOfDates::new(date(2024, 1, 30), date(2024, 2, 2)).unwrap();
        let first: Vec<NaiveDate> = range.iter().collect();
        let second: Vec<NaiveDate> = (&range).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}
