use chrono::{Datelike, NaiveDate};

use crate::configuration::Configuration;
use crate::time::rangeofdates::RangeOfDatesIterator;

/// Decides which dates of the configured year are commute days.
///
/// A date qualifies when its weekday is in the pattern, it is not a
/// holiday and no excluded range contains it. The weekday test runs first
/// and short-circuits the other two.
#[derive(Clone, Copy)]
pub struct DayClassifier<'a> {
    configuration: &'a Configuration
}

impl<'a> DayClassifier<'a> {
    pub fn new(configuration: &'a Configuration) -> DayClassifier<'a> {
        DayClassifier { configuration }
    }

    pub fn is_commute_day(&self, d: NaiveDate) -> bool {
        self.configuration.weekday_pattern().contains(d.weekday())
            && !self.is_holiday(d)
            && !self.is_excluded(d)
    }

    #[inline]
    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.configuration.holiday_set().contains(&d)
    }

    /// True if any excluded range contains `d`. Overlapping ranges need no
    /// special treatment.
    pub fn is_excluded(&self, d: NaiveDate) -> bool {
        self.configuration
            .excluded_ranges()
            .iter()
            .any(|range| range.contains(d))
    }

    /// Commute days from January 1 to December 31, in order. Every call
    /// starts a fresh scan.
    pub fn iter(&self) -> CommuteDays<'a> {
        CommuteDays {
            classifier: *self,
            dates: self.configuration.days().iter()
        }
    }
}

impl<'a> IntoIterator for &DayClassifier<'a> {
    type Item = NaiveDate;
    type IntoIter = CommuteDays<'a>;

    fn into_iter(self) -> CommuteDays<'a> {
        self.iter()
    }
}

pub struct CommuteDays<'a> {
    classifier: DayClassifier<'a>,
    dates: RangeOfDatesIterator
}

impl Iterator for CommuteDays<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let classifier = self.classifier;
        self.dates.find(|&d| classifier.is_commute_day(d))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.dates.size_hint().1)
    }
}
