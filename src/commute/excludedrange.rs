use chrono::NaiveDate;

use crate::commute::commuteerror::ConfigurationError;
use crate::time::rangeofdates::RangeOfDates;

/// A declared absence (vacation, sick leave, remote work), bounds
/// inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcludedRange {
    range: RangeOfDates,
    reason: Option<String>
}

impl ExcludedRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<ExcludedRange, ConfigurationError> {
        Ok(ExcludedRange {
            range: RangeOfDates::new(start_date, end_date)?,
            reason: None
        })
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> ExcludedRange {
        self.reason = Some(reason.into());
        self
    }

    pub fn start_date(&self) -> NaiveDate {
        self.range.start_date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.range.end_date()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    #[inline]
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.range.contain(d)
    }
}
