use std::collections::HashSet;
use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::commute::commuteerror::ConfigurationError;
use crate::time::recurringholiday::easterrelatedholiday::{
    EASTER_MAX_YEAR,
    EASTER_MIN_YEAR
};

/// Resolves a region code and a year into that region's public holidays.
pub trait HolidayProvider {
    fn holidays(&self, region: &str, year: i32) -> Result<HashSet<NaiveDate>, ConfigurationError>;

    fn supported_years(&self) -> RangeInclusive<i32> {
        EASTER_MIN_YEAR..=EASTER_MAX_YEAR
    }

    fn check_year(&self, year: i32) -> Result<(), ConfigurationError> {
        let supported = self.supported_years();
        if supported.contains(&year) {
            Ok(())
        } else {
            Err(ConfigurationError::UnsupportedYear {
                year,
                min: *supported.start(),
                max: *supported.end()
            })
        }
    }
}
