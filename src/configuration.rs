use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::RangeInclusive;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::commute::allowancecalculator::AllowanceRates;
use crate::commute::commuteerror::{
    CommuteError,
    ConfigurationError
};
use crate::commute::excludedrange::ExcludedRange;
use crate::commute::weekdaypattern::WeekdayPattern;
use crate::export::csvexporter::ExportSettings;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;
use crate::time::calendar::holidayprovider::HolidayProvider;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::recurringholiday::easterrelatedholiday::{
    EASTER_MAX_YEAR,
    EASTER_MIN_YEAR
};

/// Years the built-in holiday calendars can compute.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = EASTER_MIN_YEAR..=EASTER_MAX_YEAR;

/// Everything the commute-day computation needs, validated once and read
/// only afterwards.
#[derive(Clone, Debug)]
pub struct Configuration {
    year: i32,
    days: RangeOfDates,
    distance_km: Decimal,
    weekday_pattern: WeekdayPattern,
    rates: AllowanceRates,
    excluded_ranges: Vec<ExcludedRange>,
    holiday_set: HashSet<NaiveDate>
}

impl Configuration {
    /// Fails with `ConfigurationError::UnsupportedYear` outside
    /// `SUPPORTED_YEARS`. Excluded ranges are already well-formed by
    /// construction. The distance is checked when the cost is computed.
    pub fn new(
        year: i32,
        distance_km: Decimal,
        weekday_pattern: WeekdayPattern,
        rates: AllowanceRates,
        excluded_ranges: Vec<ExcludedRange>,
        holiday_set: HashSet<NaiveDate>
    ) -> Result<Configuration, ConfigurationError> {
        let unsupported = || ConfigurationError::UnsupportedYear {
            year,
            min: *SUPPORTED_YEARS.start(),
            max: *SUPPORTED_YEARS.end()
        };
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(unsupported());
        }
        let days = RangeOfDates::year(year).ok_or_else(unsupported)?;
        if weekday_pattern.is_empty() {
            return Err(ConfigurationError::EmptyWeekdayPattern);
        }

        Ok(Configuration {
            year,
            days,
            distance_km,
            weekday_pattern,
            rates,
            excluded_ranges,
            holiday_set
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// January 1 to December 31 of the configured year.
    pub fn days(&self) -> &RangeOfDates {
        &self.days
    }

    pub fn distance_km(&self) -> Decimal {
        self.distance_km
    }

    pub fn weekday_pattern(&self) -> WeekdayPattern {
        self.weekday_pattern
    }

    pub fn rates(&self) -> &AllowanceRates {
        &self.rates
    }

    pub fn excluded_ranges(&self) -> &[ExcludedRange] {
        &self.excluded_ranges
    }

    pub fn holiday_set(&self) -> &HashSet<NaiveDate> {
        &self.holiday_set
    }
}

#[derive(Deserialize)]
struct ExcludedRangeJsonProp {
    start: NaiveDate,
    end: NaiveDate,
    #[serde(default)]
    reason: Option<String>
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    year: i32,
    distance_km: Decimal,
    weekdays: Vec<u32>,
    #[serde(default)]
    rates: AllowanceRates,
    region: String,
    #[serde(default)]
    holiday_calendars: Vec<serde_json::Value>,
    #[serde(default)]
    excluded_ranges: Vec<ExcludedRangeJsonProp>,
    #[serde(default)]
    export: ExportSettings
}

/// A configuration file: the computation inputs plus where and how to
/// export the result.
pub struct ConfigurationFile {
    configuration: Configuration,
    region: String,
    export: ExportSettings
}

impl ConfigurationFile {
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn export(&self) -> &ExportSettings {
        &self.export
    }

    pub fn into_parts(self) -> (Configuration, ExportSettings) {
        (self.configuration, self.export)
    }

    pub fn from_path(file_path: impl AsRef<Path>) -> Result<ConfigurationFile, CommuteError> {
        let file = File::open(file_path.as_ref())?;
        info!(path = %file_path.as_ref().display(), "reading configuration");
        ConfigurationFile::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ConfigurationFile, CommuteError> {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        ConfigurationFile::from_json_value(json_value)
    }

    /// Validates every input before any date is looked at: weekday
    /// numbers, excluded ranges, rates, the year and the holiday region
    /// (built-in or defined under `holiday_calendars`).
    pub fn from_json_value(json_value: serde_json::Value) -> Result<ConfigurationFile, CommuteError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;

        let weekday_pattern = WeekdayPattern::from_iso_numbers(&json_prop.weekdays)?;
        let rates = json_prop.rates.validated()?;

        let mut excluded_ranges = Vec::with_capacity(json_prop.excluded_ranges.len());
        for range_prop in json_prop.excluded_ranges {
            let range = ExcludedRange::new(range_prop.start, range_prop.end)?;
            excluded_ranges.push(match range_prop.reason {
                Some(reason) => range.with_reason(reason),
                None => range
            });
        }

        let mut calendars = HolidayCalendarManager::with_builtin_calendars();
        calendars.insert_obj_from_json_vec(&json_prop.holiday_calendars)?;
        let holiday_set = calendars.holidays(&json_prop.region, json_prop.year)?;
        info!(
            region = %json_prop.region,
            year = json_prop.year,
            holidays = holiday_set.len(),
            "resolved public holidays"
        );

        let configuration = Configuration::new(
            json_prop.year,
            json_prop.distance_km,
            weekday_pattern,
            rates,
            excluded_ranges,
            holiday_set
        )?;

        Ok(ConfigurationFile {
            configuration,
            region: json_prop.region,
            export: json_prop.export
        })
    }
}
