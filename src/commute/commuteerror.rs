use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Problems detected while building a configuration, before any date is
/// classified.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("year {year} is outside the supported range {min}..={max}")]
    UnsupportedYear {
        year: i32,
        min: i32,
        max: i32
    },
    #[error("excluded range starts on {start} but ends on {end}")]
    MalformedRange {
        start: NaiveDate,
        end: NaiveDate
    },
    #[error("weekday number {0} is not an ISO weekday (1 = Monday ... 7 = Sunday)")]
    MalformedWeekday(u32),
    #[error("weekday pattern is empty")]
    EmptyWeekdayPattern,
    #[error("unknown holiday region '{0}'")]
    UnknownRegion(String),
    #[error("invalid holiday definition: {0}")]
    InvalidHolidayDefinition(String),
    #[error("holiday calendar '{0}' is referenced but never defined")]
    UnresolvedCalendar(String)
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("distance must not be negative, got {0} km")]
    NegativeDistance(Decimal),
    #[error("rate must not be negative, got {0}")]
    NegativeRate(Decimal),
    #[error("cost of {0} km exceeds the representable range")]
    Overflow(Decimal)
}

#[derive(Debug, Error)]
pub enum CommuteError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error)
}

impl CommuteError {
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CommuteError::Configuration(_))
    }

    pub fn is_invalid_input_error(&self) -> bool {
        matches!(self, CommuteError::InvalidInput(_))
    }
}

/// Deserializes a JSON value into `T`, turning a failure into a
/// `CommuteError::JsonParse`.
pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, CommuteError>
    where T: for<'a> serde::Deserialize<'a> {
    serde_json::from_value(json_value).map_err(CommuteError::JsonParse)
}
