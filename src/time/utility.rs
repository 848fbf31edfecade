use chrono::{
    NaiveDate,
    Weekday
};

/// Maps an ISO 8601 weekday number (Monday = 1 ... Sunday = 7).
pub fn weekday_from_iso (number: u32) -> Option<Weekday> {
    if (1..=7).contains(&number) {
        Weekday::try_from((number - 1) as u8).ok()
    } else {
        None
    }
}

pub fn first_day_of_year (year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

pub fn last_day_of_year (year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}
