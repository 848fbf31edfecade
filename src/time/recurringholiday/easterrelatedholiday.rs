use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::recurringholiday::RecurringHoliday;

/// Years for which the Easter computus below is valid.
pub const EASTER_MIN_YEAR: i32 = 1583;
pub const EASTER_MAX_YEAR: i32 = 4099;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox 
}

#[derive(Clone)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { 
            easter_type, 
            shift_days
        }
    }

    pub fn western(shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday::new(EasterType::Western, shift_days)
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

/// Easter Sunday as a Gregorian date, `None` outside
/// `EASTER_MIN_YEAR..=EASTER_MAX_YEAR`.
pub fn easter_sunday(easter_type: EasterType, year: i32) -> Option<NaiveDate> {
    if !(EASTER_MIN_YEAR..=EASTER_MAX_YEAR).contains(&year) {
        return None;
    }

    let g = year % 19;
    
    let p = match easter_type {
        EasterType::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            // Julian to Gregorian offset
            let e = year / 100 - year / 400 - 2;
            i - j + e
        },
        EasterType::Western => {
            let c = year / 100;
            let c_div_4 = c / 4;
            let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let h_div_28 = h / 28;
            let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
            i - j
        }
    };
    
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        easter_sunday(self.easter_type, year)
            .map(|easter_day| easter_day + Duration::days(self.shift_days))
            .into_iter()
            .collect()
    }
}
