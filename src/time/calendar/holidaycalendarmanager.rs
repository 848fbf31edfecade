use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use tracing::debug;

use crate::commute::commuteerror::{
    CommuteError,
    ConfigurationError,
    parse_json_value
};
use crate::time::calendar::germany;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayprovider::HolidayProvider;
use crate::time::calendar::jointcalendar::JointCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdaybeforeholiday::LastWeekdayBeforeHoliday;
use crate::time::recurringholiday::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};

fn invalid_definition(message: String) -> CommuteError {
    CommuteError::Configuration(ConfigurationError::InvalidHolidayDefinition(message))
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    #[serde(default = "western")]
    easter_type: EasterType,
    shift_days: i64
}

fn western() -> EasterType {
    EasterType::Western
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, CommuteError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.easter_type, json_prop.shift_days)))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, CommuteError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
        .ok_or_else(|| invalid_definition(format!(
            "occurrence {} of {} in month {}", json_prop.n, json_prop.weekday, json_prop.month
        )))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct LastWeekdayBeforeHolidayJsonProp {
    month: u32,
    day: u32,
    weekday: Weekday,
}

fn last_weekday_before_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, CommuteError> {
    let json_prop: LastWeekdayBeforeHolidayJsonProp = parse_json_value(json)?;
    let holiday = LastWeekdayBeforeHoliday::new(json_prop.month, json_prop.day, json_prop.weekday)
        .ok_or_else(|| invalid_definition(format!(
            "day {} of month {} does not exist", json_prop.day, json_prop.month
        )))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, CommuteError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day)
        .ok_or_else(|| invalid_definition(format!(
            "day {} of month {} does not exist", json_prop.day, json_prop.month
        )))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekdayBefore
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, CommuteError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated     => easter_related_holiday_from_json(json),
        HolidayType::FixedDate         => fixed_date_holiday_from_json(json),
        HolidayType::NthWeekday        => nth_weekday_from_json(json),
        HolidayType::LastWeekdayBefore => last_weekday_before_from_json(json)
    }
}

#[derive(Deserialize)]
enum CalendarType {
    SimpleCalendar,
    JointCalendar
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    name: String,
    calendar_type: CalendarType
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    #[serde(default)]
    recurring_holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>
}

fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, CommuteError> {
    let holiday_calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::new();
    for recurring_holiday_json in holiday_calendar_json.recurring_holidays.iter() {
        let recurring_holiday = get_recurring_holiday_from_json(recurring_holiday_json.clone())?;
        recurring_holidays.push(recurring_holiday);
    }

    Ok(Arc::new(SimpleCalendar::new(
        recurring_holidays,
        holiday_calendar_json.additional_holidays
    )))
}

#[derive(Deserialize)]
enum MethodOfJoint {
    Intersection,
    Union
}

#[derive(Deserialize)]
struct JointCalendarJsonProp {
    c1: String,
    c2: String,
    method_of_joint: MethodOfJoint
}

/// Registry of named holiday calendars.
///
/// Calendars come from the built-in German tables or from JSON
/// definitions. A `JointCalendar` definition refers to two calendars by
/// name, and those may appear later in the same JSON array:
/// `insert_obj_from_json_vec` retries failed entries until a pass makes no
/// progress.
pub struct HolidayCalendarManager {
    map: HashMap<String, Arc<dyn HolidayCalendar>>
}

impl HolidayCalendarManager {
    pub fn new() -> HolidayCalendarManager {
        HolidayCalendarManager { map: HashMap::new() }
    }

    pub fn with_builtin_calendars() -> HolidayCalendarManager {
        let mut manager = HolidayCalendarManager::new();
        for (name, calendar) in germany::builtin_calendars() {
            manager.insert(name.to_owned(), calendar);
        }
        manager
    }

    pub fn insert(&mut self, name: String, calendar: Arc<dyn HolidayCalendar>) {
        self.map.insert(name, calendar);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn HolidayCalendar>, ConfigurationError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::UnknownRegion(name.to_owned()))
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parses one calendar definition and registers it under its `name`.
    /// A later definition with the same name replaces the earlier one.
    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), CommuteError> {
        let calendar_typed_object: CalendarTypedObject = parse_json_value(json_value.clone())?;

        let calendar = match calendar_typed_object.calendar_type {
            CalendarType::SimpleCalendar => get_simple_calendar_from_json(json_value)?,
            CalendarType::JointCalendar => {
                let joint_prop: JointCalendarJsonProp = parse_json_value(json_value)?;
                let c1 = self.get(&joint_prop.c1)?;
                let c2 = self.get(&joint_prop.c2)?;
                let joint_calendar: Arc<dyn HolidayCalendar> = match joint_prop.method_of_joint {
                    MethodOfJoint::Intersection => Arc::new(JointCalendar::intersection(c1, c2)),
                    MethodOfJoint::Union        => Arc::new(JointCalendar::union(c1, c2)),
                };
                joint_calendar
            }
        };
        debug!(name = %calendar_typed_object.name, "registered holiday calendar");
        self.insert(calendar_typed_object.name, calendar);
        Ok(())
    }

    /// Registers every definition in `json_vec`.
    ///
    /// Entries that fail are retried in the next pass. The loop ends when
    /// all entries succeed, or with the last error when a pass leaves the
    /// set of failing entries unchanged (a missing or cyclic reference).
    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), CommuteError> {
        let mut remain_indices: Vec<usize> = (0..json_vec.len()).collect();

        loop {
            let mut new_remain_indices: Vec<usize> = Vec::new();
            let mut last_error: Option<CommuteError> = None;

            for &index in remain_indices.iter() {
                if let Err(error) = self.insert_obj_from_json(json_vec[index].clone()) {
                    new_remain_indices.push(index);
                    last_error = Some(error);
                }
            }

            let Some(error) = last_error else {
                return Ok(());
            };

            if remain_indices == new_remain_indices {
                return Err(match error {
                    CommuteError::Configuration(ConfigurationError::UnknownRegion(name)) => {
                        ConfigurationError::UnresolvedCalendar(name).into()
                    },
                    other => other
                });
            }

            remain_indices = new_remain_indices;
        }
    }
}

impl Default for HolidayCalendarManager {
    fn default() -> Self {
        HolidayCalendarManager::with_builtin_calendars()
    }
}

impl HolidayProvider for HolidayCalendarManager {
    fn holidays(&self, region: &str, year: i32) -> Result<HashSet<NaiveDate>, ConfigurationError> {
        self.check_year(year)?;
        let calendar = self.get(region)?;
        Ok(calendar.get_holiday_set(year))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builtin_regions_are_available() {
        let manager = HolidayCalendarManager::with_builtin_calendars();
        assert!(manager.contains("DE"));
        assert!(manager.contains("DE-BY"));
        assert_eq!(manager.holidays("DE", 2024).unwrap().len(), 11);
    }

    #[test]
    fn unknown_region() {
        let manager = HolidayCalendarManager::with_builtin_calendars();
        assert_eq!(
            manager.holidays("FR", 2024),
            Err(ConfigurationError::UnknownRegion("FR".to_owned()))
        );
    }

    #[test]
    fn unsupported_year() {
        let manager = HolidayCalendarManager::with_builtin_calendars();
        assert_eq!(
            manager.holidays("DE", 1500),
            Err(ConfigurationError::UnsupportedYear { year: 1500, min: 1583, max: 4099 })
        );
        assert!(manager.holidays("DE", 4100).is_err());
        assert!(manager.holidays("DE", 4099).is_ok());
    }

    #[test]
    fn simple_calendar_from_json() {
        let mut manager = HolidayCalendarManager::new();
        manager.insert_obj_from_json(json!({
            "name": "Company",
            "calendar_type": "SimpleCalendar",
            "recurring_holidays": [
                { "holiday_type": "FixedDate", "month": 12, "day": 24 },
                { "holiday_type": "EasterRelated", "easter_type": "Western", "shift_days": -3 },
                { "holiday_type": "NthWeekday", "month": 6, "n": 1, "weekday": "Fri" },
                { "holiday_type": "LastWeekdayBefore", "month": 11, "day": 23, "weekday": "Wed" }
            ],
            "additional_holidays": ["2024-08-16"]
        })).unwrap();

        let holidays = manager.holidays("Company", 2024).unwrap();
        let expected = HashSet::from([
            date(2024, 12, 24),
            date(2024, 3, 28),
            date(2024, 6, 7),
            date(2024, 11, 20),
            date(2024, 8, 16),
        ]);
        assert_eq!(holidays, expected);
    }

    #[test]
    fn joint_calendar_defined_before_its_parts() {
        let mut manager = HolidayCalendarManager::with_builtin_calendars();
        let definitions = vec![
            json!({ "name": "Mine", "calendar_type": "JointCalendar", "c1": "DE", "c2": "Local", "method_of_joint": "Union" }),
            json!({ "name": "Local", "calendar_type": "SimpleCalendar",
                    "recurring_holidays": [{ "holiday_type": "FixedDate", "month": 11, "day": 11 }] }),
        ];
        manager.insert_obj_from_json_vec(&definitions).unwrap();

        let holidays = manager.holidays("Mine", 2024).unwrap();
        assert_eq!(holidays.len(), 12);
        assert!(holidays.contains(&date(2024, 11, 11)));
    }

    #[test]
    fn joint_calendar_with_missing_part() {
        let mut manager = HolidayCalendarManager::new();
        let definitions = vec![
            json!({ "name": "Broken", "calendar_type": "JointCalendar", "c1": "Nowhere", "c2": "Nowhere", "method_of_joint": "Intersection" }),
        ];
        let error = manager.insert_obj_from_json_vec(&definitions).unwrap_err();
        assert!(matches!(
            error,
            CommuteError::Configuration(ConfigurationError::UnresolvedCalendar(ref name)) if name == "Nowhere"
        ));
    }

    #[test]
    fn impossible_fixed_date_is_rejected() {
        let mut manager = HolidayCalendarManager::new();
        let error = manager.insert_obj_from_json(json!({
            "name": "Bad",
            "calendar_type": "SimpleCalendar",
            "recurring_holidays": [{ "holiday_type": "FixedDate", "month": 2, "day": 31 }]
        })).unwrap_err();
        assert!(matches!(
            error,
            CommuteError::Configuration(ConfigurationError::InvalidHolidayDefinition(_))
        ));
    }
}
