//! Built-in German public holiday calendars.
//!
//! Nationwide (`DE`) public holidays:
//! * New Year's Day (Jan 1)
//! * Good Friday (Easter - 2)
//! * Easter Sunday (Easter)
//! * Easter Monday (Easter + 1)
//! * Labour Day (May 1)
//! * Ascension Day (Easter + 39)
//! * Whit Sunday (Easter + 49)
//! * Whit Monday (Easter + 50)
//! * German Unity Day (Oct 3)
//! * Christmas Day (Dec 25)
//! * St. Stephen's Day (Dec 26)
//!
//! Christmas Eve and New Year's Eve are bank holidays, not public ones, and
//! are left out. Each state calendar is the union of `DE` with the state's
//! own public holidays. States whose holidays changed in recent years are
//! not built in; define them in the configuration instead.

use std::sync::Arc;

use chrono::Weekday;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::jointcalendar::JointCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdaybeforeholiday::LastWeekdayBeforeHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

pub const NATIONWIDE: &str = "DE";

pub const STATES: [&str; 9] = [
    "DE-BB", "DE-BW", "DE-BY", "DE-HE", "DE-NW", "DE-RP", "DE-SL", "DE-SN", "DE-ST"
];

enum Rule {
    Fixed(u32, u32),
    Easter(i64),
    WeekdayBefore(u32, u32, Weekday)
}

const NATIONWIDE_RULES: [Rule; 11] = [
    Rule::Fixed(1, 1),
    Rule::Easter(-2),
    Rule::Easter(0),
    Rule::Easter(1),
    Rule::Fixed(5, 1),
    Rule::Easter(39),
    Rule::Easter(49),
    Rule::Easter(50),
    Rule::Fixed(10, 3),
    Rule::Fixed(12, 25),
    Rule::Fixed(12, 26)
];

const EPIPHANY: Rule = Rule::Fixed(1, 6);
const CORPUS_CHRISTI: Rule = Rule::Easter(60);
const ASSUMPTION_DAY: Rule = Rule::Fixed(8, 15);
const REFORMATION_DAY: Rule = Rule::Fixed(10, 31);
const ALL_SAINTS_DAY: Rule = Rule::Fixed(11, 1);
const REPENTANCE_DAY: Rule = Rule::WeekdayBefore(11, 23, Weekday::Wed);

fn state_rules(region: &str) -> Option<Vec<Rule>> {
    let rules = match region {
        "DE-BB" => vec![REFORMATION_DAY],
        "DE-BW" => vec![EPIPHANY, CORPUS_CHRISTI, ALL_SAINTS_DAY],
        "DE-BY" => vec![EPIPHANY, CORPUS_CHRISTI, ALL_SAINTS_DAY],
        "DE-HE" => vec![CORPUS_CHRISTI],
        "DE-NW" => vec![CORPUS_CHRISTI, ALL_SAINTS_DAY],
        "DE-RP" => vec![CORPUS_CHRISTI, ALL_SAINTS_DAY],
        "DE-SL" => vec![CORPUS_CHRISTI, ASSUMPTION_DAY, ALL_SAINTS_DAY],
        "DE-SN" => vec![REFORMATION_DAY, REPENTANCE_DAY],
        "DE-ST" => vec![EPIPHANY, REFORMATION_DAY],
        _ => return None
    };
    Some(rules)
}

fn to_recurring_holiday(rule: &Rule) -> Option<Arc<dyn RecurringHoliday>> {
    let holiday: Arc<dyn RecurringHoliday> = match *rule {
        Rule::Fixed(month, day) => Arc::new(FixedDateHoliday::new(month, day)?),
        Rule::Easter(shift_days) => Arc::new(EasterRelatedHoliday::western(shift_days)),
        Rule::WeekdayBefore(month, day, weekday) => Arc::new(LastWeekdayBeforeHoliday::new(month, day, weekday)?)
    };
    Some(holiday)
}

fn calendar_from_rules(rules: &[Rule]) -> SimpleCalendar {
    SimpleCalendar::new(
        rules.iter().filter_map(to_recurring_holiday).collect(),
        Vec::new()
    )
}

pub fn nationwide() -> Arc<dyn HolidayCalendar> {
    Arc::new(calendar_from_rules(&NATIONWIDE_RULES))
}

/// The state calendar for an ISO 3166-2 code such as `DE-BY`, joined with
/// the nationwide holidays.
pub fn state(region: &str, nationwide: Arc<dyn HolidayCalendar>) -> Option<Arc<dyn HolidayCalendar>> {
    let own = calendar_from_rules(&state_rules(region)?);
    Some(Arc::new(JointCalendar::union(nationwide, Arc::new(own))))
}

/// Every built-in calendar keyed by region code.
pub fn builtin_calendars() -> Vec<(&'static str, Arc<dyn HolidayCalendar>)> {
    let de = nationwide();
    let mut calendars = vec![(NATIONWIDE, de.clone())];
    for region in STATES {
        if let Some(calendar) = state(region, de.clone()) {
            calendars.push((region, calendar));
        }
    }
    calendars
}
