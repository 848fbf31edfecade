use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;

/// Combines two calendars using logical operations (union or intersection).
///
/// # Union
/// A date is a holiday if it's a holiday in EITHER calendar.
/// Use case: a state calendar is the nationwide calendar OR the state's
/// own holidays.
///
/// # Intersection
/// A date is a holiday if it's a holiday in BOTH calendars.
/// Use case: "Holiday only if it's a holiday where I live AND where I work"
pub struct JointCalendar {
    c1: Arc<dyn HolidayCalendar>,
    c2: Arc<dyn HolidayCalendar>,
    logical_operator: fn(bool, bool) -> bool
}

impl JointCalendar {
    /// Creates a union of two calendars.
    pub fn union(c1: Arc<dyn HolidayCalendar>, c2: Arc<dyn HolidayCalendar>) -> JointCalendar {
        JointCalendar {
            c1,
            c2,
            logical_operator: |b1, b2| b1 || b2
        }
    }

    /// Creates an intersection of two calendars.
    pub fn intersection(c1: Arc<dyn HolidayCalendar>, c2: Arc<dyn HolidayCalendar>) -> JointCalendar {
        JointCalendar {
            c1,
            c2,
            logical_operator: |b1, b2| b1 && b2
        }
    }

    pub fn is_union(&self) -> bool {
        (self.logical_operator)(true, false)
    }
}

impl HolidayCalendar for JointCalendar {
    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        (self.logical_operator)(self.c1.is_holiday(d), self.c2.is_holiday(d))
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate> {
        let s1 = self.c1.get_holiday_set(year);
        let s2 = self.c2.get_holiday_set(year);

        if self.is_union() {
            s1.union(&s2).copied().collect()
        } else {
            s1.intersection(&s2).copied().collect()
        }
    }
}
