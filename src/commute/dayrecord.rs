use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

/// One commute day as handed to the exporter. Formatting is left to the
/// exporter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRecord {
    date: NaiveDate,
    distance_km: Decimal,
    cost: Decimal
}

impl DayRecord {
    pub fn new(date: NaiveDate, distance_km: Decimal, cost: Decimal) -> DayRecord {
        DayRecord { date, distance_km, cost }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// English display name, e.g. "Thursday".
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }

    pub fn distance_km(&self) -> Decimal {
        self.distance_km
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_of_leap_day() {
        let record = DayRecord::new(
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            Decimal::new(29, 0),
            Decimal::new(942, 2)
        );
        assert_eq!(record.weekday(), Weekday::Thu);
        assert_eq!(record.weekday_name(), "Thursday");
    }

    #[test]
    fn weekday_names_cover_the_week() {
        // 2024-01-01 is a Monday
        let names: Vec<String> = (1..=7)
            .map(|d| DayRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
                Decimal::ZERO,
                Decimal::ZERO
            ).weekday_name())
            .collect();
        assert_eq!(names, ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]);
    }
}
