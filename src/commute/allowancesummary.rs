use std::fmt;

use rust_decimal::Decimal;

use crate::commute::dayrecord::DayRecord;

/// Totals over a sequence of day records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AllowanceSummary {
    days: usize,
    total_km: Decimal,
    total_cost: Decimal
}

impl AllowanceSummary {
    pub fn from_records(records: &[DayRecord]) -> AllowanceSummary {
        records.iter().fold(AllowanceSummary::default(), |summary, record| AllowanceSummary {
            days: summary.days + 1,
            total_km: summary.total_km + record.distance_km(),
            total_cost: summary.total_cost + record.cost()
        })
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn total_km(&self) -> Decimal {
        self.total_km
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }
}

impl fmt::Display for AllowanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} commute days, {} km, {:.2} total", self.days, self.total_km, self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn totals() {
        let cost = Decimal::from_str("9.42").unwrap();
        let records: Vec<DayRecord> = (1..=3)
            .map(|day| DayRecord::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), Decimal::new(29, 0), cost))
            .collect();
        let summary = AllowanceSummary::from_records(&records);
        assert_eq!(summary.days(), 3);
        assert_eq!(summary.total_km(), Decimal::new(87, 0));
        assert_eq!(summary.total_cost(), Decimal::from_str("28.26").unwrap());
        assert_eq!(summary.to_string(), "3 commute days, 87 km, 28.26 total");
    }

    #[test]
    fn empty() {
        let summary = AllowanceSummary::from_records(&[]);
        assert_eq!(summary.days(), 0);
        assert_eq!(summary.total_cost(), Decimal::ZERO);
    }
}
