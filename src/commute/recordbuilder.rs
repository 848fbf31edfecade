use tracing::debug;

use crate::commute::commuteerror::InvalidInputError;
use crate::commute::dayclassifier::DayClassifier;
use crate::commute::dayrecord::DayRecord;
use crate::configuration::Configuration;

/// Turns the commute days of a configuration into `DayRecord`s.
pub struct RecordBuilder<'a> {
    configuration: &'a Configuration
}

impl<'a> RecordBuilder<'a> {
    pub fn new(configuration: &'a Configuration) -> RecordBuilder<'a> {
        RecordBuilder { configuration }
    }

    /// Records in chronological order. The cost is computed once, before
    /// the scan, so an invalid distance yields no records at all.
    pub fn build(&self) -> Result<Vec<DayRecord>, InvalidInputError> {
        let distance_km = self.configuration.distance_km();
        let cost = self.configuration.rates().cost(distance_km)?;

        let records: Vec<DayRecord> = DayClassifier::new(self.configuration)
            .iter()
            .map(|d| DayRecord::new(d, distance_km, cost))
            .collect();

        debug!(
            year = self.configuration.year(),
            records = records.len(),
            %cost,
            "built commute day records"
        );
        Ok(records)
    }
}

/// Shorthand for `RecordBuilder::new(configuration).build()`.
pub fn build_records(configuration: &Configuration) -> Result<Vec<DayRecord>, InvalidInputError> {
    RecordBuilder::new(configuration).build()
}
