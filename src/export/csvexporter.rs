use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::commute::commuteerror::CommuteError;
use crate::commute::dayrecord::DayRecord;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    path: PathBuf,
    currency_symbol: String,
    decimal_separator: char
}

impl ExportSettings {
    pub fn new(path: impl Into<PathBuf>) -> ExportSettings {
        ExportSettings {
            path: path.into(),
            ..ExportSettings::default()
        }
    }

    pub fn with_currency_symbol(mut self, currency_symbol: impl Into<String>) -> ExportSettings {
        self.currency_symbol = currency_symbol.into();
        self
    }

    pub fn with_decimal_separator(mut self, decimal_separator: char) -> ExportSettings {
        self.decimal_separator = decimal_separator;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            path: PathBuf::from("commute_allowance.csv"),
            currency_symbol: "€".to_owned(),
            decimal_separator: ','
        }
    }
}

/// Writes day records as a semicolon-delimited table:
///
/// ```text
/// Date;Weekday;Kilometers;Cost (€)
/// 02.01.2024;Tuesday;29;9,42
/// ```
pub struct CsvExporter {
    settings: ExportSettings
}

impl CsvExporter {
    pub fn new(settings: ExportSettings) -> CsvExporter {
        CsvExporter { settings }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    fn format_decimal(&self, x: Decimal) -> String {
        self.localize(x.normalize().to_string())
    }

    fn format_cost(&self, x: Decimal) -> String {
        self.localize(format!("{:.2}", x))
    }

    fn localize(&self, s: String) -> String {
        if self.settings.decimal_separator == '.' {
            s
        } else {
            s.replace('.', &self.settings.decimal_separator.to_string())
        }
    }

    pub fn write<W: Write>(&self, records: &[DayRecord], writer: W) -> Result<(), CommuteError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        let cost_header = format!("Cost ({})", self.settings.currency_symbol);
        csv_writer.write_record(["Date", "Weekday", "Kilometers", cost_header.as_str()])?;

        for record in records {
            csv_writer.write_record([
                record.date().format(DATE_FORMAT).to_string(),
                record.weekday_name(),
                self.format_decimal(record.distance_km()),
                self.format_cost(record.cost())
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self, records: &[DayRecord]) -> Result<String, CommuteError> {
        let mut buffer: Vec<u8> = Vec::new();
        self.write(records, &mut buffer)?;
        // every field written above is valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes the table to the configured path, replacing any existing
    /// file.
    pub fn export(&self, records: &[DayRecord]) -> Result<(), CommuteError> {
        let file = File::create(&self.settings.path)?;
        self.write(records, file)?;
        info!(path = %self.settings.path.display(), rows = records.len(), "wrote commute allowance table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;

    fn record(m: u32, d: u32, km: &str, cost: &str) -> DayRecord {
        DayRecord::new(
            NaiveDate::from_ymd_opt(2024, m, d).unwrap(),
            Decimal::from_str(km).unwrap(),
            Decimal::from_str(cost).unwrap()
        )
    }

    #[test]
    fn german_layout() {
        let exporter = CsvExporter::new(ExportSettings::default());
        let records = vec![record(1, 2, "29", "9.42"), record(1, 4, "29", "9.42")];
        assert_eq!(
            exporter.to_csv_string(&records).unwrap(),
            "Date;Weekday;Kilometers;Cost (€)\n02.01.2024;Tuesday;29;9,42\n04.01.2024;Thursday;29;9,42\n"
        );
    }

    #[test]
    fn whole_costs_keep_two_decimals() {
        let exporter = CsvExporter::new(ExportSettings::default());
        let csv = exporter.to_csv_string(&[record(3, 5, "20.0", "6")]).unwrap();
        assert_eq!(csv.lines().nth(1), Some("05.03.2024;Tuesday;20;6,00"));
    }

    #[test]
    fn fractional_distance_and_custom_separator() {
        let settings = ExportSettings::default()
            .with_currency_symbol("EUR")
            .with_decimal_separator('.');
        let exporter = CsvExporter::new(settings);
        let csv = exporter.to_csv_string(&[record(3, 5, "12.5", "3.75")]).unwrap();
        assert_eq!(csv, "Date;Weekday;Kilometers;Cost (EUR)\n05.03.2024;Tuesday;12.5;3.75\n");
    }

    #[test]
    fn empty_table_has_header_only() {
        let exporter = CsvExporter::new(ExportSettings::default());
        assert_eq!(exporter.to_csv_string(&[]).unwrap(), "Date;Weekday;Kilometers;Cost (€)\n");
    }
}
