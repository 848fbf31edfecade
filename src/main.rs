use commuteallowance::commute::allowancesummary::AllowanceSummary;
use commuteallowance::commute::recordbuilder::RecordBuilder;
use commuteallowance::configuration::ConfigurationFile;
use commuteallowance::export::csvexporter::CsvExporter;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "json/commute_2024.json";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());

    let config_file = ConfigurationFile::from_path(&config_path)?;
    let (configuration, export_settings) = config_file.into_parts();

    let records = RecordBuilder::new(&configuration).build()?;
    let exporter = CsvExporter::new(export_settings);
    exporter.export(&records)?;

    let summary = AllowanceSummary::from_records(&records);
    info!(
        path = %exporter.settings().path().display(),
        "{}", summary
    );
    Ok(())
}
