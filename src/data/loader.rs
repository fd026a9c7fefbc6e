use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row, keyed by the data file's column headers.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRecord {
    fn into_launch(self) -> Result<LaunchRecord> {
        let outcome = Outcome::try_from(self.class)?;
        if !self.payload_mass_kg.is_finite() {
            bail!(super::model::SchemaError::NonFinitePayload(
                self.payload_mass_kg
            ));
        }
        Ok(LaunchRecord {
            flight_number: self.flight_number,
            site: self.launch_site,
            outcome,
            payload_mass_kg: self.payload_mass_kg,
            booster_version: self.booster_version,
            booster_variant: self.booster_category,
        })
    }
}

/// Load the launch table from a CSV file.
///
/// Expected header columns: `Flight Number`, `Launch Site`, `class`,
/// `Payload Mass (kg)`, `Booster Version`, `Booster Version Category`.
/// A missing file, a schema mismatch, or an empty table is an error; the
/// table is read exactly once per process.
pub fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening launch data file {}", path.display()))?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let launch = raw
            .into_launch()
            .with_context(|| format!("CSV row {row_no}"))?;
        records.push(launch);
    }

    if records.is_empty() {
        bail!("{}: no launch records", path.display());
    }

    let dataset = LaunchDataset::from_records(records);
    log::info!(
        "loaded {} launches across {} sites, payload {:.0}–{:.0} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.payload_extent.0,
        dataset.payload_extent.1,
    );
    Ok(dataset)
}
