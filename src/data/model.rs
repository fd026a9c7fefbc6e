use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – the binary landing/launch result
// ---------------------------------------------------------------------------

/// Launch outcome: the `class` column, 1 = success, 0 = failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric value as stored in the source table (0 or 1).
    pub fn value(self) -> u32 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

/// A row that violates the table schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("outcome must be 0 or 1, got {0}")]
    InvalidOutcome(u8),
    #[error("payload mass must be a finite number, got {0}")]
    NonFinitePayload(f64),
}

impl TryFrom<u8> for Outcome {
    type Error = SchemaError;

    fn try_from(raw: u8) -> Result<Self, SchemaError> {
        match raw {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(SchemaError::InvalidOutcome(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: u32,
    /// Launch site label, e.g. "CCAFS LC-40".
    pub site: String,
    pub outcome: Outcome,
    pub payload_mass_kg: f64,
    /// Full booster serial, e.g. "F9 FT B1021.1". Shown in the data table.
    pub booster_version: String,
    /// Booster hardware variant, e.g. "FT". Keys the scatter colors.
    pub booster_variant: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed option lists and payload extent.
///
/// Built once at startup and read-only afterwards; both chart handlers
/// borrow it and never mutate it.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites. Drives the site selector.
    pub sites: Vec<String>,
    /// Sorted distinct booster variants. Drives the scatter color map.
    pub booster_variants: Vec<String>,
    /// Global (min, max) of the payload mass column, in kilograms.
    pub payload_extent: (f64, f64),
}

impl LaunchDataset {
    /// Build the option lists and payload extent from the loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = records.iter().map(|r| r.site.clone()).collect();
        sites.sort();
        sites.dedup();

        let mut booster_variants: Vec<String> =
            records.iter().map(|r| r.booster_variant.clone()).collect();
        booster_variants.sort();
        booster_variants.dedup();

        let payload_extent = records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg)),
        );
        let payload_extent = if records.is_empty() {
            (0.0, 0.0)
        } else {
            payload_extent
        };

        LaunchDataset {
            records,
            sites,
            booster_variants,
            payload_extent,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// User inputs: site selection and payload range
// ---------------------------------------------------------------------------

/// The site selector value: every site, or one specific launch site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Human-readable label, as shown in the selector and chart titles.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether a row at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

/// Payload mass bounds in kilograms, inclusive on both ends.
///
/// An inverted range (`low > high`) is representable; nothing passes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// The full extent of a dataset: the control's initial value.
    pub fn full(dataset: &LaunchDataset) -> Self {
        let (low, high) = dataset.payload_extent;
        PayloadRange { low, high }
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.low && mass_kg <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, outcome: Outcome, payload: f64, variant: &str) -> LaunchRecord {
        LaunchRecord {
            flight_number: 0,
            site: site.to_string(),
            outcome,
            payload_mass_kg: payload,
            booster_version: format!("F9 {variant} B0000"),
            booster_variant: variant.to_string(),
        }
    }

    #[test]
    fn outcome_parses_binary_values_only() {
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert!(matches!(
            Outcome::try_from(2),
            Err(SchemaError::InvalidOutcome(2))
        ));
    }

    #[test]
    fn dataset_derives_sorted_unique_options_and_extent() {
        let ds = LaunchDataset::from_records(vec![
            record("B", Outcome::Success, 500.0, "FT"),
            record("A", Outcome::Failure, 2500.0, "v1.0"),
            record("B", Outcome::Success, 1500.0, "FT"),
        ]);
        assert_eq!(ds.sites, vec!["A", "B"]);
        assert_eq!(ds.booster_variants, vec!["FT", "v1.0"]);
        assert_eq!(ds.payload_extent, (500.0, 2500.0));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn payload_range_is_inclusive_on_both_ends() {
        let range = PayloadRange::new(1000.0, 2000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn inverted_payload_range_contains_nothing() {
        let range = PayloadRange::new(2000.0, 1000.0);
        assert!(!range.contains(1500.0));
        assert!(!range.contains(2000.0));
        assert!(!range.contains(1000.0));
    }

    #[test]
    fn site_selection_matches() {
        let all = SiteSelection::All;
        let one = SiteSelection::Site("CCAFS LC-40".to_string());
        assert!(all.matches("anything"));
        assert!(one.matches("CCAFS LC-40"));
        assert!(!one.matches("KSC LC-39A"));
        assert_eq!(all.label(), "All Sites");
        assert_eq!(one.label(), "CCAFS LC-40");
    }
}
