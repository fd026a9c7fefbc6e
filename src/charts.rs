use std::collections::BTreeMap;

use crate::data::filter;
use crate::data::model::{LaunchDataset, Outcome, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Chart descriptors
// ---------------------------------------------------------------------------

/// One labelled segment of the proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
}

/// Proportion-chart descriptor: success counts grouped by site (for `All`)
/// or by outcome (for a specific site).
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionChart {
    pub title: String,
    pub segments: Vec<Segment>,
}

/// One scatter series: all points sharing a booster variant (and color).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    /// Booster variant label; the UI maps it to a color.
    pub label: String,
    /// `[payload mass (kg), outcome value]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Scatter-chart descriptor: payload mass vs. outcome, one series per
/// booster variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Total number of plotted points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// The two handlers
// ---------------------------------------------------------------------------

/// Build the proportion chart for the given site selection.
///
/// `All`: one segment per site, sized by that site's success count (a site
/// with no successes keeps a zero-sized segment, so the segment list always
/// mirrors the site list). Specific site: one segment per outcome observed
/// at that site, sized by its row count. A site absent from the table falls
/// through to an empty segment list.
pub fn success_proportions(dataset: &LaunchDataset, selection: &SiteSelection) -> ProportionChart {
    let segments = match selection {
        SiteSelection::All => {
            let mut successes: BTreeMap<&str, u32> =
                dataset.sites.iter().map(|s| (s.as_str(), 0)).collect();
            for record in &dataset.records {
                *successes.entry(record.site.as_str()).or_default() += record.outcome.value();
            }
            dataset
                .sites
                .iter()
                .map(|site| Segment {
                    label: site.clone(),
                    value: f64::from(successes[site.as_str()]),
                })
                .collect()
        }
        SiteSelection::Site(_) => {
            let mut counts: BTreeMap<Outcome, u32> = BTreeMap::new();
            for &idx in &filter::by_site(dataset, selection) {
                *counts.entry(dataset.records[idx].outcome).or_default() += 1;
            }
            counts
                .into_iter()
                .map(|(outcome, count)| Segment {
                    label: outcome.to_string(),
                    value: f64::from(count),
                })
                .collect()
        }
    };

    ProportionChart {
        title: selection.label().to_string(),
        segments,
    }
}

/// Build the payload-vs-outcome scatter chart for the given site selection
/// and payload range.
pub fn payload_outcome_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let mut by_variant: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &filter::by_site_and_payload(dataset, selection, range) {
        let record = &dataset.records[idx];
        by_variant
            .entry(record.booster_variant.as_str())
            .or_default()
            .push([record.payload_mass_kg, f64::from(record.outcome.value())]);
    }

    ScatterChart {
        title: format!(
            "Correlation between Payload and Success for {}",
            selection.label()
        ),
        series: by_variant
            .into_iter()
            .map(|(label, points)| ScatterSeries {
                label: label.to_string(),
                points,
            })
            .collect(),
    }
}
