use crate::charts::{self, ProportionChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The two chart descriptors are cached here and recomputed only when an
/// input they depend on changes: the proportion chart watches the site
/// selection, the scatter chart watches both the selection and the payload
/// range. The dataset itself is never mutated.
pub struct AppState {
    /// The immutable launch table, loaded once at startup.
    pub dataset: LaunchDataset,

    /// Current site selector value.
    pub site: SiteSelection,

    /// Current payload bounds, initialised to the dataset extent.
    pub payload_range: PayloadRange,

    /// Booster variant → colour, fixed for the dataset's lifetime.
    pub color_map: ColorMap,

    /// Cached proportion-chart descriptor.
    pub proportion: ProportionChart,

    /// Cached scatter-chart descriptor.
    pub scatter: ScatterChart,

    /// Whether the data-table panel is shown.
    pub show_table: bool,
}

impl AppState {
    /// Build the initial state: all sites selected, full payload range.
    pub fn new(dataset: LaunchDataset) -> Self {
        let site = SiteSelection::All;
        let payload_range = PayloadRange::full(&dataset);
        let color_map = ColorMap::new(&dataset.booster_variants);
        let proportion = charts::success_proportions(&dataset, &site);
        let scatter = charts::payload_outcome_scatter(&dataset, &site, payload_range);

        AppState {
            dataset,
            site,
            payload_range,
            color_map,
            proportion,
            scatter,
            show_table: false,
        }
    }

    /// Recompute after a site-selector change. Both charts watch the site.
    pub fn on_site_changed(&mut self) {
        log::debug!("site selection changed to {}", self.site.label());
        self.proportion = charts::success_proportions(&self.dataset, &self.site);
        self.rechart_scatter();
    }

    /// Recompute after a payload-range change. Only the scatter chart
    /// watches the range.
    pub fn on_range_changed(&mut self) {
        log::debug!(
            "payload range changed to [{:.0}, {:.0}] kg",
            self.payload_range.low,
            self.payload_range.high
        );
        self.rechart_scatter();
    }

    /// Widen the payload range back to the dataset extent.
    pub fn reset_payload_range(&mut self) {
        self.payload_range = PayloadRange::full(&self.dataset);
        self.on_range_changed();
    }

    fn rechart_scatter(&mut self) {
        self.scatter =
            charts::payload_outcome_scatter(&self.dataset, &self.site, self.payload_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        let launch = |site: &str, outcome, payload, variant: &str| LaunchRecord {
            flight_number: 0,
            site: site.to_string(),
            outcome,
            payload_mass_kg: payload,
            booster_version: format!("F9 {variant} B0000"),
            booster_variant: variant.to_string(),
        };
        LaunchDataset::from_records(vec![
            launch("CCAFS LC-40", Outcome::Success, 500.0, "v1.0"),
            launch("CCAFS LC-40", Outcome::Failure, 1500.0, "FT"),
            launch("KSC LC-39A", Outcome::Success, 3000.0, "FT"),
        ])
    }

    #[test]
    fn initial_state_covers_the_whole_table() {
        let state = AppState::new(dataset());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(500.0, 3000.0));
        assert_eq!(state.scatter.point_count(), 3);
        assert_eq!(state.proportion.segments.len(), 2);
    }

    #[test]
    fn range_change_recomputes_only_the_scatter_chart() {
        let mut state = AppState::new(dataset());
        let proportion_before = state.proportion.clone();

        state.payload_range = PayloadRange::new(1000.0, 3000.0);
        state.on_range_changed();

        assert_eq!(state.proportion, proportion_before);
        assert_eq!(state.scatter.point_count(), 2);
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut state = AppState::new(dataset());

        state.site = SiteSelection::Site("KSC LC-39A".to_string());
        state.on_site_changed();

        assert_eq!(state.proportion.title, "KSC LC-39A");
        assert_eq!(state.proportion.segments.len(), 1);
        assert_eq!(state.scatter.point_count(), 1);
    }

    #[test]
    fn reset_restores_the_full_extent() {
        let mut state = AppState::new(dataset());
        state.payload_range = PayloadRange::new(2900.0, 2950.0);
        state.on_range_changed();
        assert_eq!(state.scatter.point_count(), 0);

        state.reset_payload_range();
        assert_eq!(state.payload_range, PayloadRange::full(&state.dataset));
        assert_eq!(state.scatter.point_count(), 3);
    }
}
