use eframe::egui::{self, RichText, Ui};

use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – input controls
// ---------------------------------------------------------------------------

/// Render the controls panel: site selector, payload range, color legend.
///
/// Each control reports a change to exactly the state hook that depends on
/// it: the site selector drives both charts, the range sliders only the
/// scatter chart.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // Clone what we iterate so we can mutate state inside the closures.
    let sites = state.dataset.sites.clone();
    let (min_payload, max_payload) = state.dataset.payload_extent;

    // ---- Site selector ----
    ui.strong("Launch site");
    let mut site_changed = false;
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(state.site.label().to_owned())
        .show_ui(ui, |ui: &mut Ui| {
            site_changed |= ui
                .selectable_value(&mut state.site, SiteSelection::All, "All Sites")
                .changed();
            for site in &sites {
                site_changed |= ui
                    .selectable_value(&mut state.site, SiteSelection::Site(site.clone()), site)
                    .changed();
            }
        });
    if site_changed {
        state.on_site_changed();
    }

    ui.add_space(8.0);

    // ---- Payload range ----
    // Two independent bounds; an inverted pair simply empties the scatter.
    ui.strong("Payload range");
    let mut range_changed = false;
    range_changed |= ui
        .add(
            egui::Slider::new(&mut state.payload_range.low, min_payload..=max_payload)
                .text("min")
                .suffix(" kg")
                .step_by(100.0),
        )
        .changed();
    range_changed |= ui
        .add(
            egui::Slider::new(&mut state.payload_range.high, min_payload..=max_payload)
                .text("max")
                .suffix(" kg")
                .step_by(100.0),
        )
        .changed();
    if range_changed {
        state.on_range_changed();
    }
    if ui.small_button("Reset range").clicked() {
        state.reset_payload_range();
    }

    ui.add_space(8.0);
    ui.separator();

    // ---- Booster variant legend ----
    ui.strong("Booster variants");
    for (label, color) in state.color_map.legend_entries() {
        ui.label(RichText::new(format!("● {label}")).color(color));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: dataset summary and the data-table toggle.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Launch Records Dashboard");

        ui.separator();

        ui.label(format!(
            "{} launches, {} in scatter view",
            state.dataset.len(),
            state.scatter.point_count()
        ));

        ui.separator();

        if ui.selectable_label(state.show_table, "Data table").clicked() {
            state.show_table = !state.show_table;
        }
    });
}
