use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data table (bottom panel)
// ---------------------------------------------------------------------------

/// Striped, read-only view of the whole loaded launch table.
pub fn launch_table(ui: &mut Ui, state: &AppState) {
    let records = &state.dataset.records;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                "Flight",
                "Launch Site",
                "Payload Mass (kg)",
                "Outcome",
                "Booster Version",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, records.len(), |mut row| {
                let record = &records[row.index()];
                row.col(|ui| {
                    ui.label(record.flight_number.to_string());
                });
                row.col(|ui| {
                    ui.label(record.site.as_str());
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", record.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(record.outcome.to_string());
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{} ({})",
                        record.booster_version, record.booster_variant
                    ));
                });
            });
        });
}
