use eframe::egui;

use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchBoardApp {
    pub state: AppState,
}

impl LaunchBoardApp {
    /// Wrap a freshly loaded dataset in the initial UI state.
    pub fn new(dataset: LaunchDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for LaunchBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: input controls ----
        egui::SidePanel::left("controls_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: data table (toggleable) ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("data_table")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    table::launch_table(ui, &self.state);
                });
        }

        // ---- Central panel: the two charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = ((ui.available_height() - 60.0) / 2.0).max(120.0);
            plot::proportion_chart(ui, &self.state, chart_height);
            ui.separator();
            plot::scatter_chart(ui, &self.state, chart_height);
        });
    }
}
