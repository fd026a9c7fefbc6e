use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, Points};

use crate::color::{self, FAILURE_COLOR, SUCCESS_COLOR};
use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Proportion chart (success counts)
// ---------------------------------------------------------------------------

/// Render the cached proportion descriptor as labelled bar segments, one
/// named single-bar chart per segment so each gets a legend entry.
pub fn proportion_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let chart = &state.proportion;
    ui.strong(format!("Launch successes: {}", chart.title));

    let colors: Vec<Color32> = match &state.site {
        // Grouped by site: one palette colour per site segment.
        SiteSelection::All => color::generate_palette(chart.segments.len()),
        // Grouped by outcome: fixed success/failure colours.
        SiteSelection::Site(_) => chart
            .segments
            .iter()
            .map(|s| {
                if s.label == "Success" {
                    SUCCESS_COLOR
                } else {
                    FAILURE_COLOR
                }
            })
            .collect(),
    };

    let labels: Vec<String> = chart.segments.iter().map(|s| s.label.clone()).collect();

    Plot::new("proportion_chart")
        .height(height)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() < 0.05 && idx >= 0.0 && (idx as usize) < labels.len() {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for (i, (segment, color)) in chart.segments.iter().zip(&colors).enumerate() {
                let bar = Bar::new(i as f64, segment.value).width(0.6);
                plot_ui.bar_chart(BarChart::new(vec![bar]).color(*color).name(&segment.label));
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart (payload mass vs. outcome)
// ---------------------------------------------------------------------------

/// Render the cached scatter descriptor: one point series per booster
/// variant, coloured via the state's colour map.
pub fn scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let chart = &state.scatter;
    ui.strong(&chart.title);

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Landing outcome")
        .include_y(-0.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                plot_ui.points(
                    Points::new(series.points.clone())
                        .name(&series.label)
                        .color(state.color_map.color_for(&series.label))
                        .radius(3.0)
                        .shape(MarkerShape::Circle),
                );
            }
        });
}
