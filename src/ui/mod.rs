/// Presentation layer: input panels, chart rendering, and the data table.
///
/// Everything here consumes `AppState` (and the chart descriptors cached in
/// it); no module in this layer touches the dataset directly except to read.

pub mod panels;
pub mod plot;
pub mod table;
