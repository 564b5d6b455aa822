/// View layer: sidebar/top-bar widgets, central tables, and bar charts.
/// Pure rendering over [`crate::state::AppState`]; no business rules live here.
pub mod central;
pub mod charts;
pub mod panels;
