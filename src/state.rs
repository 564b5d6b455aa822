use crate::color::FleetColors;
use crate::data::filter::{filter_options, filtered_indices, FilterOptions, FilterSelection};
use crate::data::model::RouteDataset;
use crate::data::summary::{summarize_by_month_fleet, FleetMonthRow, Summary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Everything derived (visible
/// indices, summary, aggregate rows) is recomputed from the dataset and the
/// current selection on every change; nothing is mutated in place.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<RouteDataset>,

    /// Distinct values per categorical column, first-occurrence order.
    pub options: FilterOptions,

    /// The four dropdown selections.
    pub selection: FilterSelection,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Headline metrics over the filtered set; None when it is empty.
    pub summary: Option<Summary>,

    /// Aggregate table rows, month order then fleet.
    pub aggregate: Vec<FleetMonthRow>,

    /// Stable fleet → colour assignment for the charts.
    pub fleet_colors: FleetColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            options: FilterOptions::default(),
            selection: FilterSelection::default(),
            visible_indices: Vec::new(),
            summary: None,
            aggregate: Vec::new(),
            fleet_colors: FleetColors::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: derive options, reset the selection to
    /// all-"All", and compute the initial (unfiltered) view.
    pub fn set_dataset(&mut self, dataset: RouteDataset) {
        self.options = filter_options(&dataset);
        self.selection = FilterSelection::default();
        self.fleet_colors = FleetColors::new(&self.options.fleets);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the filtered set and everything derived from it.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices.clear();
            self.summary = None;
            self.aggregate.clear();
            return;
        };
        self.visible_indices = filtered_indices(ds, &self.selection);

        let rows = self.visible_indices.iter().map(|&i| &ds.records[i]);
        self.summary = Summary::compute(rows.clone());
        self.aggregate = if self.summary.is_some() {
            summarize_by_month_fleet(rows)
        } else {
            Vec::new()
        };
    }
}
