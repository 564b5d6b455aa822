use super::model::{RouteDataset, RouteRecord};

// ---------------------------------------------------------------------------
// Filter predicate: one optional equality match per categorical field
// ---------------------------------------------------------------------------

/// Selection state of a single categorical filter. `All` places no constraint
/// on the field; the UI renders it as the "All" combo-box entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    /// Whether a row's field value passes this selection.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(v) => v == value,
        }
    }

    /// Label shown in the combo box.
    pub fn label(&self) -> &str {
        match self {
            Selection::All => "All",
            Selection::Value(v) => v,
        }
    }
}

/// The four independent filters, ANDed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub origin: Selection,
    pub destination: Selection,
    pub fleet: Selection,
    pub month: Selection,
}

impl FilterSelection {
    fn matches(&self, rec: &RouteRecord) -> bool {
        self.origin.matches(&rec.origin)
            && self.destination.matches(&rec.destination)
            && self.fleet.matches(&rec.fleet)
            && self.month.matches(&rec.month)
    }
}

// ---------------------------------------------------------------------------
// Filter options: distinct values per field, first-occurrence order
// ---------------------------------------------------------------------------

/// Distinct values of each categorical column, in the order they first appear
/// in the source table. The order is part of the contract: the combo boxes
/// must list values the same way run after run.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    pub fleets: Vec<String>,
    pub months: Vec<String>,
}

/// Derive [`FilterOptions`] from an ingested dataset.
pub fn filter_options(dataset: &RouteDataset) -> FilterOptions {
    fn push_distinct(seen: &mut Vec<String>, value: &str) {
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }

    let mut options = FilterOptions::default();
    for rec in &dataset.records {
        push_distinct(&mut options.origins, &rec.origin);
        push_distinct(&mut options.destinations, &rec.destination);
        push_distinct(&mut options.fleets, &rec.fleet);
        push_distinct(&mut options.months, &rec.month);
    }
    options
}

/// Return indices of records passing all four filters, preserving row order.
pub fn filtered_indices(dataset: &RouteDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect()
}
