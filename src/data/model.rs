use std::fmt;

// ---------------------------------------------------------------------------
// Month ordering
// ---------------------------------------------------------------------------

/// Chronological order of the months covered by the source workbooks.
pub const MONTH_ORDER: [&str; 4] = ["JULY", "AUGUST", "SEPTEMBER", "OCTOBER"];

/// Sort rank of a month name. Months outside [`MONTH_ORDER`] rank after all
/// known months, so they group at the end of sorted output instead of being
/// interleaved.
pub fn month_rank(month: &str) -> usize {
    MONTH_ORDER
        .iter()
        .position(|m| *m == month)
        .unwrap_or(MONTH_ORDER.len())
}

// ---------------------------------------------------------------------------
// RouteRecord – one row of the uploaded sheet
// ---------------------------------------------------------------------------

/// A single route cost record (one row of the source spreadsheet).
///
/// The COMMISSION and COST/LITRE columns of the source sheet are validated at
/// ingestion but dropped before this type is built.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub fleet: String,
    pub month: String,
    /// Revenue for the trip.
    pub trip_rate: f64,
    /// Dispatch cost component.
    pub dispatch: f64,
    pub profit: f64,
}

impl RouteRecord {
    /// Total cost incurred for the trip: revenue plus dispatch minus profit.
    pub fn derived_cost(&self) -> f64 {
        self.trip_rate + self.dispatch - self.profit
    }
}

impl fmt::Display for RouteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} [{} / {}]",
            self.origin, self.destination, self.fleet, self.month
        )
    }
}

// ---------------------------------------------------------------------------
// RouteDataset – the complete ingested table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Rows keep source order; filtering and aggregation
/// work on borrowed slices or index lists, never mutating the records.
#[derive(Debug, Clone, Default)]
pub struct RouteDataset {
    pub records: Vec<RouteRecord>,
}

impl RouteDataset {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        RouteDataset { records }
    }

    /// Number of route records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_rank_follows_chronological_order() {
        assert!(month_rank("JULY") < month_rank("AUGUST"));
        assert!(month_rank("AUGUST") < month_rank("SEPTEMBER"));
        assert!(month_rank("SEPTEMBER") < month_rank("OCTOBER"));
    }

    #[test]
    fn unknown_month_ranks_after_known_months() {
        assert!(month_rank("NOVEMBER") > month_rank("OCTOBER"));
        assert_eq!(month_rank("NOVEMBER"), month_rank("JANUARY"));
    }

    #[test]
    fn derived_cost_is_rate_plus_dispatch_minus_profit() {
        let rec = RouteRecord {
            origin: "LAGOS".into(),
            destination: "ABUJA".into(),
            fleet: "DAF".into(),
            month: "JULY".into(),
            trip_rate: 500_000.0,
            dispatch: 120_000.0,
            profit: 180_000.0,
        };
        assert_eq!(rec.derived_cost(), 440_000.0);
    }
}
