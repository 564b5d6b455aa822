use std::collections::BTreeMap;

use super::model::{month_rank, RouteRecord};

// ---------------------------------------------------------------------------
// Scalar summary over the filtered set
// ---------------------------------------------------------------------------

/// Headline metrics for the sidebar panel. Only defined for a non-empty row
/// set; callers get `None` otherwise and hide the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub trips: usize,
    pub total_revenue: f64,
    pub avg_profit: f64,
    pub avg_cost: f64,
}

impl Summary {
    /// Compute the four headline metrics over `records`.
    ///
    /// Average cost is mean(trip_rate + dispatch) minus mean(profit). Over a
    /// single row set this equals the mean of per-row derived cost; both
    /// means must be taken over the same rows or the equality breaks.
    pub fn compute<'a, I>(records: I) -> Option<Summary>
    where
        I: IntoIterator<Item = &'a RouteRecord>,
    {
        let mut trips = 0usize;
        let mut total_revenue = 0.0;
        let mut total_profit = 0.0;
        let mut total_rate_plus_dispatch = 0.0;

        for rec in records {
            trips += 1;
            total_revenue += rec.trip_rate;
            total_profit += rec.profit;
            total_rate_plus_dispatch += rec.trip_rate + rec.dispatch;
        }

        if trips == 0 {
            return None;
        }

        let n = trips as f64;
        let avg_profit = total_profit / n;
        Some(Summary {
            trips,
            total_revenue,
            avg_profit,
            avg_cost: total_rate_plus_dispatch / n - avg_profit,
        })
    }
}

// ---------------------------------------------------------------------------
// Grouped aggregation by (month, fleet)
// ---------------------------------------------------------------------------

/// One row of the aggregate table: metrics for a single (month, fleet) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetMonthRow {
    pub month: String,
    pub fleet: String,
    pub trips: usize,
    pub total_revenue: f64,
    pub avg_profit: f64,
    pub avg_cost: f64,
}

#[derive(Default)]
struct GroupAccumulator {
    trips: usize,
    revenue: f64,
    profit: f64,
    cost: f64,
}

/// Group `records` by (month, fleet) and compute per-group count, revenue
/// sum, mean profit, and mean derived cost.
///
/// Output order: chronological month rank first (unknown months after all
/// known ones, see [`month_rank`]), then fleet lexicographically.
pub fn summarize_by_month_fleet<'a, I>(records: I) -> Vec<FleetMonthRow>
where
    I: IntoIterator<Item = &'a RouteRecord>,
{
    // BTreeMap on (rank, month, fleet) yields the required order directly.
    let mut groups: BTreeMap<(usize, String, String), GroupAccumulator> = BTreeMap::new();

    for rec in records {
        let key = (
            month_rank(&rec.month),
            rec.month.clone(),
            rec.fleet.clone(),
        );
        let acc = groups.entry(key).or_default();
        acc.trips += 1;
        acc.revenue += rec.trip_rate;
        acc.profit += rec.profit;
        acc.cost += rec.derived_cost();
    }

    groups
        .into_iter()
        .map(|((_, month, fleet), acc)| {
            let n = acc.trips as f64;
            FleetMonthRow {
                month,
                fleet,
                trips: acc.trips,
                total_revenue: acc.revenue,
                avg_profit: acc.profit / n,
                avg_cost: acc.cost / n,
            }
        })
        .collect()
}
