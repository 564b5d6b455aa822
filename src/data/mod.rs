/// Data layer: core types, ingestion, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RouteDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ RouteDataset  │  Vec<RouteRecord>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply equality predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  headline metrics + (month, fleet) aggregate rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;

#[cfg(test)]
mod tests {
    //! End-to-end: ingest → filter → summarize, the path one interaction takes.

    use super::filter::{filter_options, filtered_indices, FilterSelection, Selection};
    use super::loader::load_csv;
    use super::model::RouteRecord;
    use super::summary::{summarize_by_month_fleet, Summary};

    const SAMPLE_CSV: &str = "\
ORIGIN,DESTINATION,Fleet,Month,TRIP RATE,DISPATCH,PROFIT,COMMISSION,COST/LITRE
LAGOS,ABUJA,DAF,JULY,100,10,20,1,1.0
LAGOS,ABUJA,DAF,JULY,200,20,40,2,1.0
KANO,ABUJA,MACK,JULY,300,30,60,3,1.0
LAGOS,KADUNA,DAF,AUGUST,400,40,80,4,1.0
KANO,KADUNA,MACK,AUGUST,500,50,100,5,1.0
KANO,ABUJA,MACK,AUGUST,600,60,120,6,1.0
";

    fn filtered<'a>(
        records: &'a [RouteRecord],
        indices: &[usize],
    ) -> Vec<&'a RouteRecord> {
        indices.iter().map(|&i| &records[i]).collect()
    }

    #[test]
    fn unfiltered_six_rows_aggregate_to_four_groups() {
        let ds = load_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 6);

        let idx = filtered_indices(&ds, &FilterSelection::default());
        let rows = filtered(&ds.records, &idx);

        let summary = Summary::compute(rows.iter().copied()).unwrap();
        assert_eq!(summary.trips, 6);
        assert_eq!(summary.total_revenue, 2100.0);
        assert!((summary.avg_profit - 70.0).abs() < 1e-9);

        let agg = summarize_by_month_fleet(rows.iter().copied());
        assert_eq!(agg.len(), 4);
        let order: Vec<(&str, &str)> = agg
            .iter()
            .map(|g| (g.month.as_str(), g.fleet.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("JULY", "DAF"),
                ("JULY", "MACK"),
                ("AUGUST", "DAF"),
                ("AUGUST", "MACK"),
            ]
        );
        // JULY/DAF: rates 100+200, profits 20+40, derived costs 90+180.
        assert_eq!(agg[0].trips, 2);
        assert_eq!(agg[0].total_revenue, 300.0);
        assert!((agg[0].avg_profit - 30.0).abs() < 1e-9);
        assert!((agg[0].avg_cost - 135.0).abs() < 1e-9);
    }

    #[test]
    fn fleet_filter_matching_nothing_suppresses_summary() {
        let ds = load_csv(SAMPLE_CSV.as_bytes()).unwrap();
        let sel = FilterSelection {
            fleet: Selection::Value("VOLVO".into()),
            ..Default::default()
        };
        let idx = filtered_indices(&ds, &sel);
        assert!(idx.is_empty());

        let rows = filtered(&ds.records, &idx);
        assert_eq!(Summary::compute(rows.iter().copied()), None);
        assert!(summarize_by_month_fleet(rows.iter().copied()).is_empty());
    }

    #[test]
    fn options_feed_the_filters_they_came_from() {
        let ds = load_csv(SAMPLE_CSV.as_bytes()).unwrap();
        let opts = filter_options(&ds);
        assert_eq!(opts.fleets, vec!["DAF", "MACK"]);

        // Every derived option, applied as a filter, selects at least one row.
        for fleet in &opts.fleets {
            let sel = FilterSelection {
                fleet: Selection::Value(fleet.clone()),
                ..Default::default()
            };
            assert!(!filtered_indices(&ds, &sel).is_empty());
        }
    }
}
