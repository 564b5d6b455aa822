use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::FleetColors;
use crate::data::summary::FleetMonthRow;

// ---------------------------------------------------------------------------
// Stacked bar chart: month on x, one colored series per fleet
// ---------------------------------------------------------------------------

/// Draw one metric of the aggregate table as a stacked bar chart. Months sit
/// at integer x positions in the order the aggregate rows carry them; each
/// fleet contributes one stacked, colored series.
pub fn stacked_bar_chart(
    ui: &mut Ui,
    id: &str,
    aggregate: &[FleetMonthRow],
    fleet_colors: &FleetColors,
    metric: impl Fn(&FleetMonthRow) -> f64,
) {
    // Aggregate rows arrive month-ordered, so first occurrence keeps that order.
    let mut months: Vec<&str> = Vec::new();
    let mut fleets: Vec<&str> = Vec::new();
    for group in aggregate {
        if !months.contains(&group.month.as_str()) {
            months.push(&group.month);
        }
        if !fleets.contains(&group.fleet.as_str()) {
            fleets.push(&group.fleet);
        }
    }
    fleets.sort_unstable();

    let mut charts: Vec<BarChart> = Vec::new();
    for fleet in &fleets {
        let bars: Vec<Bar> = aggregate
            .iter()
            .filter(|g| g.fleet == *fleet)
            .filter_map(|g| {
                let x = months.iter().position(|m| *m == g.month)?;
                Some(Bar::new(x as f64, metric(g)))
            })
            .collect();

        let mut chart = BarChart::new(bars)
            .name(*fleet)
            .color(fleet_colors.color_for(fleet))
            .width(0.6);
        let others: Vec<&BarChart> = charts.iter().collect();
        chart = chart.stack_on(&others);
        charts.push(chart);
    }

    let month_labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();

    Plot::new(id)
        .legend(Legend::default())
        .height(260.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            month_labels
                .get(idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
