use eframe::egui::{CollapsingHeader, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::RouteDataset;
use crate::data::summary::FleetMonthRow;
use crate::state::AppState;
use crate::ui::charts;
use crate::ui::panels::{format_count, format_naira};

// ---------------------------------------------------------------------------
// Central panel – filtered table, aggregate table, chart sections
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a workbook to view routes  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            CollapsingHeader::new("Filtered Route Data")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    filtered_table(ui, dataset, &state.visible_indices);
                });

            // An empty filtered set renders the raw table section only.
            if state.summary.is_none() {
                return;
            }

            CollapsingHeader::new("Summary of Filtered Routes by Month and Fleet")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    aggregate_table(ui, &state.aggregate);
                });

            chart_section(ui, state, "Number of Trips by Month", true, |g| {
                g.trips as f64
            });
            chart_section(ui, state, "Average Profit by Month", false, |g| g.avg_profit);
            chart_section(ui, state, "Average Cost by Month", false, |g| g.avg_cost);
            chart_section(ui, state, "Total Revenue by Month", false, |g| {
                g.total_revenue
            });
        });
}

fn chart_section(
    ui: &mut Ui,
    state: &AppState,
    title: &str,
    open: bool,
    metric: impl Fn(&FleetMonthRow) -> f64,
) {
    CollapsingHeader::new(title)
        .default_open(open)
        .show(ui, |ui: &mut Ui| {
            charts::stacked_bar_chart(ui, title, &state.aggregate, &state.fleet_colors, metric);
        });
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The raw filtered rows, one table row per visible record.
fn filtered_table(ui: &mut Ui, dataset: &RouteDataset, visible: &[usize]) {
    ui.push_id("filtered_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(70.0), 4)
            .columns(Column::remainder(), 3)
            .header(20.0, |mut header| {
                for title in ["Origin", "Destination", "Fleet", "Month", "Trip Rate", "Dispatch", "Profit"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, visible.len(), |mut row| {
                    let rec = &dataset.records[visible[row.index()]];
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.origin);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.destination);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.fleet);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&rec.month);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_naira(rec.trip_rate));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_naira(rec.dispatch));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_naira(rec.profit));
                    });
                });
            });
    });
}

/// The grouped (month, fleet) aggregate rows.
fn aggregate_table(ui: &mut Ui, aggregate: &[FleetMonthRow]) {
    ui.push_id("aggregate_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().at_least(70.0), 3)
            .columns(Column::remainder(), 3)
            .header(20.0, |mut header| {
                for title in ["Month", "Fleet", "Trips", "Total Revenue", "Avg Profit", "Avg Cost"] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, aggregate.len(), |mut row| {
                    let group = &aggregate[row.index()];
                    row.col(|ui: &mut Ui| {
                        ui.label(&group.month);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&group.fleet);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_count(group.trips));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_naira(group.total_revenue));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_naira(group.avg_profit));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format_naira(group.avg_cost));
                    });
                });
            });
    });
}
