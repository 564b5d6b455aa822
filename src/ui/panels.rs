use eframe::egui::{self, Color32, RichText, Ui};
use num_format::{Locale, ToFormattedString};

use crate::data::filter::Selection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter dropdowns and the summary block
// ---------------------------------------------------------------------------

/// Render the left panel: one combo box per categorical column, then the
/// headline metrics for whatever currently passes the filters.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone the option lists so the combo boxes can mutate the selection.
    let options = state.options.clone();

    let mut changed = false;
    changed |= filter_combo(ui, "origin", "Origin", &options.origins, &mut state.selection.origin);
    changed |= filter_combo(
        ui,
        "destination",
        "Destination",
        &options.destinations,
        &mut state.selection.destination,
    );
    changed |= filter_combo(ui, "fleet", "Fleet", &options.fleets, &mut state.selection.fleet);
    changed |= filter_combo(ui, "month", "Month", &options.months, &mut state.selection.month);

    if changed {
        state.refilter();
    }

    ui.separator();

    // Hidden outright when nothing matches; an empty result is not an error.
    if let Some(summary) = &state.summary {
        ui.strong("Summary of Filtered Data");
        ui.add_space(4.0);
        summary_row(ui, "Total Trips", format_count(summary.trips));
        summary_row(ui, "Total Revenue", format_naira(summary.total_revenue));
        summary_row(ui, "Average Profit", format_naira(summary.avg_profit));
        summary_row(ui, "Average Cost", format_naira(summary.avg_cost));
    }
}

/// One "All"-prefixed dropdown. Returns true when the selection changed.
fn filter_combo(
    ui: &mut Ui,
    id: &str,
    label: &str,
    values: &[String],
    selection: &mut Selection,
) -> bool {
    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selection.label().to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            let all_selected = *selection == Selection::All;
            if ui.selectable_label(all_selected, "All").clicked() && !all_selected {
                *selection = Selection::All;
                changed = true;
            }
            for value in values {
                let is_selected = selection.matches(value) && !all_selected;
                if ui.selectable_label(is_selected, value).clicked() && !is_selected {
                    *selection = Selection::Value(value.clone());
                    changed = true;
                }
            }
        });
    ui.add_space(4.0);
    changed
}

fn summary_row(ui: &mut Ui, label: &str, value: String) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{label}:"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.strong(value);
        });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} routes loaded, {} match filters",
                format_count(ds.len()),
                format_count(state.visible_indices.len())
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open route cost data")
        .add_filter("Supported files", &["xlsx", "xlsm", "xls", "ods", "csv", "json"])
        .add_filter("Excel workbook", &["xlsx", "xlsm", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_path(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} route records from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error reading the file: {e}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Number formatting (₦, thousands separators)
// ---------------------------------------------------------------------------

/// Format a naira amount with thousands separators and no decimals,
/// e.g. `₦1,234,568`.
pub fn format_naira(value: f64) -> String {
    let rounded = value.abs().round() as i64;
    let grouped = rounded.to_formatted_string(&Locale::en);
    if value.is_sign_negative() && rounded != 0 {
        format!("-₦{grouped}")
    } else {
        format!("₦{grouped}")
    }
}

/// Format a count with thousands separators.
pub fn format_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}
