use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};

use crate::data::filter::LAYER_ALL;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone the option sets so we can mutate state inside the loop.
    let options = state.options.clone();
    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            changed |= option_combo(ui, "Country", &mut state.filter.country, &options.countries);
            ui.separator();

            changed |= option_combo(
                ui,
                "Indicator",
                &mut state.filter.indicator,
                &options.indicators,
            );
            ui.separator();

            changed |= option_combo(ui, "Layer", &mut state.filter.layer, &options.layers);
            ui.separator();

            // ---- Year range (inclusive both ends) ----
            ui.strong("Year range");
            if let Some((min, max)) = options.year_bounds() {
                let mut from = state.filter.year_from.unwrap_or(min);
                let mut to = state.filter.year_to.unwrap_or(max);

                ui.horizontal(|ui: &mut Ui| {
                    ui.label("from");
                    // Deliberately unclamped: an inverted range is reported
                    // by the evaluator, not silently corrected here.
                    changed |= ui.add(DragValue::new(&mut from)).changed();
                    ui.label("to");
                    changed |= ui.add(DragValue::new(&mut to)).changed();
                });

                if changed {
                    state.filter.year_from = Some(from);
                    state.filter.year_to = Some(to);
                }
            } else {
                ui.label("No usable years in this dataset.");
            }
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filter();
            }

            // ---- Layer legend ----
            let legend = state.layer_colors.legend_entries();
            if !legend.is_empty() {
                ui.separator();
                ui.strong("Layers");
                for (label, color) in legend {
                    ui.label(RichText::new(label).color(color));
                }
            }
        });

    if changed {
        state.apply_filter();
    }
}

/// Combo box over a string dimension, with an "All" entry mapping to no
/// constraint. Returns whether the selection changed.
fn option_combo(ui: &mut Ui, label: &str, selection: &mut Option<String>, values: &[String]) -> bool {
    let mut changed = false;
    ui.strong(label);
    let selected_text = selection.as_deref().unwrap_or(LAYER_ALL).to_owned();
    egui::ComboBox::from_id_salt(label)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(selection.is_none(), LAYER_ALL)
                .clicked()
            {
                *selection = None;
                changed = true;
            }
            for value in values {
                if ui
                    .selectable_label(selection.as_deref() == Some(value), value)
                    .clicked()
                {
                    *selection = Some(value.clone());
                    changed = true;
                }
            }
        });
    changed
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
            ui.label(ds.title());
            ui.separator();
            ui.label(format!(
                "{} points loaded, {} points after filter",
                ds.len(),
                state.visible_count()
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
        .set_title("Open indicator dataset")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} data points from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                state.set_load_error(format!(
                    "Error: {e:#}. Expected a consolidated dataset (JSON) or a flat CSV table."
                ));
            }
        }
    }
}
