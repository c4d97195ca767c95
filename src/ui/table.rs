use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::EvalError;
use crate::data::model::IndicatorDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View model: structured rows, built without touching any UI surface
// ---------------------------------------------------------------------------

/// Maximum number of rows rendered regardless of result size.
pub const PREVIEW_CAP: usize = 255;

/// One rendered table row, all fields display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub indicator: String,
    pub country: String,
    pub year: String,
    pub value: String,
    pub category: String,
    pub layer: String,
    pub unit: String,
}

/// The bounded preview of the current result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewTable {
    pub rows: Vec<PreviewRow>,
    /// Total matches before the cap was applied.
    pub total: usize,
    pub truncated: bool,
}

/// Map filtered indices to display rows, applying the preview cap and the
/// "Unknown" fallback for missing layer/unit. Display-time substitution
/// only: filtering has already happened on the raw fields.
pub fn preview_rows(dataset: &IndicatorDataset, indices: &[usize], cap: usize) -> PreviewTable {
    let rows = indices
        .iter()
        .take(cap)
        .map(|&i| {
            let p = &dataset.points[i];
            PreviewRow {
                indicator: p.indicator.clone(),
                country: p.country.clone(),
                year: p.year.to_string(),
                value: p.value.map(format_value).unwrap_or_default(),
                category: p.category.clone(),
                layer: p.layer_label().to_owned(),
                unit: p.unit_label().to_owned(),
            }
        })
        .collect();

    PreviewTable {
        rows,
        total: indices.len(),
        truncated: indices.len() > cap,
    }
}

fn format_value(v: f64) -> String {
    if v.abs() < 1.0 {
        format!("{v:.4}")
    } else {
        format!("{v:.2}")
    }
}

// ---------------------------------------------------------------------------
// Central panel – preview table render
// ---------------------------------------------------------------------------

const HEADERS: [&str; 7] = [
    "Indicator", "Country", "Year", "Value", "Category", "Layer", "Unit",
];

/// Render the preview table (or the appropriate placeholder message).
pub fn preview_panel(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to explore indicators  (File → Open…)");
            });
            return;
        }
    };

    // A failed evaluation leaves the previous result on screen, behind a
    // blocking notice.
    if let Some(err) = &state.eval_error {
        match err {
            EvalError::NoData => {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.label("No data points are loaded.");
                });
                return;
            }
            EvalError::InvalidYearRange { .. } => {
                ui.label(
                    RichText::new(format!("{err} (showing the previous result)"))
                        .color(Color32::RED)
                        .strong(),
                );
                ui.separator();
            }
        }
    }

    let preview = preview_rows(dataset, &state.visible_indices, PREVIEW_CAP);

    if preview.rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No data matches the current filters.");
        });
        return;
    }

    if preview.truncated {
        ui.label(format!(
            "Showing the first {PREVIEW_CAP} of {} matching points.",
            preview.total
        ));
        ui.separator();
    }

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), HEADERS.len() - 1)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, preview.rows.len(), |mut row| {
                let r = &preview.rows[row.index()];
                row.col(|ui| {
                    ui.label(&r.indicator);
                });
                row.col(|ui| {
                    ui.label(&r.country);
                });
                row.col(|ui| {
                    ui.label(&r.year);
                });
                row.col(|ui| {
                    ui.label(&r.value);
                });
                row.col(|ui| {
                    ui.label(&r.category);
                });
                row.col(|ui| {
                    let color = state.layer_colors.color_for(&r.layer);
                    ui.label(RichText::new(&r.layer).color(color));
                });
                row.col(|ui| {
                    ui.label(&r.unit);
                });
            });
        });
}
