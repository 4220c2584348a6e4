use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use la_search::data::model::{COLUMNS, FoodRecord};
use la_search::state::AppState;

use super::panels;

// ---------------------------------------------------------------------------
// Results (central panel)
// ---------------------------------------------------------------------------

/// Search box, result count, download button and the result table.
pub fn results(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Food Search for Linoleic Acid Data");

    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to search foods  (File → Open…)");
        });
        return;
    }

    let mut criteria = state.criteria.clone();
    ui.label("Enter food name or keyword to search:");
    ui.add(
        egui::TextEdit::singleline(&mut criteria.query)
            .hint_text("e.g. oil")
            .desired_width(f32::INFINITY),
    );
    state.set_criteria(criteria);
    ui.add_space(6.0);

    if state.visible_indices.is_empty() {
        ui.label("No results found. Adjust your filters and try again.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("Showing {} result(s):", state.visible_indices.len()));
        if ui.button("Download Filtered Results as CSV").clicked() {
            panels::save_file_dialog(state);
        }
    });
    ui.add_space(4.0);

    let Some(dataset) = state.dataset.clone() else {
        return;
    };
    let records = dataset.records();
    let indices = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::remainder().at_least(220.0).clip(true))
        .columns(Column::auto().at_least(70.0), COLUMNS.len() - 1)
        .header(20.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let Some(record) = indices.get(row.index()).and_then(|&i| records.get(i)) else {
                    return;
                };
                for cell in cells(record) {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

/// Display text for each column of a record; missing values shown blank.
fn cells(record: &FoodRecord) -> [String; 5] {
    let num = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
    [
        record.food.clone().unwrap_or_default(),
        num(record.la_cal),
        num(record.cal),
        num(record.percent),
        record.category.map(|c| c.to_string()).unwrap_or_default(),
    ]
}
