use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use la_search::data::filter::CategoryFilter;
use la_search::data::model::NumericField;
use la_search::state::AppState;

const FDC_URL: &str = "https://fdc.nal.usda.gov/";

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };
    let bounds = *dataset.bounds();

    // Edit a copy; the state only re-filters if something actually moved.
    let mut criteria = state.criteria.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Select Category");
            egui::ComboBox::from_id_salt("category")
                .selected_text(criteria.category.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in CategoryFilter::OPTIONS {
                        ui.selectable_value(&mut criteria.category, option, option.label());
                    }
                });
            ui.separator();

            for field in NumericField::ALL {
                let full = bounds.get(field);
                let range = criteria.range_mut(field);
                ui.add(
                    egui::Slider::new(&mut range.min, full.min..=full.max)
                        .text(format!("Minimum {}", field.label())),
                );
                ui.add(
                    egui::Slider::new(&mut range.max, full.min..=full.max)
                        .text(format!("Maximum {}", field.label())),
                );
                if range.min > range.max {
                    ui.label(RichText::new("Minimum is above maximum").color(Color32::YELLOW));
                }
                ui.add_space(6.0);
            }

            if ui.button("Reset filters").clicked() {
                criteria = dataset.default_criteria();
            }

            ui.separator();
            data_source(ui);
        });

    state.set_criteria(criteria);
}

/// "Data Source" blurb shared by the side panel and the footer.
pub fn data_source(ui: &mut Ui) {
    ui.strong("Data Source");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("This data is obtained from the");
        ui.hyperlink_to("FoodData Central", FDC_URL);
        ui.label("database, specifically filtered for linoleic acid, the omega-6 polyunsaturated fat.");
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
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export filtered CSV…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} foods loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));

            let report = ds.report();
            if report.has_issues() {
                ui.label(RichText::new("⚠ data-quality issues").color(Color32::YELLOW))
                    .on_hover_text(format!(
                        "{} rows with malformed numbers\n{} rows with unknown category\n{} rows without a food name",
                        report.malformed_numeric, report.unknown_category, report.missing_food
                    ));
            }
        }

        if let Some(path) = &state.source_path {
            ui.separator();
            ui.label(RichText::new(path.display().to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") { Color32::RED } else { Color32::GREEN };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open nutrition data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Download filtered results")
        .set_file_name("filtered_results.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match state.export_to(&path) {
            Ok(n) => state.status_message = Some(format!("Saved {n} row(s) to {}", path.display())),
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
