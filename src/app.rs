use eframe::egui;

use la_search::data::handle::DatasetHandle;
use la_search::state::AppState;

use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaSearchApp {
    pub state: AppState,
    /// Startup dataset, loaded on the first frame.
    handle: DatasetHandle,
    handle_tried: bool,
    /// Startup load failed and nothing else has been opened; offer a retry.
    startup_failed: bool,
}

impl LaSearchApp {
    pub fn new(handle: DatasetHandle) -> Self {
        Self {
            state: AppState::default(),
            handle,
            handle_tried: false,
            startup_failed: false,
        }
    }

    fn load_startup_dataset(&mut self) {
        self.handle_tried = true;
        self.startup_failed = !self.state.load_from_handle(&self.handle);
    }
}

impl eframe::App for LaSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.handle_tried {
            self.load_startup_dataset();
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);

            if self.startup_failed && self.state.dataset.is_none() {
                let label = format!("Retry loading {}", self.handle.path().display());
                if ui.button(label).clicked() {
                    self.load_startup_dataset();
                }
            }
        });

        // ---- Bottom panel: data source footer ----
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::data_source(ui);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: search + results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::results(ui, &mut self.state);
        });
    }
}
