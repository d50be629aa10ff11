use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RegistryApp {
    pub state: AppState,
}

impl Default for RegistryApp {
    fn default() -> Self {
        let state = AppState::default();
        log::info!("Registry ready with {} records", state.registry.len());
        Self { state }
    }
}

impl eframe::App for RegistryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and export toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters and distributions ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: summary cards and record table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::registry_table(ui, &mut self.state);
        });

        // ---- Detail view, floats above the panels while a row is open ----
        table::detail_window(ctx, &mut self.state);
    }
}
