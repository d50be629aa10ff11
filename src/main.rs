use bankrot_registry::app::RegistryApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Реестр банкротов – Федеральный ресурс",
        options,
        Box::new(|_cc| Ok(Box::new(RegistryApp::default()))),
    )
}
