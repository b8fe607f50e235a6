pub mod app;
pub mod colors;
pub mod search;

/// Entry point: launch the native GUI window
pub fn run() -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Searchpad")
            .with_inner_size([800.0, 500.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Searchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(app::SearchpadApp::new(cc)))),
    )
    .map_err(|e| crate::SearchpadError::Gui(e.to_string()))
}
