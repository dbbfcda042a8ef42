use cardbox::gui::CardboxApp;
use eframe::egui;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Cardbox"),
        ..Default::default()
    };

    eframe::run_native("Cardbox", options, Box::new(|cc| Ok(Box::new(CardboxApp::new(cc)))))
}
