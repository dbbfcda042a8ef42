use eframe::egui;

/// Blocking error dialog for failures that deserve more than a toast,
/// such as not being able to write the settings file.
pub struct ErrorModal {
    open: bool,
    title: String,
    message: String,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, title: String::new(), message: String::new() }
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(ui.visuals().error_fg_color));
                ui.label(egui::RichText::new(&self.title).size(18.0).strong());
            });

            ui.add_space(10.0);
            ui.label(&self.message);
            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.title.clear();
            self.message.clear();
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
