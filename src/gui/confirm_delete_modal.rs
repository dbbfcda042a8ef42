use eframe::egui;

/// Yes/no guard in front of the delete endpoint.
#[derive(Default)]
pub struct ConfirmDeleteModal {
    target: Option<(u64, String)>,
}

impl ConfirmDeleteModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, id: u64, word: String) {
        self.target = Some((id, word));
    }

    /// Returns the card id once the user confirms.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<u64> {
        let (id, word) = match &self.target {
            Some((id, word)) => (*id, word.clone()),
            None => return None,
        };

        let mut confirmed = None;

        let modal = egui::Modal::new(egui::Id::new("confirm_delete_modal")).show(ctx, |ui| {
            ui.set_width(320.0);

            ui.label(format!("Delete \"{}\"?", word));
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("The card will be removed from this set.").weak(),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Delete").color(ui.visuals().error_fg_color))
                    .clicked()
                {
                    confirmed = Some(id);
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.target = None;
        }

        confirmed
    }
}
