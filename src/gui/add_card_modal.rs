use eframe::egui;

use crate::core::models::CardDraft;

/// The create-card form. Validation failures and server-reported errors
/// both render inline; the dialog only closes on cancel or a successful
/// create.
pub struct AddCardModal {
    open: bool,
    draft: CardDraft,
    error: Option<String>,
    pending: bool,
}

impl AddCardModal {
    pub fn new() -> Self {
        Self { open: false, draft: CardDraft::default(), error: None, pending: false }
    }

    pub fn open_modal(&mut self) {
        self.open = true;
        self.draft = CardDraft::default();
        self.error = None;
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Server accepted the card: close and reset the draft.
    pub fn submit_succeeded(&mut self) {
        self.open = false;
        self.draft = CardDraft::default();
        self.error = None;
        self.pending = false;
    }

    /// Server rejected the card: show its message, keep the form open.
    pub fn submit_failed(&mut self, message: String) {
        self.error = Some(message);
        self.pending = false;
    }

    /// Returns the validated draft when the user submits.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<CardDraft> {
        if !self.open {
            return None;
        }

        let mut submitted = None;

        let modal = egui::Modal::new(egui::Id::new("add_card_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.heading("New Card");
            ui.add_space(8.0);

            egui::Grid::new("add_card_fields").num_columns(2).spacing([8.0, 6.0]).show(
                ui,
                |ui| {
                    ui.label("Word");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.word)
                            .desired_width(f32::INFINITY),
                    );
                    ui.end_row();

                    ui.label("Meaning");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.meaning)
                            .desired_width(f32::INFINITY),
                    );
                    ui.end_row();

                    ui.label("Example");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.example)
                            .desired_width(f32::INFINITY)
                            .hint_text("optional"),
                    );
                    ui.end_row();

                    ui.label("Note");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.draft.note)
                            .desired_width(f32::INFINITY)
                            .hint_text("optional"),
                    );
                    ui.end_row();
                },
            );

            if let Some(error) = &self.error {
                ui.add_space(6.0);
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let add_label = if self.pending { "Adding…" } else { "Add" };
                if ui.add_enabled(!self.pending, egui::Button::new(add_label)).clicked() {
                    match self.draft.validate() {
                        Ok(()) => {
                            self.error = None;
                            self.pending = true;
                            submitted = Some(self.draft.clone());
                        }
                        Err(message) => self.error = Some(message),
                    }
                }

                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.draft = CardDraft::default();
            self.error = None;
            self.pending = false;
        }

        submitted
    }
}

impl Default for AddCardModal {
    fn default() -> Self {
        Self::new()
    }
}
