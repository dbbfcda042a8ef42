use eframe::egui;

use crate::{
    core::models::Flashcard,
    gui::theme::Theme,
};

pub const CARD_SIZE: egui::Vec2 = egui::Vec2::new(240.0, 150.0);

/// What a card widget asked the app to do this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Pronounce { id: u64, word: String },
    Delete(u64),
}

/// One flippable card. Click anywhere on it to toggle between the word face
/// and the meaning face; flip state lives in egui memory keyed by the card's
/// identity, so each instance flips independently.
///
/// The delete affordance only appears on the answer face of a persisted card
/// in an editable context. The pronounce button goes inert while an
/// utterance for this card is in flight; other cards are unaffected even
/// when they show the same word.
pub fn card_widget(
    ui: &mut egui::Ui,
    theme: &Theme,
    card: &Flashcard,
    speech_busy: bool,
    can_delete: bool,
) -> Option<CardAction> {
    let flip_id = ui.make_persistent_id(("card_flip", card.id, card.word.as_str()));
    let flipped = ui.data(|d| d.get_temp::<bool>(flip_id).unwrap_or(false));

    let mut action = None;

    let response = egui::Frame::group(ui.style())
        .fill(theme.card_fill(ui.ctx()))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_size(CARD_SIZE);
            ui.set_max_size(CARD_SIZE);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if flipped && can_delete && card.id.is_some() {
                        if ui.small_button("🗑").on_hover_text("Delete this card").clicked() {
                            if let Some(id) = card.id {
                                action = Some(CardAction::Delete(id));
                            }
                        }
                    }

                    let speak_label = if speech_busy { "⏳" } else { "🔊" };
                    let speak = ui
                        .add_enabled(
                            !speech_busy && card.id.is_some(),
                            egui::Button::new(speak_label).small(),
                        )
                        .on_hover_text("Pronounce");
                    if speak.clicked() {
                        if let Some(id) = card.id {
                            action = Some(CardAction::Pronounce { id, word: card.word.clone() });
                        }
                    }
                });
            });

            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                if flipped {
                    ui.label(theme.heading(ui.ctx(), &card.meaning).size(22.0));
                    if let Some(example) = &card.example {
                        ui.add_space(6.0);
                        ui.label(egui::RichText::new(example).italics());
                    }
                    if let Some(note) = &card.note {
                        ui.add_space(4.0);
                        ui.label(theme.muted(ui.ctx(), note));
                    }
                } else {
                    ui.add_space(14.0);
                    ui.label(theme.bold(ui.ctx(), &card.word).size(24.0));
                    ui.add_space(10.0);
                    ui.label(theme.muted(ui.ctx(), "click to reveal"));
                }
            });
        })
        .response;

    // Buttons sit on top and win the hit test; anything else flips the card.
    let clicked = ui.interact(response.rect, flip_id.with("surface"), egui::Sense::click());
    if clicked.clicked() && action.is_none() {
        ui.data_mut(|d| d.insert_temp(flip_id, !flipped));
    }

    action
}
