use std::collections::HashSet;

use eframe::egui;
use egui_extras::{
    Size,
    StripBuilder,
};

use crate::{
    core::study::StudyState,
    gui::{
        card_widget::{
            card_widget,
            CardAction,
            CARD_SIZE,
        },
        theme::Theme,
    },
};

/// One card at a time with wraparound navigation. Prev/next only light up
/// once there are two cards to move between.
pub fn random_view(
    ui: &mut egui::Ui,
    theme: &Theme,
    study: &mut StudyState,
    speech_busy: &HashSet<u64>,
    can_delete: bool,
) -> Option<CardAction> {
    if study.cards.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(theme.muted(ui.ctx(), "This set has no cards yet."));
        });
        return None;
    }

    let mut action = None;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(CARD_SIZE.x + 24.0))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                ui.add_space(24.0);

                if let Some(card) = study.current_card() {
                    let busy = card.id.is_some_and(|id| speech_busy.contains(&id));
                    action = card_widget(ui, theme, card, busy, can_delete);
                }

                ui.add_space(12.0);

                let can_navigate = study.can_navigate();
                ui.horizontal(|ui| {
                    if ui.add_enabled(can_navigate, egui::Button::new("⏴ Previous")).clicked() {
                        study.previous_card();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add_enabled(can_navigate, egui::Button::new("Next ⏵")).clicked() {
                            study.next_card();
                        }

                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                ui.label(theme.muted(
                                    ui.ctx(),
                                    &format!(
                                        "{} / {}",
                                        study.random_index + 1,
                                        study.cards.len()
                                    ),
                                ));
                            },
                        );
                    });
                });
            });
            strip.empty();
        });

    action
}
