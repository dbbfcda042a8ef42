use std::collections::HashSet;

use eframe::egui;

use crate::{
    core::study::StudyState,
    gui::{
        card_widget::{
            card_widget,
            CardAction,
        },
        theme::Theme,
    },
};

/// The whole collection as a wrapping grid of flippable cards.
pub fn browse_view(
    ui: &mut egui::Ui,
    theme: &Theme,
    study: &StudyState,
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

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::splat(12.0);

            for card in &study.cards {
                let busy = card.id.is_some_and(|id| speech_busy.contains(&id));
                if let Some(a) = card_widget(ui, theme, card, busy, can_delete) {
                    action = Some(a);
                }
            }
        });
    });

    action
}
