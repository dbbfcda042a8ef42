use eframe::egui::{
    self,
    containers,
};

use crate::core::models::{
    SetView,
    StudyMode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopBarAction {
    Reload,
    AddCard,
    OpenSettings,
    SetMode(StudyMode),
    SetView(SetView),
}

pub struct TopBar;

impl TopBar {
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        ctx: &egui::Context,
        set_id: &mut String,
        view: SetView,
        mode: StudyMode,
        can_edit: bool,
        api_online: bool,
        loading: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("Cardbox", |ui| {
                    if ui.button("Settings").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                ui.label("Set:");
                let set_field = ui.add(
                    egui::TextEdit::singleline(set_id).desired_width(80.0).hint_text("set id"),
                );
                if set_field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = Some(TopBarAction::Reload);
                }

                for v in [SetView::Owner, SetView::Explore] {
                    if ui.selectable_label(view == v, v.label()).clicked() && view != v {
                        action = Some(TopBarAction::SetView(v));
                    }
                }

                ui.separator();

                for m in [StudyMode::Browse, StudyMode::Random, StudyMode::Quiz] {
                    if ui.selectable_label(mode == m, m.label()).clicked() && mode != m {
                        action = Some(TopBarAction::SetMode(m));
                    }
                }

                ui.separator();

                if ui
                    .add_enabled(can_edit, egui::Button::new("➕ Add Card"))
                    .on_hover_text("Create a card in this set")
                    .clicked()
                {
                    action = Some(TopBarAction::AddCard);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, api_online);

                    if loading {
                        ui.add(egui::Spinner::new());
                    } else if ui.button("⟳").on_hover_text("Reload cards").clicked() {
                        action = Some(TopBarAction::Reload);
                    }
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, api_online: bool) {
        let (color, tooltip) = if api_online {
            (egui::Color32::from_rgb(0, 200, 0), "Connected to the card server")
        } else {
            (egui::Color32::from_rgb(200, 80, 80), "Card server unreachable")
        };

        ui.colored_label(color, "●").on_hover_text(tooltip);
    }
}
