use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::models::SetView;

/// Everything Cardbox remembers between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub set_id: String,
    pub view: SetView,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            set_id: String::new(),
            view: SetView::Owner,
        }
    }
}

pub struct SettingsModal {
    open: bool,
    data: Settings,
    original: Settings,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, data: Settings::default(), original: Settings::default() }
    }

    pub fn open_settings(&mut self, current: Settings) {
        self.data = current.clone();
        self.original = current;
        self.open = true;
    }

    /// Returns the edited settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Settings> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.heading("Settings");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Server URL");
                ui.add(
                    egui::TextEdit::singleline(&mut self.data.base_url)
                        .desired_width(f32::INFINITY)
                        .hint_text("http://localhost:3000/api"),
                );
            });

            if self.data != self.original {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().warn_fg_color, "⚠");
                    ui.label("Settings have been modified");
                });
            }

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    result = Some(self.data.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = Settings {
            base_url: "https://cards.example.com/api".to_string(),
            set_id: "123".to_string(),
            view: SetView::Explore,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn default_settings_deserialize_from_empty_object() {
        // Older settings files may miss newer fields; Default covers them
        // through load_json_or_default, so defaults must stay sensible.
        let settings = Settings::default();
        assert!(!settings.base_url.is_empty());
        assert!(settings.set_id.is_empty());
        assert_eq!(settings.view, SetView::Owner);
    }
}
