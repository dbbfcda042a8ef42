use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

struct Toast {
    kind: ToastKind,
    text: String,
    created: Instant,
}

/// Transient corner notifications. Pushed from anywhere in the app, drawn
/// once per frame, dropped after their time is up.
#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    fn push(&mut self, kind: ToastKind, text: impl Into<String>) {
        self.items.push(Toast { kind, text: text.into(), created: Instant::now() });
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.items.retain(|toast| toast.created.elapsed() < TOAST_TTL);

        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_area"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::Vec2::new(-12.0, -12.0))
            .show(ctx, |ui| {
                for toast in self.items.iter().rev() {
                    let accent = match toast.kind {
                        ToastKind::Success => theme.green(ctx),
                        ToastKind::Error => theme.red(ctx),
                    };

                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.5, accent))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.colored_label(accent, "●");
                                ui.label(&toast.text);
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep painting so expiry happens without user input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
