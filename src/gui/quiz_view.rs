use eframe::egui;
use egui_extras::{
    Size,
    StripBuilder,
};

use crate::{
    core::{
        models::QuizDirection,
        study::StudyState,
    },
    gui::theme::Theme,
};

/// Four-option multiple choice over the loaded collection. The first click
/// locks the answer and reveals the result colors; "next question" rolls a
/// fresh one.
pub fn quiz_view(ui: &mut egui::Ui, theme: &Theme, study: &mut StudyState) {
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.label("Direction:");
        for direction in [QuizDirection::WordToMeaning, QuizDirection::MeaningToWord] {
            let selected = study.quiz_direction == direction;
            if ui.selectable_label(selected, direction.label()).clicked() && !selected {
                study.set_quiz_direction(direction);
            }
        }
    });

    ui.separator();

    if study.question.is_none() {
        ui.centered_and_justified(|ui| {
            ui.label(theme.muted(
                ui.ctx(),
                "Quiz needs at least 4 cards with distinct answers. Add more cards first.",
            ));
        });
        return;
    }

    let mut selected_option = None;
    let mut advance = false;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(420.0))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                let question = study.question.as_ref().expect("checked above");

                ui.add_space(16.0);
                ui.label(theme.muted(ui.ctx(), &format!("Question {}", study.question_number + 1)));
                ui.add_space(4.0);
                ui.label(theme.bold(ui.ctx(), question.prompt()).size(28.0));
                ui.add_space(16.0);

                let locked = question.is_locked();

                for (index, option) in question.options.iter().enumerate() {
                    let mut button = egui::Button::new(egui::RichText::new(option).size(16.0))
                        .min_size(egui::Vec2::new(420.0, 36.0));

                    if locked {
                        if question.is_correct(index) {
                            button = button.fill(theme.green(ui.ctx()).gamma_multiply(0.35));
                        } else if question.selected == Some(index) {
                            button = button.fill(theme.red(ui.ctx()).gamma_multiply(0.35));
                        }
                    }

                    if ui.add(button).clicked() && !locked {
                        selected_option = Some(index);
                    }
                    ui.add_space(6.0);
                }

                if locked {
                    ui.add_space(8.0);
                    let correct = question.selected.map(|i| question.is_correct(i)).unwrap_or(false);
                    if correct {
                        ui.colored_label(theme.green(ui.ctx()), "Correct!");
                    } else {
                        ui.colored_label(
                            theme.red(ui.ctx()),
                            format!("The answer was \"{}\"", question.answer()),
                        );
                    }

                    ui.add_space(8.0);
                    if ui.button("Next question ⏵").clicked() {
                        advance = true;
                    }
                }
            });
            strip.empty();
        });

    if let Some(index) = selected_option {
        study.select_option(index);
    }
    if advance {
        study.next_question();
    }
}
