use crate::app::SciWorldApp;
use crate::quiz::SessionState;
use crate::ui::layout::{scroll_panel, two_button_row};
use crate::ui::views::not_found::ui_not_found;
use egui::{Button, Color32, Context, ProgressBar, RichText, Vec2};

pub fn ui_quiz(app: &mut SciWorldApp, ctx: &Context, video_id: &str, now: f64) {
    let Some(session) = app.session.as_ref() else {
        ui_not_found(app, ctx, "Quiz", now);
        return;
    };

    if session.is_completed() {
        ui_quiz_results(app, ctx, video_id, now);
        return;
    }

    let SessionState::InProgress { current, .. } = session.state() else {
        return;
    };
    let current = *current;
    let total = session.total_questions();
    let Some(question) = session.quiz().questions.get(current).cloned() else {
        return;
    };
    let selected = session.current_answer();
    let progress = session.position_percentage();
    let next_label = if session.is_last_question() { "Finish Quiz" } else { "Next Question" };

    let mut back = false;
    let mut picked = None;
    let mut next = false;

    scroll_panel(ctx, 640.0, |ui| {
        let width = ui.available_width();
        ui.add_space(8.0);
        back = ui.button("⬅ Back to Video").clicked();
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(format!("Question {} of {}", current + 1, total));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{progress}%"));
            });
        });
        ui.add(ProgressBar::new(progress as f32 / 100.0).desired_width(width));
        ui.add_space(14.0);

        ui.heading(&question.prompt);
        ui.add_space(10.0);

        for (idx, option) in question.options.iter().enumerate() {
            let btn = Button::new(RichText::new(option).size(18.0))
                .selected(selected == Some(idx))
                .min_size(Vec2::new(width, 42.0));
            if ui.add(btn).clicked() {
                picked = Some(idx);
            }
            ui.add_space(4.0);
        }
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            next = ui
                .add_enabled(
                    selected.is_some(),
                    Button::new(next_label).min_size(Vec2::new(220.0, 40.0)),
                )
                .clicked();
        });
    });

    if back {
        app.open_video(video_id, now);
    } else if let Some(idx) = picked {
        app.select_answer(idx);
    } else if next {
        app.advance_quiz();
    }
}

/// Resultado final con la revisión pregunta a pregunta
fn ui_quiz_results(app: &mut SciWorldApp, ctx: &Context, video_id: &str, now: f64) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let score = session.score();
    let total = session.total_questions();
    let feedback = session.feedback();
    let review = session.results();
    let options: Vec<Vec<String>> = session
        .quiz()
        .questions
        .iter()
        .map(|q| q.options.clone())
        .collect();

    let mut watch_again = false;
    let mut more_videos = false;

    scroll_panel(ctx, 640.0, |ui| {
        let width = ui.available_width();
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.heading("🏆 Quiz Complete!");
            ui.label(RichText::new(format!("{score}/{total}")).size(40.0).strong());
            ui.label(RichText::new(feedback).size(20.0));
        });
        ui.add_space(16.0);

        for (row, opts) in review.iter().zip(&options) {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new(&row.question).strong());
                let chosen = row
                    .selected
                    .and_then(|i| opts.get(i))
                    .map(String::as_str)
                    .unwrap_or("-");
                ui.label(format!("Your answer: {chosen}"));
                if row.correct {
                    ui.label(RichText::new("✅ Correct!").color(Color32::GREEN));
                } else {
                    ui.label(
                        RichText::new(format!("❌ Correct answer: {}", row.correct_option))
                            .color(Color32::LIGHT_RED),
                    );
                }
            });
            ui.add_space(6.0);
        }
        ui.add_space(12.0);

        (watch_again, more_videos) = two_button_row(ui, width, "Watch Again", "More Videos", true);
    });

    if watch_again {
        app.open_video(video_id, now);
    } else if more_videos {
        app.open_explore(None, now);
    }
}
