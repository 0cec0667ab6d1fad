use crate::app::SciWorldApp;
use crate::model::AgeGroup;
use crate::onboarding::OnboardingStep;
use crate::ui::helpers::emoji_picker;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Context, RichText, TextEdit};

pub fn ui_onboarding(app: &mut SciWorldApp, ctx: &Context, now: f64) {
    centered_panel(ctx, 460.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🔬 Welcome to SciWorld!");
            ui.add_space(6.0);
            ui.label("Your journey into amazing science starts here 🚀");
            ui.add_space(18.0);
        });

        let content_width = ui.available_width();

        match app.onboarding.step {
            // ----------- PASO 1: GRUPO DE EDAD -----------
            OnboardingStep::AgeGroup => {
                let button_width = ((content_width - 16.0) / 2.0).clamp(140.0, 260.0);
                ui.horizontal(|ui| {
                    ui.add_space(((ui.available_width() - 2.0 * button_width - 8.0) / 2.0).max(0.0));
                    let kids = ui.add_sized(
                        [button_width, 90.0],
                        Button::new("🧒 Kids (6-11)\nFun and colorful science adventures!")
                            .selected(app.onboarding.is_selected(AgeGroup::Kids)),
                    );
                    let teens = ui.add_sized(
                        [button_width, 90.0],
                        Button::new("🧑 Teens (12-18)\nDive deep into scientific concepts!")
                            .selected(app.onboarding.is_selected(AgeGroup::Teens)),
                    );
                    if kids.clicked() {
                        app.choose_age_group(AgeGroup::Kids);
                    }
                    if teens.clicked() {
                        app.choose_age_group(AgeGroup::Teens);
                    }
                });
            }

            // ----------- PASO 2: DATOS -----------
            OnboardingStep::Details => {
                ui.label(RichText::new("Create Your Profile").strong());
                ui.label("Tell us a bit about yourself!");
                ui.add_space(10.0);

                ui.label("Your Name");
                ui.add(TextEdit::singleline(&mut app.onboarding.name).hint_text("Enter your name"));
                ui.add_space(6.0);

                ui.label("Your Age");
                ui.add(
                    TextEdit::singleline(&mut app.onboarding.age)
                        .hint_text(format!("{}-{}", app.config.min_age, app.config.max_age)),
                );
                ui.add_space(6.0);

                ui.label("Choose Your Avatar");
                if let Some(avatar) = emoji_picker(ui, &app.catalog.avatars, &app.onboarding.avatar) {
                    app.onboarding.avatar = avatar;
                }
                ui.add_space(12.0);

                let can_finish = app.onboarding.can_complete();
                let (back, start) = two_button_row(ui, content_width, "Back", "Start Learning!", can_finish);
                if back {
                    app.onboarding_back();
                }
                if start {
                    app.finish_onboarding(chrono::Utc::now(), now);
                }
            }
        }

        // Mensaje de validación
        if !app.message.is_empty() {
            ui.add_space(10.0);
            ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW).strong());
        }
    });
}
