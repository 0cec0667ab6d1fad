use crate::app::{HomeClick, SciWorldApp};
use crate::ui::helpers::{big_list_button, video_list};
use crate::ui::layout::scroll_panel;
use crate::view_models::icon_symbol;
use egui::{Context, RichText};

pub fn ui_home(app: &mut SciWorldApp, ctx: &Context, now: f64) {
    let Some(profile) = app.store.profile() else {
        return;
    };
    let greeting = format!(
        "Hey {}! Ready to explore science? {}",
        profile.name,
        if profile.avatar.is_image() { "" } else { profile.avatar.as_str() }
    );
    let continue_cards = app.video_cards(&app.continue_watching());
    let recommended_cards = app.video_cards(&app.recommended_videos());
    let categories: Vec<(String, String)> = app
        .catalog
        .categories
        .iter()
        .map(|c| (c.id.clone(), format!("{} {}", icon_symbol(&c.icon), c.name)))
        .collect();

    // Primer clic del frame
    let mut clicked: Option<HomeClick> = None;

    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();

        // Bienvenida
        ui.add_space(12.0);
        ui.heading(greeting);
        ui.label("Discover amazing videos, take fun quizzes, and become a science superstar!");
        ui.add_space(8.0);
        if big_list_button(ui, "🧭 Start Exploring", 220.0, 36.0, true) {
            clicked.get_or_insert(HomeClick::ExploreAll);
        }
        ui.add_space(18.0);

        if !continue_cards.is_empty() {
            ui.label(RichText::new("Continue Watching").heading());
            ui.add_space(6.0);
            if let Some(id) = video_list(ui, &continue_cards, width) {
                clicked.get_or_insert(HomeClick::Video(id));
            }
            ui.add_space(12.0);
        }

        ui.label(RichText::new("Recommended for You").heading());
        ui.add_space(6.0);
        if let Some(id) = video_list(ui, &recommended_cards, width) {
            clicked.get_or_insert(HomeClick::Video(id));
        }
        ui.add_space(12.0);

        ui.label(RichText::new("Explore Topics").heading());
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for (id, label) in &categories {
                if ui.button(label).clicked() {
                    clicked.get_or_insert(HomeClick::Category(id.clone()));
                }
            }
        });
    });

    if let Some(click) = clicked {
        app.handle_home_click(click, now);
    }
}
