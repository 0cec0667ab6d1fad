use crate::app::SciWorldApp;
use crate::ui::helpers::video_list;
use crate::ui::layout::scroll_panel;
use crate::view_models::icon_symbol;
use egui::{Context, RichText, TextEdit};

pub fn ui_explore(app: &mut SciWorldApp, ctx: &Context, now: f64) {
    let mut open_video = None;

    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();
        ui.add_space(12.0);
        ui.heading("🧭 Explore Science Videos");
        ui.add_space(8.0);

        ui.add(
            TextEdit::singleline(&mut app.explore.query)
                .hint_text("🔍 Search for videos...")
                .desired_width(width),
        );
        ui.add_space(8.0);

        // Filtro por categoría
        let categories: Vec<(String, String)> = app
            .catalog
            .categories
            .iter()
            .map(|c| (c.id.clone(), format!("{} {}", icon_symbol(&c.icon), c.name)))
            .collect();
        ui.horizontal_wrapped(|ui| {
            for (id, label) in &categories {
                let selected = app.explore.category.as_deref() == Some(id.as_str());
                if ui.selectable_label(selected, label).clicked() {
                    app.toggle_category(id);
                }
            }
        });
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(app.explore_heading()).heading());
            if app.explore.category.is_some() && ui.button("Clear Filter").clicked() {
                app.explore.category = None;
            }
        });
        ui.add_space(6.0);

        let cards = app.video_cards(&app.explore_results());
        if cards.is_empty() {
            ui.label("No videos found. Try a different search!");
        } else {
            open_video = video_list(ui, &cards, width);
        }
    });

    if let Some(id) = open_video {
        app.open_video(&id, now);
    }
}
