use crate::app::SciWorldApp;
use crate::ui::helpers::video_list;
use crate::ui::layout::scroll_panel;
use crate::ui::views::not_found::ui_not_found;
use egui::{Button, Context, RichText};

pub fn ui_video(app: &mut SciWorldApp, ctx: &Context, video_id: &str, now: f64) {
    let Some(video) = app.catalog.video(video_id).cloned() else {
        ui_not_found(app, ctx, "Video", now);
        return;
    };

    let watched = app.has_watched(&video.id);
    let has_quiz = app.catalog.quiz_for_video(&video.id).is_some();
    let related = app.video_cards(&app.related_videos(&video));
    let remaining = app.dwell.as_ref().and_then(|t| t.remaining(now));
    let category = app
        .catalog
        .category(&video.category)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| video.category.clone());

    let mut back = false;
    let mut take_quiz = false;
    let mut open_related = None;

    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();
        ui.add_space(8.0);
        back = ui.button("⬅ Back to Videos").clicked();
        ui.add_space(8.0);

        ui.heading(&video.title);
        ui.horizontal(|ui| {
            ui.label(RichText::new(&category).strong());
            ui.label(video.difficulty.as_str());
            ui.label(format!("⏱ {}", video.duration));
            if watched {
                ui.label(RichText::new("✅ Watched").color(egui::Color32::GREEN));
            } else if let Some(secs) = remaining {
                ui.label(RichText::new(format!("👀 {:.0}s", secs.ceil())).weak());
            }
        });
        ui.add_space(8.0);

        // El reproductor vive fuera: le pasamos la URL embebible tal cual
        ui.hyperlink_to(
            RichText::new("▶ Play video").heading(),
            format!("{}?rel=0&modestbranding=1", video.embed_url),
        );
        ui.add_space(8.0);
        ui.label(&video.description);
        ui.add_space(12.0);

        if has_quiz {
            take_quiz = ui
                .add_sized([200.0, 36.0], Button::new("📝 Take Quiz"))
                .clicked();
            ui.add_space(12.0);
        }

        if !related.is_empty() {
            ui.label(RichText::new("Related Videos").heading());
            ui.add_space(6.0);
            open_related = video_list(ui, &related, width);
        }
    });

    if back {
        app.open_explore(None, now);
    } else if take_quiz {
        app.open_quiz(&video.id, now);
    } else if let Some(id) = open_related {
        app.open_video(&id, now);
    }
}
