use crate::app::SciWorldApp;
use crate::ui::helpers::avatar_badge;
use crate::ui::layout::scroll_panel;
use egui::{Color32, Context, Frame, Grid, ProgressBar, RichText};

pub fn ui_dashboard(app: &mut SciWorldApp, ctx: &Context) {
    let Some(profile) = app.store.profile().cloned() else {
        return;
    };
    let stats = app.stat_tiles();
    let next = app.next_badge_card();
    let badges = app.badge_tiles();
    let cache = &mut app.image_cache;

    scroll_panel(ctx, 720.0, |ui| {
        let width = ui.available_width();
        ui.add_space(12.0);

        // Cabecera del perfil
        ui.horizontal(|ui| {
            avatar_badge(ui, cache, &profile.avatar, 64.0);
            ui.vertical(|ui| {
                ui.heading(format!("{}'s Dashboard", profile.name));
                ui.label(format!("Age {} • {}", profile.age, profile.age_group.label()));
            });
        });
        ui.add_space(16.0);

        Grid::new("stats_grid")
            .num_columns(2)
            .spacing([12.0, 12.0])
            .min_col_width((width - 12.0) / 2.0)
            .show(ui, |ui| {
                for (i, tile) in stats.iter().enumerate() {
                    Frame::group(ui.style()).show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(tile.icon).size(26.0));
                            ui.label(RichText::new(tile.value.to_string()).size(28.0).strong());
                            ui.label(tile.title);
                        });
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(16.0);

        if let Some(card) = &next {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new("Next Badge").heading());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(card.icon).size(32.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&card.name).strong());
                        ui.label(&card.challenge);
                    });
                });
                ui.add(ProgressBar::new(card.fraction).text(card.counter_label()));
            });
            ui.add_space(16.0);
        }

        ui.label(RichText::new("Your Badges").heading());
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for tile in &badges {
                let text = RichText::new(tile.label()).size(18.0);
                let text = if tile.earned { text.color(Color32::GOLD) } else { text.weak() };
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(text);
                });
            }
        });
    });
}
