use crate::app::SciWorldApp;
use crate::ui::helpers::{avatar_badge, emoji_picker};
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, Context, RichText, TextEdit, Vec2};

pub fn ui_settings(app: &mut SciWorldApp, ctx: &Context, now: f64) {
    let mut save = false;
    let mut pick = false;
    let mut remove = false;
    let mut reset = false;
    let mut logout = false;

    scroll_panel(ctx, 560.0, |ui| {
        ui.add_space(12.0);
        ui.heading("⚙ Settings");
        ui.label("Manage your profile and preferences");
        ui.add_space(14.0);

        // ----------- PERFIL -----------
        ui.label(RichText::new("Profile Information").strong());
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            avatar_badge(ui, &mut app.image_cache, &app.settings.avatar, 72.0);
            ui.vertical(|ui| {
                pick = ui.button("📤 Upload image").clicked();
                if app.settings.avatar.is_image() {
                    remove = ui.button("🗑 Remove").clicked();
                }
                ui.label(
                    RichText::new(format!(
                        "PNG, JPG, GIF or WebP, up to {}MB",
                        app.config.max_avatar_bytes / (1024 * 1024)
                    ))
                    .small()
                    .weak(),
                );
            });
        });
        ui.add_space(6.0);
        ui.label("Or pick an emoji");
        if let Some(avatar) = emoji_picker(ui, &app.catalog.avatars, &app.settings.avatar) {
            app.settings.avatar = avatar;
        }
        ui.add_space(10.0);

        ui.label("Name");
        ui.add(TextEdit::singleline(&mut app.settings.name).hint_text("Enter your name"));
        ui.add_space(6.0);
        ui.label("Age");
        ui.add(TextEdit::singleline(&mut app.settings.age));
        ui.add_space(12.0);

        save = ui
            .add(Button::new("💾 Save Changes").min_size(Vec2::new(200.0, 36.0)))
            .clicked();

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
        }
        ui.add_space(20.0);

        // ----------- ZONA DE PELIGRO -----------
        ui.separator();
        ui.label(RichText::new("Danger Zone").strong().color(Color32::LIGHT_RED));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            reset = ui.button("🔄 Reset progress").clicked();
            logout = ui.button("🚪 Log out").clicked();
        });
    });

    if pick {
        app.pick_avatar_image();
    } else if remove {
        app.settings.remove_custom_image();
    } else if save {
        app.save_settings();
    } else if reset {
        app.confirm_reset = true;
    } else if logout {
        app.logout(now);
    }
}
