use crate::app::SciWorldApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};

/// Pantalla para ids que no están en el catálogo
pub fn ui_not_found(app: &mut SciWorldApp, ctx: &Context, what: &str, now: f64) {
    centered_panel(ctx, 160.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("{what} not found"));
            ui.add_space(16.0);
            if ui.add_sized([220.0, 36.0], Button::new("Back to Explore")).clicked() {
                app.open_explore(None, now);
            }
        });
    });
}
