use crate::app::SciWorldApp;
use crate::model::AppState;
use crate::ui::apply_theme;
use crate::ui::helpers::avatar_badge;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui};

pub fn top_panel(app: &mut SciWorldApp, ctx: &Context, now: f64) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("✨ SciWorld");
            ui.add_space(16.0);

            let items = [
                ("🏠 Home", AppState::Home),
                ("🧭 Explore", AppState::Explore),
                ("📊 Dashboard", AppState::Dashboard),
                ("⚙ Settings", AppState::Settings),
            ];
            for (label, target) in items {
                let active = app.state == target;
                if ui.selectable_label(active, label).clicked() && !active {
                    app.go_to(target, now);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(profile) = app.store.profile() {
                    let name = profile.name.clone();
                    let avatar = profile.avatar.clone();
                    ui.label(name);
                    avatar_badge(ui, &mut app.image_cache, &avatar, 28.0);
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut SciWorldApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    app.prefs.dark_mode = true;
                    apply_theme(ctx, true);
                }
                if ui.button("☀ Light mode").clicked() {
                    app.prefs.dark_mode = false;
                    apply_theme(ctx, false);
                }
            }
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical para las pantallas largas (inicio, explorar, panel)
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
            });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    right_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right_enabled, |ui| {
                ui.add_sized([btn_w, 36.0], Button::new(right_label))
            })
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
