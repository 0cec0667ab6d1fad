pub mod helpers;
pub mod layout;
pub mod views;

use crate::app::{SciWorldApp, UiPrefs};
use crate::config::AppConfig;
use crate::data::Catalog;
use crate::model::AppState;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};
use std::time::Duration;

/// Construye la app a partir del contexto de eframe
pub fn create_app(
    cc: &CreationContext<'_>,
    config: AppConfig,
) -> Result<SciWorldApp, crate::error::CatalogError> {
    egui_extras::install_image_loaders(&cc.egui_ctx);

    let catalog = Catalog::load_embedded()?;
    let mut app = SciWorldApp::new(config, catalog);

    // Preferencias guardadas por eframe (tema)
    if let Some(prefs) = cc.storage.and_then(|s| get_value::<UiPrefs>(s, APP_KEY)) {
        app.prefs = prefs;
    }
    apply_theme(&cc.egui_ctx, app.prefs.dark_mode);
    Ok(app)
}

pub fn apply_theme(ctx: &Context, dark: bool) {
    ctx.set_visuals(if dark { Visuals::dark() } else { Visuals::light() });
}

impl App for SciWorldApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.poll_avatar_pick();
        self.tick(now);

        // Despierta la UI cuando vence el temporizador aunque no haya input
        if let Some(remaining) = self.dwell.as_ref().and_then(|t| t.remaining(now)) {
            ctx.request_repaint_after(Duration::from_secs_f64(remaining));
        }

        // BARRA DE NAVEGACIÓN (sólo con perfil)
        if self.state != AppState::Onboarding {
            top_panel(self, ctx, now);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por estado a las vistas
        match self.state.clone() {
            AppState::Onboarding => views::onboarding::ui_onboarding(self, ctx, now),
            AppState::Home => views::home::ui_home(self, ctx, now),
            AppState::Explore => views::explore::ui_explore(self, ctx, now),
            AppState::Video(id) => views::video::ui_video(self, ctx, &id, now),
            AppState::Quiz(video_id) => views::quiz::ui_quiz(self, ctx, &video_id, now),
            AppState::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            AppState::Settings => views::settings::ui_settings(self, ctx, now),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
