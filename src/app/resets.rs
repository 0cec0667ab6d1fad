use super::*;

impl SciWorldApp {
    /// Borra vídeos vistos, quizzes e insignias; el perfil sigue siendo el mismo
    pub fn reset_progress(&mut self) {
        if self.store.reset_progress() {
            log::info!("Progreso reiniciado");
            self.session = None;
            self.message = "Progress reset. Your learning progress has been reset.".into();
        }
        self.confirm_reset = false;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset progress")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to reset all your progress? This cannot be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, reset").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;

    #[test]
    fn reset_clears_progress_but_keeps_profile() {
        let mut app = app_with_profile();
        app.store.record_video_watched("1");
        app.store.add_badge("curious");
        let id = app.store.profile().unwrap().id.clone();

        app.confirm_reset = true;
        app.reset_progress();

        let p = app.store.profile().unwrap();
        assert_eq!(p.id, id);
        assert!(p.videos_watched.is_empty() && p.badges.is_empty());
        assert!(!app.confirm_reset);
    }
}
