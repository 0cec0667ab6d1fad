use super::*;

/// Lo que se puede pulsar en la pantalla de inicio
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeClick {
    Video(String),
    Category(String),
    ExploreAll,
}

impl SciWorldApp {
    /// Único punto por el que se cambia de pantalla.
    ///
    /// Sin perfil todo redirige al onboarding. Salir de la pantalla de vídeo
    /// cancela el temporizador pendiente.
    pub fn go_to(&mut self, target: AppState, now: f64) {
        let target = if self.store.has_profile() || target == AppState::Onboarding {
            target
        } else {
            AppState::Onboarding
        };
        if self.state == target {
            return;
        }

        if matches!(self.state, AppState::Video(_)) {
            self.leave_video();
        }
        if matches!(self.state, AppState::Quiz(_)) {
            // Un intento nuevo requiere una sesión nueva
            self.session = None;
        }

        match &target {
            AppState::Video(id) => self.enter_video(id.clone(), now),
            AppState::Quiz(video_id) => self.enter_quiz(video_id.clone()),
            AppState::Settings => self.settings.load_from(self.store.profile()),
            AppState::Onboarding => self.onboarding = Onboarding::new(self.catalog.default_avatar()),
            _ => {}
        }

        self.message.clear();
        self.confirm_reset = false;
        self.state = target;
    }

    pub fn open_home(&mut self, now: f64) {
        self.go_to(AppState::Home, now);
    }

    pub fn open_explore(&mut self, category: Option<String>, now: f64) {
        self.explore.category = category;
        self.go_to(AppState::Explore, now);
    }

    pub fn open_video(&mut self, video_id: &str, now: f64) {
        self.go_to(AppState::Video(video_id.to_owned()), now);
    }

    pub fn open_quiz(&mut self, video_id: &str, now: f64) {
        self.go_to(AppState::Quiz(video_id.to_owned()), now);
    }

    pub fn open_dashboard(&mut self, now: f64) {
        self.go_to(AppState::Dashboard, now);
    }

    pub fn open_settings(&mut self, now: f64) {
        self.go_to(AppState::Settings, now);
    }

    /// Navega según lo pulsado en la pantalla de inicio
    pub fn handle_home_click(&mut self, click: HomeClick, now: f64) {
        match click {
            HomeClick::Video(id) => self.open_video(&id, now),
            HomeClick::Category(category) => self.open_explore(Some(category), now),
            HomeClick::ExploreAll => self.open_explore(None, now),
        }
    }

    /// Pulsar la categoría seleccionada la quita
    pub fn toggle_category(&mut self, category_id: &str) {
        if self.explore.category.as_deref() == Some(category_id) {
            self.explore.category = None;
        } else {
            self.explore.category = Some(category_id.to_owned());
        }
    }

    fn enter_video(&mut self, video_id: String, now: f64) {
        // Vídeo inexistente: la vista enseña "no encontrado" y no hay temporizador
        if self.catalog.video(&video_id).is_some() {
            self.dwell = Some(DwellTimer::start(video_id, now, self.config.dwell_delay));
        }
    }

    fn leave_video(&mut self) {
        if let Some(mut timer) = self.dwell.take() {
            timer.cancel();
        }
    }

    fn enter_quiz(&mut self, video_id: String) {
        self.session = self
            .catalog
            .quiz_for_video(&video_id)
            .cloned()
            .map(QuizSession::new);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn without_profile_everything_redirects_to_onboarding() {
        let mut app = app();
        app.open_dashboard(0.0);
        assert_eq!(app.state, AppState::Onboarding);
        app.open_video("1", 0.0);
        assert_eq!(app.state, AppState::Onboarding);
        assert!(app.dwell.is_none());
    }

    #[test]
    fn leaving_video_early_cancels_the_timer() {
        let mut app = app_with_profile();
        app.open_video("1", 0.0);
        assert!(app.dwell.is_some());

        app.open_home(1.0);
        assert!(app.dwell.is_none());
        app.tick(10.0);
        assert!(app.store.profile().unwrap().videos_watched.is_empty());
    }

    #[test]
    fn unknown_video_starts_no_timer() {
        let mut app = app_with_profile();
        app.open_video("404", 0.0);
        assert_eq!(app.state, AppState::Video("404".into()));
        assert!(app.dwell.is_none());
    }

    #[test]
    fn entering_quiz_starts_fresh_session() {
        let mut app = app_with_profile();
        app.open_quiz("1", 0.0);
        assert_eq!(app.session.as_ref().map(|s| s.quiz().id.as_str()), Some("q1"));

        app.open_quiz("6", 0.0);
        assert!(app.session.is_none());
    }

    #[test]
    fn home_cards_open_the_video_and_start_the_timer() {
        let mut app = app_with_profile();
        let first = app.recommended_videos()[0].id.clone();
        app.handle_home_click(HomeClick::Video(first.clone()), 5.0);
        assert_eq!(app.state, AppState::Video(first));
        assert!(app.dwell.is_some());

        app.handle_home_click(HomeClick::Category("space".into()), 6.0);
        assert_eq!(app.state, AppState::Explore);
        assert_eq!(app.explore.category.as_deref(), Some("space"));
        assert!(app.dwell.is_none());
    }

    #[test]
    fn home_explore_all_clears_the_category() {
        let mut app = app_with_profile();
        app.explore.category = Some("space".into());
        app.handle_home_click(HomeClick::ExploreAll, 0.0);
        assert_eq!(app.state, AppState::Explore);
        assert_eq!(app.explore.category, None);
    }

    #[test]
    fn continue_watching_card_reopens_a_watched_video() {
        let mut app = app_with_profile();
        app.store.record_video_watched("3");
        let id = app.continue_watching()[0].id.clone();
        app.handle_home_click(HomeClick::Video(id), 0.0);
        assert_eq!(app.state, AppState::Video("3".into()));
    }

    #[test]
    fn category_toggle_clears_on_second_click() {
        let mut app = app_with_profile();
        app.toggle_category("space");
        assert_eq!(app.explore.category.as_deref(), Some("space"));
        app.toggle_category("space");
        assert_eq!(app.explore.category, None);
    }
}
