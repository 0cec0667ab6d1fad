use super::*;
use crate::model::AgeGroup;
use crate::quiz::Advance;
use chrono::{DateTime, Utc};

impl SciWorldApp {
    /// Se llama una vez por frame con el reloj de egui
    pub fn tick(&mut self, now: f64) {
        let fired = self
            .dwell
            .as_mut()
            .and_then(|timer| timer.poll(now).map(str::to_owned));
        if let Some(video_id) = fired {
            self.dwell = None;
            if self.store.record_video_watched(&video_id) {
                self.award_badges();
            }
        }
    }

    // ----------- ONBOARDING -----------

    pub fn choose_age_group(&mut self, group: AgeGroup) {
        self.onboarding.select_age_group(group);
        self.message.clear();
    }

    pub fn onboarding_back(&mut self) {
        self.onboarding.back();
        self.message.clear();
    }

    pub fn finish_onboarding(&mut self, created_at: DateTime<Utc>, now: f64) {
        match self.onboarding.complete(&self.config, created_at) {
            Ok(profile) => {
                log::info!("Perfil creado para {}", profile.name);
                self.store.set_profile(Some(profile));
                self.go_to(AppState::Home, now);
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    // ----------- QUIZ -----------

    pub fn select_answer(&mut self, option: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = session.select_answer(option) {
            log::warn!("Respuesta ignorada: {e}");
        }
    }

    /// "Next Question" / "Finish Quiz"
    pub fn advance_quiz(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance(&mut self.store) {
            Ok(Advance::Completed) => self.award_badges(),
            Ok(Advance::Next(_)) => {}
            Err(e) => self.message = e.to_string(),
        }
    }

    // ----------- AJUSTES -----------

    pub fn save_settings(&mut self) {
        match self.settings.validate(&self.config) {
            Ok((name, age, avatar)) => {
                if self.store.update_details(name, age, avatar) {
                    self.message = "Settings saved! Your profile has been updated.".into();
                }
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    pub fn logout(&mut self, now: f64) {
        self.session = None;
        self.store.logout();
        self.go_to(AppState::Onboarding, now);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn dwell_marks_video_and_awards_nothing_yet() {
        let mut app = app_with_profile();
        app.open_video("2", 100.0);
        app.tick(101.0);
        assert!(app.store.profile().unwrap().videos_watched.is_empty());

        app.tick(103.0);
        assert!(app.store.profile().unwrap().has_watched("2"));
        assert!(app.dwell.is_none());
        assert!(app.store.profile().unwrap().badges.is_empty());
    }

    #[test]
    fn onboarding_creates_profile_and_goes_home() {
        let mut app = app();
        app.choose_age_group(AgeGroup::Teens);
        app.onboarding.name = "Leo".into();
        app.onboarding.age = "14".into();
        app.finish_onboarding(Utc::now(), 0.0);

        assert_eq!(app.state, AppState::Home);
        let p = app.store.profile().unwrap();
        assert_eq!(p.age_group, AgeGroup::Teens);
        assert_eq!(p.age, 14);
    }

    #[test]
    fn invalid_onboarding_keeps_wizard_open() {
        let mut app = app();
        app.choose_age_group(AgeGroup::Kids);
        app.onboarding.name = "Ana".into();
        app.onboarding.age = "40".into();
        app.finish_onboarding(Utc::now(), 0.0);

        assert_eq!(app.state, AppState::Onboarding);
        assert!(app.store.profile().is_none());
        assert!(!app.message.is_empty());
    }

    #[test]
    fn finishing_quiz_records_completion_once() {
        let mut app = app_with_profile();
        app.open_quiz("1", 0.0);
        for pick in [1, 2, 0] {
            app.select_answer(pick);
            app.advance_quiz();
        }
        let session = app.session.as_ref().unwrap();
        assert!(session.is_completed());
        assert_eq!(session.score(), 3);
        assert!(app.store.profile().unwrap().quizzes_completed.contains("q1"));

        // Pulsar otra vez no hace nada
        app.advance_quiz();
        assert_eq!(app.store.profile().unwrap().quizzes_completed.len(), 1);
    }

    #[test]
    fn advance_without_answer_shows_message() {
        let mut app = app_with_profile();
        app.open_quiz("2", 0.0);
        app.advance_quiz();
        assert_eq!(app.session.as_ref().unwrap().current_index(), Some(0));
        assert!(!app.message.is_empty());
    }

    #[test]
    fn logout_clears_profile() {
        let mut app = app_with_profile();
        app.logout(0.0);
        assert_eq!(app.state, AppState::Onboarding);
        assert!(app.store.profile().is_none());
        assert!(app.store.load().is_none());
    }
}
