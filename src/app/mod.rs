use crate::config::AppConfig;
use crate::data::Catalog;
use crate::dwell::DwellTimer;
use crate::model::{AppState, Avatar};
use crate::onboarding::Onboarding;
use crate::profile::ProfileStore;
use crate::quiz::QuizSession;
use crate::storage::{KeyValueStore, default_store};
use crate::ui::helpers::AvatarCache;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod settings;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{BadgeTile, NextBadgeCard, StatTile, VideoCard};
pub use navigation::HomeClick;
pub use settings::SettingsForm;

pub const APP_ID: &str = "SciWorld";

/// Preferencias de la UI, guardadas por eframe aparte del perfil
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ExploreFilter {
    pub query: String,
    pub category: Option<String>,
}

pub struct SciWorldApp {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub store: ProfileStore,
    pub state: AppState,
    pub onboarding: Onboarding,
    pub settings: SettingsForm,
    pub session: Option<QuizSession>,
    pub dwell: Option<DwellTimer>,
    pub explore: ExploreFilter,
    pub prefs: UiPrefs,
    pub message: String,
    pub confirm_reset: bool,
    pub image_cache: AvatarCache,
}

impl SciWorldApp {
    /// Arranque normal: almacén duradero de la plataforma
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self::with_storage(config, catalog, default_store(APP_ID))
    }

    pub fn with_storage(
        config: AppConfig,
        catalog: Catalog,
        storage: Box<dyn KeyValueStore>,
    ) -> Self {
        let store = ProfileStore::open(storage, config.storage_key.clone());
        let default_avatar: Avatar = catalog.default_avatar();
        let state = if store.has_profile() {
            AppState::Home
        } else {
            AppState::Onboarding
        };

        let mut app = Self {
            config,
            catalog,
            store,
            state,
            onboarding: Onboarding::new(default_avatar.clone()),
            settings: SettingsForm::empty(default_avatar),
            session: None,
            dwell: None,
            explore: ExploreFilter::default(),
            prefs: UiPrefs::default(),
            message: String::new(),
            confirm_reset: false,
            image_cache: AvatarCache::default(),
        };
        // Un perfil cargado puede tener insignias sin apuntar
        app.award_badges();
        app
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::model::{AgeGroup, Profile};
    use crate::storage::MemoryStore;
    use chrono::Utc;

    pub fn app() -> SciWorldApp {
        let catalog = Catalog::load_embedded().unwrap();
        SciWorldApp::with_storage(AppConfig::default(), catalog, Box::new(MemoryStore::new()))
    }

    pub fn app_with_profile() -> SciWorldApp {
        let mut app = app();
        let p = Profile::new("Ana", 9, AgeGroup::Kids, app.catalog.default_avatar(), Utc::now());
        app.store.set_profile(Some(p));
        app.state = AppState::Home;
        app
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn fresh_install_starts_onboarding() {
        let app = app();
        assert_eq!(app.state, AppState::Onboarding);
        assert!(app.store.profile().is_none());
    }

    #[test]
    fn stored_profile_skips_onboarding() {
        use crate::model::{AgeGroup, Profile};
        use crate::storage::MemoryStore;

        let mut mem = MemoryStore::new();
        let p = Profile::new("Leo", 13, AgeGroup::Teens, Avatar::Emoji("🧠".into()), chrono::Utc::now());
        mem.set("sciworld-user", &serde_json::to_string(&p).unwrap()).unwrap();

        let app = SciWorldApp::with_storage(
            AppConfig::default(),
            Catalog::load_embedded().unwrap(),
            Box::new(mem),
        );
        assert_eq!(app.state, AppState::Home);
        assert_eq!(app.store.profile().unwrap().name, "Leo");
    }
}
