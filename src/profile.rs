// src/profile.rs

use crate::model::{Avatar, Profile};
use crate::quiz::CompletionRecorder;
use crate::storage::KeyValueStore;
use std::collections::BTreeSet;

/// Único dueño del perfil actual (o de su ausencia, antes del onboarding).
///
/// Toda mutación que cambia algo reescribe el perfil completo en el almacén.
/// Los fallos del almacén se registran y se ignoran: la copia en memoria
/// manda durante el resto de la sesión.
pub struct ProfileStore {
    current: Option<Profile>,
    storage: Box<dyn KeyValueStore>,
    key: String,
}

impl ProfileStore {
    /// Abre el almacén y carga el perfil guardado, si lo hay
    pub fn open(storage: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut store = Self {
            current: None,
            storage,
            key: key.into(),
        };
        store.current = store.load();
        store
    }

    /// Lee el perfil persistido. Ausente o corrupto cuentan igual: `None`.
    pub fn load(&self) -> Option<Profile> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("No hay perfil guardado");
                return None;
            }
            Err(e) => {
                log::warn!("No se pudo leer el perfil: {e}");
                return None;
            }
        };
        match serde_json::from_str::<Profile>(&raw) {
            Ok(profile) => {
                log::info!("Perfil {} cargado", profile.id);
                Some(profile)
            }
            Err(e) => {
                log::warn!("Perfil guardado ilegible, se descarta: {e}");
                None
            }
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    pub fn has_profile(&self) -> bool {
        self.current.is_some()
    }

    /// Sustituye el perfil. Con `None` se borra la copia duradera.
    pub fn set_profile(&mut self, profile: Option<Profile>) {
        self.current = profile;
        self.persist();
    }

    pub fn logout(&mut self) {
        log::info!("Cerrando sesión");
        self.set_profile(None);
    }

    pub fn record_video_watched(&mut self, video_id: &str) -> bool {
        self.insert_into(video_id, |p| &mut p.videos_watched)
    }

    pub fn record_quiz_completed(&mut self, quiz_id: &str) -> bool {
        self.insert_into(quiz_id, |p| &mut p.quizzes_completed)
    }

    pub fn add_badge(&mut self, badge_id: &str) -> bool {
        let added = self.insert_into(badge_id, |p| &mut p.badges);
        if added {
            log::info!("Insignia conseguida: {badge_id}");
        }
        added
    }

    /// Guardado desde Ajustes: nombre, edad y avatar
    pub fn update_details(&mut self, name: String, age: u32, avatar: Avatar) -> bool {
        let Some(profile) = self.current.as_mut() else {
            return false;
        };
        profile.name = name;
        profile.age = age;
        profile.avatar = avatar;
        self.persist();
        true
    }

    /// Vacía vídeos, quizzes e insignias; la identidad se conserva
    pub fn reset_progress(&mut self) -> bool {
        let Some(profile) = self.current.as_mut() else {
            return false;
        };
        profile.videos_watched.clear();
        profile.quizzes_completed.clear();
        profile.badges.clear();
        self.persist();
        true
    }

    // Inserción idempotente: sólo persiste si el id es nuevo
    fn insert_into(
        &mut self,
        id: &str,
        set: impl FnOnce(&mut Profile) -> &mut BTreeSet<String>,
    ) -> bool {
        let Some(profile) = self.current.as_mut() else {
            return false;
        };
        let inserted = set(profile).insert(id.to_owned());
        if inserted {
            self.persist();
        }
        inserted
    }

    fn persist(&mut self) {
        let result = match &self.current {
            Some(profile) => serde_json::to_string(profile)
                .map_err(Into::into)
                .and_then(|json| self.storage.set(&self.key, &json)),
            None => self.storage.remove(&self.key),
        };
        if let Err(e) = result {
            log::warn!("No se pudo guardar el perfil (se sigue en memoria): {e}");
        }
    }
}

impl CompletionRecorder for ProfileStore {
    fn record_quiz_completed(&mut self, quiz_id: &str) -> bool {
        ProfileStore::record_quiz_completed(self, quiz_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::model::AgeGroup;
    use crate::storage::{FileStore, MemoryStore};
    use chrono::Utc;
    use std::cell::Cell;
    use std::rc::Rc;

    const KEY: &str = "sciworld-user";

    fn sample() -> Profile {
        Profile::new("Ana", 9, AgeGroup::Kids, Avatar::Emoji("🚀".into()), Utc::now())
    }

    /// Almacén que cuenta escrituras y puede fallar a voluntad
    struct CountingStore {
        inner: MemoryStore,
        writes: Rc<Cell<usize>>,
        fail: bool,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            if self.fail {
                return Err(StorageError::Unavailable);
            }
            self.inner.set(key, value)
        }
        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            if self.fail {
                return Err(StorageError::Unavailable);
            }
            self.inner.remove(key)
        }
    }

    fn counting(fail: bool) -> (ProfileStore, Rc<Cell<usize>>) {
        let writes = Rc::new(Cell::new(0));
        let store = CountingStore {
            inner: MemoryStore::new(),
            writes: writes.clone(),
            fail,
        };
        (ProfileStore::open(Box::new(store), KEY), writes)
    }

    #[test]
    fn watching_twice_is_idempotent() {
        let (mut store, writes) = counting(false);
        store.set_profile(Some(sample()));
        let after_set = writes.get();

        assert!(store.record_video_watched("1"));
        assert!(!store.record_video_watched("1"));

        assert_eq!(store.profile().unwrap().videos_watched.len(), 1);
        // La segunda llamada no escribe
        assert_eq!(writes.get(), after_set + 1);
    }

    #[test]
    fn mutations_without_profile_are_noops() {
        let (mut store, writes) = counting(false);
        assert!(!store.record_video_watched("1"));
        assert!(!store.record_quiz_completed("q1"));
        assert!(!store.add_badge("curious"));
        assert!(!store.reset_progress());
        assert_eq!(writes.get(), 0);
        assert!(store.profile().is_none());
    }

    #[test]
    fn profile_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = ProfileStore::open(Box::new(FileStore::new(dir.path())), KEY);
            store.set_profile(Some(sample()));
            store.record_video_watched("3");
            store.record_quiz_completed("q1");
        }
        let store = ProfileStore::open(Box::new(FileStore::new(dir.path())), KEY);
        let p = store.profile().unwrap();
        assert_eq!(p.name, "Ana");
        assert!(p.has_watched("3"));
        assert!(p.quizzes_completed.contains("q1"));
    }

    #[test]
    fn clearing_profile_removes_durable_copy() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = ProfileStore::open(Box::new(FileStore::new(dir.path())), KEY);
            store.set_profile(Some(sample()));
            store.set_profile(None);
        }
        let store = ProfileStore::open(Box::new(FileStore::new(dir.path())), KEY);
        assert!(store.profile().is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn malformed_payload_is_treated_as_absent() {
        let mut mem = MemoryStore::new();
        mem.set(KEY, "{not json").unwrap();
        let store = ProfileStore::open(Box::new(mem), KEY);
        assert!(store.profile().is_none());
    }

    #[test]
    fn storage_failures_keep_memory_authoritative() {
        let (mut store, writes) = counting(true);
        store.set_profile(Some(sample()));
        assert!(store.record_video_watched("1"));
        assert!(store.add_badge("curious"));

        let p = store.profile().unwrap();
        assert!(p.has_watched("1"));
        assert!(p.badges.contains("curious"));
        assert_eq!(writes.get(), 3);
    }

    #[test]
    fn reset_keeps_identity() {
        let (mut store, _) = counting(false);
        let original = sample();
        store.set_profile(Some(original.clone()));
        store.record_video_watched("1");
        store.record_quiz_completed("q1");
        store.add_badge("curious");

        assert!(store.reset_progress());
        let p = store.profile().unwrap();
        assert!(p.videos_watched.is_empty());
        assert!(p.quizzes_completed.is_empty());
        assert!(p.badges.is_empty());
        assert_eq!(p.id, original.id);
        assert_eq!(p.name, original.name);
        assert_eq!(p.created_at, original.created_at);
    }

    #[test]
    fn update_details_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProfileStore::open(Box::new(FileStore::new(dir.path())), KEY);
        store.set_profile(Some(sample()));
        assert!(store.update_details("Leo".into(), 12, Avatar::Emoji("🧠".into())));

        let reopened = ProfileStore::open(Box::new(FileStore::new(dir.path())), KEY);
        let p = reopened.profile().unwrap();
        assert_eq!((p.name.as_str(), p.age), ("Leo", 12));
        assert_eq!(p.avatar, Avatar::Emoji("🧠".into()));

        // Sin perfil no hay nada que actualizar
        let mut empty = ProfileStore::open(Box::new(MemoryStore::new()), KEY);
        assert!(!empty.update_details("X".into(), 10, Avatar::Emoji("🚀".into())));
    }
}
