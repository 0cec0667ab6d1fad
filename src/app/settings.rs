use super::*;
use crate::avatar::import_image;
use crate::error::ValidationError;
use crate::model::Profile;
use crate::onboarding::validate_details;

/// Fichero elegido en el selector, pendiente de validar
pub type PickedFile = (String, Vec<u8>);

/// Copia editable de los datos del perfil en la pantalla de Ajustes
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub name: String,
    pub age: String,
    pub avatar: Avatar,
    default_avatar: Avatar,
    #[cfg(target_arch = "wasm32")]
    pending_pick: std::rc::Rc<std::cell::RefCell<Option<PickedFile>>>,
}

impl SettingsForm {
    pub fn empty(default_avatar: Avatar) -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            avatar: default_avatar.clone(),
            default_avatar,
            #[cfg(target_arch = "wasm32")]
            pending_pick: Default::default(),
        }
    }

    pub fn load_from(&mut self, profile: Option<&Profile>) {
        if let Some(p) = profile {
            self.name = p.name.clone();
            self.age = p.age.to_string();
            self.avatar = p.avatar.clone();
        }
    }

    pub fn validate(&self, config: &AppConfig) -> Result<(String, u32, Avatar), ValidationError> {
        let (name, age) = validate_details(&self.name, &self.age, config)?;
        Ok((name, age, self.avatar.clone()))
    }

    /// Sustituye el avatar sólo si la imagen pasa la validación
    pub fn apply_upload(
        &mut self,
        file_name: &str,
        bytes: &[u8],
        limit: usize,
    ) -> Result<(), ValidationError> {
        self.avatar = import_image(file_name, bytes, limit)?;
        Ok(())
    }

    pub fn remove_custom_image(&mut self) {
        if self.avatar.is_image() {
            self.avatar = self.default_avatar.clone();
        }
    }
}

impl SciWorldApp {
    /// Abre el selector de ficheros del sistema
    #[cfg(not(target_arch = "wasm32"))]
    pub fn pick_avatar_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"])
            .pick_file()
        else {
            return;
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match std::fs::read(&path) {
            Ok(bytes) => self.receive_avatar_file((file_name, bytes)),
            Err(e) => {
                log::warn!("No se pudo leer {}: {e}", path.display());
                self.message = "Could not read that file.".into();
            }
        }
    }

    /// En la web el selector es asíncrono: el resultado se recoge en `poll_avatar_pick`
    #[cfg(target_arch = "wasm32")]
    pub fn pick_avatar_image(&mut self) {
        let slot = self.settings.pending_pick.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"])
                .pick_file()
                .await
            else {
                return;
            };
            let bytes = handle.read().await;
            *slot.borrow_mut() = Some((handle.file_name(), bytes));
        });
    }

    #[cfg(target_arch = "wasm32")]
    pub fn poll_avatar_pick(&mut self) {
        let picked = self.settings.pending_pick.borrow_mut().take();
        if let Some(file) = picked {
            self.receive_avatar_file(file);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn poll_avatar_pick(&mut self) {}

    pub fn receive_avatar_file(&mut self, (file_name, bytes): PickedFile) {
        match self
            .settings
            .apply_upload(&file_name, &bytes, self.config.max_avatar_bytes)
        {
            Ok(()) => self.message.clear(),
            Err(e) => self.message = format!("File too large or invalid: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;

    #[test]
    fn oversized_upload_leaves_avatar_unchanged() {
        let mut app = app_with_profile();
        app.open_settings(0.0);
        let before = app.settings.avatar.clone();

        app.receive_avatar_file(("big.png".into(), vec![0; 6 * 1024 * 1024]));
        assert_eq!(app.settings.avatar, before);
        assert!(app.message.contains("5MB"));
    }

    #[test]
    fn upload_then_remove_goes_back_to_default() {
        let mut app = app_with_profile();
        app.open_settings(0.0);
        app.receive_avatar_file(("me.png".into(), vec![1, 2, 3]));
        assert!(app.settings.avatar.is_image());

        app.save_settings();
        assert!(app.store.profile().unwrap().avatar.is_image());

        app.settings.remove_custom_image();
        assert_eq!(app.settings.avatar, app.catalog.default_avatar());
    }

    #[test]
    fn any_small_file_is_taken_as_avatar() {
        let mut app = app_with_profile();
        app.open_settings(0.0);
        app.receive_avatar_file(("scan.bmp".into(), vec![0x42, 0x4d, 0, 0]));
        assert!(app.settings.avatar.is_image());
        assert!(app.message.is_empty());
    }

    #[test]
    fn settings_form_mirrors_profile() {
        let mut app = app_with_profile();
        app.open_settings(0.0);
        assert_eq!(app.settings.name, "Ana");
        assert_eq!(app.settings.age, "9");

        app.settings.age = "3".into();
        app.save_settings();
        assert_eq!(app.store.profile().unwrap().age, 9);
        assert!(app.message.contains("between"));
    }
}
