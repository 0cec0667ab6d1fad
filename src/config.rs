use serde::Deserialize;

/// Parámetros de la aplicación. Se construye una vez en la raíz y se pasa
/// explícitamente a quien lo necesite.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Clave bajo la que se guarda el perfil
    pub storage_key: String,
    /// Segundos en la pantalla de vídeo antes de marcarlo como visto
    pub dwell_delay: f64,
    pub max_avatar_bytes: usize,
    pub min_age: u32,
    pub max_age: u32,
    pub recommended_count: usize,
    pub continue_watching_count: usize,
    pub related_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "sciworld-user".to_owned(),
            dwell_delay: 3.0,
            max_avatar_bytes: 5 * 1024 * 1024,
            min_age: 6,
            max_age: 18,
            recommended_count: 3,
            continue_watching_count: 2,
            related_count: 3,
        }
    }
}

impl AppConfig {
    /// Lee un YAML opcional; una ruta relativa se resuelve contra el
    /// directorio de trabajo. Si no existe o está mal formado se usan los
    /// valores por defecto.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_yaml::from_str(&raw) {
                Ok(cfg) => {
                    log::info!("Configuración cargada de {}", path.display());
                    cfg
                }
                Err(e) => {
                    log::warn!("Configuración inválida en {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let cfg: AppConfig = serde_yaml::from_str("dwell_delay: 0.5").unwrap();
        assert_eq!(cfg.dwell_delay, 0.5);
        assert_eq!(cfg.storage_key, "sciworld-user");
        assert_eq!(cfg.max_avatar_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_or_default(&dir.path().join("nope.yaml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
