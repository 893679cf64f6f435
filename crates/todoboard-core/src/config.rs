use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location of the JSON key/value store file.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `"todoboard_domain=debug"`.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todoboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todoboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todoboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Self::default(),
        }
    }

    /// Read configuration from `path`; a missing or unreadable file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse configuration text; malformed input yields the defaults.
    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed config: {}", e);
                Self::default()
            }
        }
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("todoboard")
                .join("store.json")
        })
    }

    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str() {
        let config = AppConfig::from_toml_str(
            r#"
data_file = "/tmp/boards.json"
log_level = "debug"
"#,
        );
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/boards.json")));
        assert_eq!(config.effective_log_level(), "debug");
        assert_eq!(config.effective_data_file(), PathBuf::from("/tmp/boards.json"));
    }

    #[test]
    fn test_malformed_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml_str("data_file = [not toml");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.effective_log_level(), "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"trace\"\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.effective_log_level(), "trace");
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load_from(dir.path()), AppConfig::default());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_config_path_is_under_todoboard_dir() {
        if let Some(path) = AppConfig::config_path() {
            assert!(path.ends_with("todoboard/config.toml"));
        }
    }

    #[test]
    fn test_load_reads_platform_config_path() {
        let expected = AppConfig::config_path()
            .map(|path| AppConfig::load_from(&path))
            .unwrap_or_default();
        assert_eq!(AppConfig::load(), expected);
    }

    #[test]
    fn test_default_data_file_is_under_todoboard_dir() {
        let config = AppConfig::default();
        let path = config.effective_data_file();
        assert!(path.ends_with("todoboard/store.json"));
    }
}
