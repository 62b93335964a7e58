//! Settings parser for .penh/config.toml

use super::types::Settings;
use penh_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const PENH_DIR: &str = ".penh";

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config(e.to_string()))
}

/// Load settings from an explicit file. Errors are returned to the caller.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings = parse_settings(&content)?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Load settings from `.penh/config.toml` under `project_path`
///
/// A missing, unreadable or invalid file falls back to defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(PENH_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_file(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) {
        let penh_dir = dir.join(PENH_DIR);
        std::fs::create_dir_all(&penh_dir).unwrap();
        std::fs::write(penh_dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_partial_override() {
        let temp = tempdir().unwrap();
        write_config(
            temp.path(),
            r#"
[selectors]
table_id = "user-permissions"

[glyphs]
collapsed = "+"
"#,
        );

        let settings = load_settings(temp.path());

        assert_eq!(settings.selectors.table_id, "user-permissions");
        assert_eq!(settings.glyphs.collapsed, "+");
        assert_eq!(settings.glyphs.expanded, "▼");
        assert_eq!(settings.classes.prefix, "permissions-enhancer");
    }

    #[test]
    fn test_load_settings_invalid_toml_falls_back() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[classes\nprefix = ");

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_file_reports_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[glyphs]\nexpanded = 3").unwrap();

        let err = load_settings_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = load_settings_file(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_parse_settings_empty_is_default() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_settings_prefix() {
        let settings = parse_settings("[classes]\nprefix = \"pe\"").unwrap();
        assert_eq!(settings.classes.processed(), "pe-processed");
    }
}
