//! Platform-appropriate configuration loading.
//!
//! - **Web**: always the defaults
//! - **Desktop / Mobile** (native): `<config_dir>/user-registry/registry.toml` when present

use model::RegistryConfig;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Load the configuration, falling back to defaults on any problem.
pub fn load_config() -> RegistryConfig {
    #[cfg(target_arch = "wasm32")]
    {
        RegistryConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match config_path() {
            Some(path) => load_config_from(&path),
            None => RegistryConfig::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("user-registry").join(RegistryConfig::filename()))
}

/// Read `path` as a config file. A missing file is silently the default;
/// an unreadable or malformed one is logged and also the default.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config_from(path: &Path) -> RegistryConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return RegistryConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return RegistryConfig::default();
        }
    };
    match RegistryConfig::from_toml(&text) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            RegistryConfig::default()
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("registry.toml"));
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_reads_table_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.toml");
        std::fs::write(&path, "[table]\npage_size = 10\npage_size_options = [10, 50]\n").unwrap();

        let config = load_config_from(&path);
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.table.options(), vec![10, 50]);
    }

    #[test]
    fn test_malformed_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.toml");
        std::fs::write(&path, "[table\npage_size = ").unwrap();
        assert_eq!(load_config_from(&path), RegistryConfig::default());
    }
}
