//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed configuration values
    pub schema: ConfigSchema,
    /// Path the configuration was loaded from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or the standard search locations
    ///
    /// With an explicit `path`, the file must exist. Without one, the first
    /// of `kiosk.toml`, `.kiosk.toml`, `$XDG_CONFIG_HOME/kiosk/config.toml`
    /// that exists is used, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            if !p.exists() {
                return Err(Error::config_not_found(p));
            }
            return Ok(Self {
                schema: load_config_file(p)?,
                path: Some(p.to_path_buf()),
            });
        }

        match find_config_file() {
            Some(p) => Ok(Self {
                schema: load_config_file(&p)?,
                path: Some(p),
            }),
            None => Ok(Self::defaults()),
        }
    }

    /// Defaults only, no file
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find a configuration file in the standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("kiosk.toml"), PathBuf::from(".kiosk.toml")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("kiosk").join("config.toml"));
    }

    candidates.into_iter().find(|p| p.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::defaults();
        assert!(config.path.is_none());
        assert_eq!(config.schema.news.default_section, "home");
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let config = Config::load(Some(Path::new("/nonexistent/kiosk.toml")));
        assert!(config.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nemail = \"ana@example.com\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.schema.store.email.as_deref(), Some("ana@example.com"));
        assert!(config.path.is_some());
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }
}
