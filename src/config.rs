//! TOML configuration at `$XDG_CONFIG_HOME/zcalc/config.toml`.
//!
//! ```toml
//! [keys]
//! aliases = { "k" = "clear", "p" = "add" }
//!
//! [clipboard]
//! copy_on_evaluate = false
//!
//! [display]
//! echo_keys = false
//! ```
//!
//! A missing file means defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::keypad::{KeyMap, KeypadError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid key alias: {0}")]
    InvalidAlias(#[from] KeypadError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keys: KeysConfig,
    pub clipboard: ClipboardConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Single-character key -> button id (`"seven"`, `"multiply"`, `"clear"`, ...)
    pub aliases: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy the display to the clipboard after every completed evaluation.
    pub copy_on_evaluate: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix each display line with the pressed key.
    pub echo_keys: bool,
}

impl Config {
    /// Default location of the config file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from the default location.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.keymap()?;
        Ok(config)
    }

    /// Key map with the configured aliases applied.
    pub fn keymap(&self) -> Result<KeyMap, KeypadError> {
        KeyMap::with_aliases(
            self.keys
                .aliases
                .iter()
                .map(|(key, id)| (key.as_str(), id.as_str())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::Button;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [keys]
            aliases = { "k" = "clear", "p" = "add" }

            [clipboard]
            copy_on_evaluate = true

            [display]
            echo_keys = true
            "#,
        )
        .unwrap();

        assert!(config.clipboard.copy_on_evaluate);
        assert!(config.display.echo_keys);
        let keymap = config.keymap().unwrap();
        assert_eq!(keymap.lookup('k'), Ok(Button::Clear));
    }

    #[test]
    fn test_partial_sections_default() {
        let config = Config::parse("[display]\necho_keys = true\n").unwrap();
        assert!(config.display.echo_keys);
        assert!(!config.clipboard.copy_on_evaluate);
        assert!(config.keys.aliases.is_empty());
    }

    #[test]
    fn test_bad_alias_rejected() {
        let err = Config::parse("[keys]\naliases = { \"q\" = \"sqrt\" }\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAlias(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Config::parse("[keys\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = Path::new("/nonexistent/zcalc/config.toml");
        assert_eq!(Config::load(path).unwrap(), Config::default());
    }
}
