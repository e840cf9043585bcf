use serde::Deserialize;
use std::{env, fs, path::PathBuf};

use tumble_types::RollLimit;

use crate::UiOptions;

/// User configuration, read once at startup from `~/.tumble/config.toml`.
///
/// The file is optional and never written back by the program.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
///
/// [game]
/// roll_limit = 12
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct TumbleConfig {
    pub app: Option<AppConfig>,
    pub game: Option<GameConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the die, borders, and spinner.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the rolling animation and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    /// Roll limit sessions start with. Must be in `[1, 20]`; out-of-range
    /// values are ignored with a warning.
    pub roll_limit: Option<u8>,
}

impl TumbleConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_at(path)
    }

    fn load_at(path: PathBuf) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// The roll limit new sessions start with.
    ///
    /// Uses `[game] roll_limit` when present and valid; anything out of
    /// range is logged and replaced by the default.
    #[must_use]
    pub fn starting_roll_limit(&self) -> RollLimit {
        let Some(value) = self.game.as_ref().and_then(|game| game.roll_limit) else {
            return RollLimit::DEFAULT;
        };
        match RollLimit::new(value) {
            Ok(limit) => limit,
            Err(err) => {
                tracing::warn!("Ignoring configured roll_limit: {err}");
                RollLimit::DEFAULT
            }
        }
    }

    /// UI options from the `[app]` section.
    ///
    /// When the section is absent, the `TUMBLE_ASCII` environment variable
    /// can still force ASCII-only glyphs (useful on terminals without good
    /// glyph coverage).
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        match &self.app {
            Some(app) => UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            },
            None => UiOptions {
                ascii_only: env_flag("TUMBLE_ASCII"),
                ..UiOptions::default()
            },
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|value| {
        let value = value.trim();
        !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
    })
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tumble").join("config.toml"))
}
