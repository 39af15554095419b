//! User preferences.
//!
//! Preferences are stored as YAML. The built-in defaults are always loaded
//! first and the user's file is layered on top, so the user's file only needs
//! to contain the values that differ from the defaults.

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::Result;
use facecube_core::{MAX_SCRAMBLE_LENGTH, ScrambleParams};
use serde::{Deserialize, Serialize};

pub mod paths;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Scramble preferences.
    pub scramble: ScramblePreferences,
    /// Text display preferences.
    pub display: DisplayPreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

/// Preferences for scrambling the cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScramblePreferences {
    /// Number of moves in a scramble.
    pub length: u32,
    /// Fixed seed. If this is set, every scramble of the same length is
    /// identical.
    pub seed: Option<String>,
}

impl ScramblePreferences {
    /// Returns scramble parameters for a scramble of `length` moves, or the
    /// preferred length if `length` is `None`. The length is capped at
    /// [`MAX_SCRAMBLE_LENGTH`].
    pub fn params(&self, length: Option<u32>) -> ScrambleParams {
        let length = length.unwrap_or(self.length).min(MAX_SCRAMBLE_LENGTH);
        match &self.seed {
            Some(seed) => ScrambleParams::with_seed(length, seed.clone()),
            None => ScrambleParams::new(length),
        }
    }
}

/// Preferences for printing the cube as text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplayPreferences {
    /// Whether to use ANSI colors.
    pub color: bool,
    /// Text to print for each facelet when using color.
    pub sticker: String,
}

impl Preferences {
    /// Loads preferences from the user preferences file. If loading fails, then
    /// the existing file is backed up (if possible) and `backup` (or else the
    /// default preferences) is returned.
    pub fn load(backup: Option<Self>) -> Self {
        match paths::prefs_file() {
            Ok(path) => Self::load_from_file(path, backup),
            Err(e) => {
                log::warn!("Error locating user preferences: {e}");
                backup.unwrap_or_default()
            }
        }
    }

    /// Loads preferences from `path`, layered over the defaults. A missing file
    /// is not an error.
    pub fn load_from_file(path: &Path, backup: Option<Self>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        let user_config_source = config::File::from(path)
            .format(PREFS_FILE_FORMAT)
            .required(false);

        config::Config::builder()
            .add_source(default_config_source)
            .add_source(user_config_source)
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                match paths::back_up_file(path) {
                    Ok(Some(backup)) => log::info!("invalid preferences moved to {}", backup.display()),
                    Ok(None) => (),
                    Err(e) => log::error!("{e:#}"),
                }
                backup.unwrap_or_default()
            })
    }

    /// Saves preferences to the user preferences file.
    pub fn save(&self) -> Result<()> {
        self.save_to_file(paths::prefs_file()?)
    }

    /// Saves preferences to `path`, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("saved preferences to {}", path.display());
        Ok(())
    }
}
