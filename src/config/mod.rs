//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the theme, the demo seed toggle and key bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ViewHotkeys};

use crate::error::AppError;
use crate::ui::Theme;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/garden-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub seed_demo_plants: bool,
    pub hotkeys: ViewHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_seed_demo_plants")]
    pub seed_demo_plants: bool,
    #[serde(default)]
    pub hotkeys: ViewHotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_seed_demo_plants() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            seed_demo_plants: default_seed_demo_plants(),
            hotkeys: ViewHotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration from the custom directory if provided, or the
    /// default directory otherwise. A missing file is created with the
    /// current values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            debug!("Loading configuration from {}...", file_path.display());
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            data.hotkeys.check_conflicts()?;
            self.theme_name = data.theme_name;
            self.seed_demo_plants = data.seed_demo_plants;
            self.hotkeys = data.hotkeys;
        } else {
            info!("Writing default configuration to {}...", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            seed_demo_plants: self.seed_demo_plants,
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the path of the configuration file once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Replace the theme name after checking that the theme exists.
    ///
    pub fn set_theme_name(&mut self, name: &str) -> Result<(), ConfigError> {
        if Theme::from_name(name).is_none() {
            return Err(ConfigError::UnknownTheme(name.to_string()));
        }
        self.theme_name = name.to_string();
        Ok(())
    }

    /// Resolve the configured theme, falling back to the default for
    /// unknown names.
    ///
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using '{}'.",
                self.theme_name,
                Theme::default().name
            );
            Theme::default()
        })
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
