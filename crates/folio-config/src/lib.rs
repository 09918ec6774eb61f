//! Configuration for the folio terminal portfolio.
//!
//! The configuration lives in a TOML file under the platform config
//! directory. Every field has a default, so a missing file or a partial file
//! both load cleanly; only unreadable or malformed files are errors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::{BackgroundStyle, ThemeMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Upper bound on the particle count accepted from configuration.
pub const MAX_PARTICLES: usize = 50_000;

/// Upper bound on the frame rate accepted from configuration.
pub const MAX_FPS: u32 = 240;

/// Errors produced while loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Personal details shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    /// Copied to the clipboard from the about section. Empty disables copying.
    pub contact: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            tagline: "Frontend engineer. Motion, type and tiny physics.".to_string(),
            contact: "hello@example.com".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    pub background: BackgroundStyle,
    /// Number of particles in the field, fixed for the lifetime of the scene.
    pub particle_count: usize,
    /// Target frames per second.
    pub fps: u32,
    /// Slowly rotate the particle field around its vertical axis.
    pub rotate: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub profile: Profile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            background: BackgroundStyle::Auto,
            particle_count: 10_000,
            fps: 60,
            rotate: true,
            log_level: "warn".to_string(),
            profile: Profile::default(),
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Clamp numeric fields into their supported ranges.
    pub fn sanitized(mut self) -> Self {
        let particles = self.particle_count.clamp(1, MAX_PARTICLES);
        if particles != self.particle_count {
            tracing::warn!(
                requested = self.particle_count,
                used = particles,
                "particle_count out of range"
            );
            self.particle_count = particles;
        }
        let fps = self.fps.clamp(1, MAX_FPS);
        if fps != self.fps {
            tracing::warn!(requested = self.fps, used = fps, "fps out of range");
            self.fps = fps;
        }
        self
    }
}

/// Platform directories for folio, if the platform has a home directory.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "folio", "folio")
}
