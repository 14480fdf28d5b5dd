//! Demo configuration: TOML file, platform config dir, CLI overrides

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use multigrab_core::{GrabConfig, GrabConfigError, Point3D};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Grab(#[from] GrabConfigError),

    #[error("tick_rate_ms must be greater than zero")]
    InvalidTickRate,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Grab behavior of the manipulated lens
    pub grab: GrabConfig,
    /// Interactive frame period
    pub tick_rate_ms: u64,
    /// Initial position of the manipulated lens
    pub object: [f32; 3],
    /// Player starting position
    pub player_home: [f32; 3],
    /// Where the teleport trigger sends the player
    pub teleport_target: [f32; 3],
    /// Viewer camera height above the player origin
    pub eye_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grab: GrabConfig::default(),
            tick_rate_ms: 16,
            object: [0.0, 1.0, 0.5],
            player_home: [0.0, 0.0, 0.0],
            teleport_target: [5.0, 0.0, 0.0],
            eye_height: 1.6,
        }
    }
}

impl AppConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `<platform config dir>/multigrab/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "multigrab", "multigrab")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Explicit path if given, else the platform default if it exists, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.grab.validate()?;
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn object_position(&self) -> Point3D {
        self.object.into()
    }

    pub fn player_home(&self) -> Point3D {
        self.player_home.into()
    }

    pub fn teleport_target(&self) -> Point3D {
        self.teleport_target.into()
    }
}
