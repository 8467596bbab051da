use crate::errors::{AppError, AppResult};
use crate::models::{CategoryTable, Sport};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON event file; the bundled schedule is used when absent
    #[serde(default)]
    pub events_file: Option<String>,
    /// Sports switched on at startup
    #[serde(default = "default_sports")]
    pub default_sports: Vec<String>,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_card_width")]
    pub card_width: usize,
}

fn default_sports() -> Vec<String> {
    vec![
        Sport::CrossCountry.tag().to_string(),
        Sport::Biathlon.tag().to_string(),
    ]
}
fn default_color() -> bool {
    true
}
fn default_card_width() -> usize {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: None,
            default_sports: default_sports(),
            color: default_color(),
            card_width: default_card_width(),
        }
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wintertv")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wintertv")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wintertv.conf")
    }

    /// Load from the standard location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(yaml: &str) -> AppResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(yaml)?;
        if cfg.card_width == 0 {
            return Err(AppError::Config("card_width must be greater than 0".into()));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file at `path`, keeping an existing one
    /// unless `force` is set. Returns true when the file was written.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Self::default().to_yaml()?)?;
        Ok(true)
    }

    /// Category table with this configuration's startup defaults.
    /// Unknown tags are skipped.
    pub fn categories(&self) -> CategoryTable {
        let enabled: Vec<Sport> = self
            .default_sports
            .iter()
            .filter_map(|tag| {
                let sport = Sport::from_tag(tag.trim());
                if sport.is_none() {
                    warn!("ignoring unknown sport '{}' in default_sports", tag);
                }
                sport
            })
            .collect();

        CategoryTable::with_defaults(&enabled)
    }

    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(expand_tilde)
    }
}
