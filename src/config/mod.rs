use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

impl Config {
    /// Directory holding the (symlink-resolved) executable.
    pub fn install_dir() -> PathBuf {
        env::current_exe()
            .and_then(|p| p.canonicalize())
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::install_dir().join("rtracker.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::install_dir().join("db.sqlite3")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A relative `database` is resolved against the install directory.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let db = Path::new(&cfg.database);
        if db.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            cfg.database = base.join(db).to_string_lossy().to_string();
        }

        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
