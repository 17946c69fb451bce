use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable overriding `stempel_file`.
pub const ENV_FILE_PATH: &str = "FILE_PATH";
/// Environment variable overriding `monthly_compensated`.
pub const ENV_MONTHLY_COMPENSATED: &str = "MONTHLY_COMPENSATED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_stempel_file")]
    pub stempel_file: String,
    #[serde(default)]
    pub monthly_compensated: f64,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_stempel_file() -> String {
    "~/StempelUhrDataBackup.csv".to_string()
}
fn default_delimiter() -> String {
    ";".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stempel_file: default_stempel_file(),
            monthly_compensated: 0.0,
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rovertime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rovertime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rovertime.conf")
    }

    /// Load configuration from file (defaults if not found), then apply
    /// the environment overrides. Not validated yet: CLI overrides still
    /// apply on top, see `validate`.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)?
        } else {
            Config::default()
        };

        cfg.apply_env(|key| env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Apply `FILE_PATH` / `MONTHLY_COMPENSATED` as returned by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_FILE_PATH).filter(|p| !p.trim().is_empty()) {
            self.stempel_file = path;
        }

        if let Some(raw) = lookup(ENV_MONTHLY_COMPENSATED) {
            self.monthly_compensated = parse_hours(&raw)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.monthly_compensated.is_finite() || self.monthly_compensated < 0.0 {
            return Err(AppError::Config(format!(
                "monthly_compensated must be a non-negative number of hours, got {}",
                self.monthly_compensated
            )));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// Path of the time-clock backup with `~` expanded.
    pub fn source_path(&self) -> PathBuf {
        expand_tilde(&self.stempel_file)
    }

    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }

    /// Write the default configuration file if none exists yet.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let path = Self::config_file();

        if is_test || path.exists() {
            return Ok(path);
        }

        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}

/// Parse an hour value coming from the environment or the CLI.
pub fn parse_hours(raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::Config(format!("invalid number of hours: '{raw}'")))
}
