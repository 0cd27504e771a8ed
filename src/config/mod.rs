use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// CSV file holding the records; relative paths are anchored at the
    /// config dir.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
    /// Width in characters of the longest bar in `list --chart`.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_data_file() -> String {
    Config::default_data_file().to_string_lossy().to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> bool {
    true
}
fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pushlog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".pushlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pushlog.conf")
    }

    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("data").join("pushup_records.csv")
    }

    pub fn log_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("{}: {e}", Self::config_file().display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Absolute path of the data file.
    pub fn data_path(&self) -> PathBuf {
        resolve(&self.data_file, &Self::config_dir())
    }

    /// Writes the config file (unless `is_test`) and returns the config that
    /// was written. `custom_data` replaces the default data file path.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(path) = custom_data {
            config.data_file = path;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }
}
