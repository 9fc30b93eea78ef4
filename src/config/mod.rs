use crate::db::store::DEFAULT_STORAGE_KEY;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// chrono format used to label new records with today's date.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Directory for `<name>_report.<ext>` files; current directory when unset.
    #[serde(default)]
    pub export_dir: Option<String>,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_date_format() -> String {
    // en-US short date, e.g. 1/15/2025
    "%-m/%-d/%Y".to_string()
}
fn default_format() -> String {
    "xlsx".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            storage_key: default_storage_key(),
            date_format: default_date_format(),
            export_dir: None,
            default_format: default_format(),
            separator_char: default_separator_char(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ojtlogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ojtlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ojtlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ojtlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Format configured for exports when `--format` is not given.
    pub fn export_format(&self) -> AppResult<ExportFormat> {
        ExportFormat::from_name(&self.default_format)
            .ok_or_else(|| AppError::InvalidExportFormat(self.default_format.clone()))
    }

    /// Directory that receives default-named export files.
    pub fn export_dir(&self) -> AppResult<PathBuf> {
        match &self.export_dir {
            Some(dir) => Ok(expand_tilde(dir)),
            None => Ok(env::current_dir()?),
        }
    }

    /// Initialize configuration and database paths. Returns the database path.
    ///
    /// With `is_test` the config file is left alone.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_name {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
