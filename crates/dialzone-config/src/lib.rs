use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialzone_core::{AreaCodeTable, CoreError, TimezoneCode};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialzone";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub default_timezone: Option<TimezoneCode>,
    /// Replaces the built-in table when set.
    pub area_codes: Option<AreaCodeTable>,
}

impl AppConfig {
    pub fn area_code_table(&self) -> std::result::Result<AreaCodeTable, CoreError> {
        match &self.area_codes {
            Some(table) => Ok(table.clone()),
            None => AreaCodeTable::north_american(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_timezone value: {0}")]
    InvalidDefaultTimezone(String),
    #[error("invalid timezone in [area_codes]: {0}")]
    InvalidAreaCodeTimezone(String),
    #[error("[area_codes] {0} must be an array of strings")]
    InvalidAreaCodeList(String),
    #[error("invalid [area_codes] table: {0}")]
    AreaCodes(#[source] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
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
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_timezone: Option<String>,
    area_codes: Option<toml::Table>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(table) = parsed.area_codes {
        config.area_codes = Some(parse_area_codes(table)?);
    }

    if let Some(raw) = parsed.default_timezone {
        let timezone = match &config.area_codes {
            Some(table) => table.resolve_timezone(&raw).ok(),
            None => raw.parse::<TimezoneCode>().ok(),
        };
        config.default_timezone =
            Some(timezone.ok_or(ConfigError::InvalidDefaultTimezone(raw))?);
    }

    Ok(config)
}

fn parse_area_codes(table: toml::Table) -> Result<AreaCodeTable> {
    let mut entries = Vec::with_capacity(table.len());
    for (key, value) in table {
        let timezone = key
            .parse::<TimezoneCode>()
            .map_err(|_| ConfigError::InvalidAreaCodeTimezone(key.clone()))?;
        let codes = value
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
            })
            .ok_or(ConfigError::InvalidAreaCodeList(key))?;
        entries.push((timezone, codes));
    }
    AreaCodeTable::new(entries).map_err(ConfigError::AreaCodes)
}
