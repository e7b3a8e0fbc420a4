//! Configuration module for `CourseFinder`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the application directory inside config values
const DIR_VARIABLE: &str = "$COURSE_FINDER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted saved-course and search-history files
    #[serde(default)]
    pub data_dir: String,
}

/// Catalog and discovery configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; empty uses the built-in sample catalog
    #[serde(default)]
    pub file: String,
    /// Courses shown per results page
    #[serde(default)]
    pub page_size: usize,
    /// Maximum number of courses in the comparison tray
    #[serde(default)]
    pub compare_limit: usize,
    /// Maximum number of remembered search terms
    #[serde(default)]
    pub history_limit: usize,
    /// Lifetime of the "saved" notification, in seconds
    #[serde(default)]
    pub toast_seconds: u64,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override catalog file
    pub catalog_file: Option<String>,
    /// Override page size
    pub page_size: Option<usize>,
}

impl Config {
    /// Get the `$COURSE_FINDER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursefinder`
    /// - macOS: `~/Library/Application Support/coursefinder`
    /// - Windows: `%APPDATA%\coursefinder`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursefinder")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero) in the current config and set in
    /// `defaults` are updated, so user settings survive upgrades that add keys.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        changed |= merge_string(&mut self.logging.level, &defaults.logging.level);
        changed |= merge_string(&mut self.logging.file, &defaults.logging.file);
        changed |= merge_string(&mut self.storage.data_dir, &defaults.storage.data_dir);
        changed |= merge_string(&mut self.catalog.file, &defaults.catalog.file);
        changed |= merge_number(&mut self.catalog.page_size, defaults.catalog.page_size);
        changed |= merge_number(
            &mut self.catalog.compare_limit,
            defaults.catalog.compare_limit,
        );
        changed |= merge_number(
            &mut self.catalog.history_limit,
            defaults.catalog.history_limit,
        );
        changed |= merge_number(
            &mut self.catalog.toast_seconds,
            defaults.catalog.toast_seconds,
        );

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the config file is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.storage.data_dir = Self::expand_variables(data_dir);
        }
        if let Some(catalog_file) = &overrides.catalog_file {
            self.catalog.file = Self::expand_variables(catalog_file);
        }
        if let Some(page_size) = overrides.page_size {
            self.catalog.page_size = page_size;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, located
    /// in the directory returned by [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_FINDER` to the application directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$COURSE_FINDER` is expanded
    /// in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.storage.data_dir = Self::expand_variables(&config.storage.data_dir);
        config.catalog.file = Self::expand_variables(&config.catalog.file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults and
    ///   save when anything was added.
    /// - On first run: create the config directory and write the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `catalog_file`,
    /// `page_size`, `compare_limit`, `history_limit`, `toast_seconds`. Dashed
    /// spellings (`data-dir`) are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" => Some(self.storage.data_dir.clone()),
            "catalog_file" => Some(self.catalog.file.clone()),
            "page_size" => Some(self.catalog.page_size.to_string()),
            "compare_limit" => Some(self.catalog.compare_limit.to_string()),
            "history_limit" => Some(self.catalog.history_limit.to_string()),
            "toast_seconds" => Some(self.catalog.toast_seconds.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed for that key (numeric limits must be positive integers).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => {
                let level: crate::logger::Level = value.parse()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" => self.storage.data_dir = value.to_string(),
            "catalog_file" => self.catalog.file = value.to_string(),
            "page_size" => self.catalog.page_size = parse_positive(key, value)?,
            "compare_limit" => self.catalog.compare_limit = parse_positive(key, value)?,
            "history_limit" => self.catalog.history_limit = parse_positive(key, value)?,
            "toast_seconds" => {
                self.catalog.toast_seconds = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid number for '{key}': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" => self.storage.data_dir.clone_from(&defaults.storage.data_dir),
            "catalog_file" => self.catalog.file.clone_from(&defaults.catalog.file),
            "page_size" => self.catalog.page_size = defaults.catalog.page_size,
            "compare_limit" => self.catalog.compare_limit = defaults.catalog.compare_limit,
            "history_limit" => self.catalog.history_limit = defaults.catalog.history_limit,
            "toast_seconds" => self.catalog.toast_seconds = defaults.catalog.toast_seconds,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().replace('-', "_")
}

fn parse_positive(key: &str, value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!(
            "Invalid value for '{key}': '{value}' (expected a positive integer)"
        )),
    }
}

fn merge_string(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

fn merge_number<T: Copy + Default + PartialEq>(field: &mut T, default: T) -> bool {
    if *field == T::default() && default != T::default() {
        *field = default;
        true
    } else {
        false
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  data_dir = \"{}\"", self.storage.data_dir)?;

        writeln!(f, "\n[catalog]")?;
        writeln!(f, "  file = \"{}\"", self.catalog.file)?;
        writeln!(f, "  page_size = {}", self.catalog.page_size)?;
        writeln!(f, "  compare_limit = {}", self.catalog.compare_limit)?;
        writeln!(f, "  history_limit = {}", self.catalog.history_limit)?;
        writeln!(f, "  toast_seconds = {}", self.catalog.toast_seconds)?;

        Ok(())
    }
}
