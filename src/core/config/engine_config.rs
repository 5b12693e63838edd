// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Engine Configuration
//!
//! Typed view over the layered [`FlatConfig`]. Values from built-in
//! defaults, the TOML file and the environment form the base layer;
//! `SET` values live in a separate session layer so `RESET` can drop them
//! and fall back to whatever the base layer resolved.
//!
//! ```toml
//! [engine]
//! extra_float_digits = 0
//! max_text_length = 1048576
//! log_statements = true
//! ```

use super::eval_context::{EvalContext, DEFAULT_MAX_TEXT_LENGTH};
use super::flat_config::{FlatConfig, PropertySource};
use crate::core::error::{PgError, SqlState};
use crate::core::value::DEFAULT_EXTRA_FLOAT_DIGITS;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EXTRA_FLOAT_DIGITS: &str = "extra_float_digits";
pub const MAX_TEXT_LENGTH: &str = "max_text_length";
pub const LOG_STATEMENTS: &str = "log_statements";

/// Prefix of the environment variables read by [`EngineConfig::with_env`]
pub const ENV_PREFIX: &str = "PGSCALAR_";

/// Errors raised while loading or changing settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unrecognized configuration parameter \"{0}\"")]
    UnrecognizedParameter(String),

    #[error("invalid value for parameter \"{name}\": \"{value}\"")]
    InvalidValue { name: String, value: String },

    #[error("{value} is outside the valid range for parameter \"{name}\" ({min} .. {max})")]
    OutOfRange {
        name: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("parameter \"{0}\" requires a Boolean value")]
    NotBoolean(String),

    #[error("could not read configuration file \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error in configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<ConfigError> for PgError {
    fn from(err: ConfigError) -> Self {
        let code = match &err {
            ConfigError::UnrecognizedParameter(_) => SqlState::UndefinedObject,
            ConfigError::Io { .. } => SqlState::IoError,
            ConfigError::InvalidValue { .. }
            | ConfigError::OutOfRange { .. }
            | ConfigError::NotBoolean(_)
            | ConfigError::Toml(_) => SqlState::InvalidParameterValue,
        };
        PgError::new(code, err.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
enum SettingKind {
    Integer { min: i64, max: i64 },
    Boolean,
}

struct SettingDef {
    name: &'static str,
    kind: SettingKind,
    default: &'static str,
}

const SETTINGS: &[SettingDef] = &[
    SettingDef {
        name: EXTRA_FLOAT_DIGITS,
        kind: SettingKind::Integer { min: -15, max: 3 },
        default: "1",
    },
    SettingDef {
        name: MAX_TEXT_LENGTH,
        kind: SettingKind::Integer {
            min: 1,
            max: DEFAULT_MAX_TEXT_LENGTH as i64,
        },
        default: "1073741823",
    },
    SettingDef {
        name: LOG_STATEMENTS,
        kind: SettingKind::Boolean,
        default: "off",
    },
];

fn lookup(name: &str) -> Result<&'static SettingDef, ConfigError> {
    let lowered = name.to_lowercase();
    SETTINGS
        .iter()
        .find(|def| def.name == lowered)
        .ok_or(ConfigError::UnrecognizedParameter(lowered))
}

/// Validate `value` and return its canonical string form
fn normalize(def: &SettingDef, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_matches('\'');
    match def.kind {
        SettingKind::Integer { min, max } => {
            let parsed: i64 = trimmed.parse().map_err(|_| ConfigError::InvalidValue {
                name: def.name.to_string(),
                value: trimmed.to_string(),
            })?;
            if parsed < min || parsed > max {
                return Err(ConfigError::OutOfRange {
                    name: def.name.to_string(),
                    value: parsed,
                    min,
                    max,
                });
            }
            Ok(parsed.to_string())
        }
        SettingKind::Boolean => match trimmed.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" | "t" => Ok("on".to_string()),
            "off" | "false" | "no" | "0" | "f" => Ok("off".to_string()),
            _ => Err(ConfigError::NotBoolean(def.name.to_string())),
        },
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    engine: EngineSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EngineSection {
    extra_float_digits: Option<i64>,
    max_text_length: Option<i64>,
    log_statements: Option<bool>,
}

/// Engine settings
#[derive(Debug, Clone)]
pub struct EngineConfig {
    base: FlatConfig,
    session: FlatConfig,
}

impl EngineConfig {
    /// Built-in defaults only
    pub fn new() -> Self {
        let mut base = FlatConfig::new();
        for def in SETTINGS {
            base.set(def.name, def.default, PropertySource::RustDefault);
        }
        Self {
            base,
            session: FlatConfig::new(),
        }
    }

    /// Defaults overlaid with the `[engine]` table of a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        config.apply_toml(content)?;
        Ok(config)
    }

    /// Defaults overlaid with a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading engine configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Resolve the configuration the CLI uses: defaults, then the given file
    /// (or the default file if it exists), then the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_toml_file(&default)?,
                _ => Self::new(),
            },
        };
        Ok(config.with_env())
    }

    /// `<config dir>/pgscalar/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pgscalar").join("config.toml"))
    }

    fn apply_toml(&mut self, content: &str) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let section = file.engine;
        let entries = [
            (EXTRA_FLOAT_DIGITS, section.extra_float_digits.map(|v| v.to_string())),
            (MAX_TEXT_LENGTH, section.max_text_length.map(|v| v.to_string())),
            (LOG_STATEMENTS, section.log_statements.map(|v| v.to_string())),
        ];
        for (name, value) in entries {
            if let Some(value) = value {
                let def = lookup(name)?;
                let normalized = normalize(def, &value)?;
                self.base.set(name, normalized, PropertySource::TomlFile);
            }
        }
        Ok(())
    }

    /// Overlay `PGSCALAR_<SETTING>` environment variables; invalid values are
    /// logged and ignored
    pub fn with_env(mut self) -> Self {
        for def in SETTINGS {
            let var = format!("{}{}", ENV_PREFIX, def.name.to_uppercase());
            if let Ok(value) = std::env::var(&var) {
                match normalize(def, &value) {
                    Ok(normalized) => {
                        self.base.set(def.name, normalized, PropertySource::Environment)
                    }
                    Err(e) => log::warn!("Ignoring {}: {}", var, e),
                }
            }
        }
        self
    }

    /// `SET name = value`
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let def = lookup(name)?;
        let normalized = normalize(def, value)?;
        self.session.set(def.name, normalized, PropertySource::SessionSet);
        Ok(())
    }

    /// `RESET name` / `SET name TO DEFAULT`
    pub fn reset(&mut self, name: &str) -> Result<(), ConfigError> {
        let def = lookup(name)?;
        self.session.remove(def.name);
        Ok(())
    }

    /// `RESET ALL`
    pub fn reset_all(&mut self) {
        self.session.clear();
    }

    /// `SHOW name`
    pub fn show(&self, name: &str) -> Result<String, ConfigError> {
        let def = lookup(name)?;
        Ok(self.effective(def.name).unwrap_or(def.default).to_string())
    }

    /// Every setting with its value and source, in declaration order
    pub fn show_all(&self) -> Vec<(&'static str, String, PropertySource)> {
        SETTINGS
            .iter()
            .map(|def| {
                let (value, source) = self
                    .session
                    .get_with_source(def.name)
                    .or_else(|| self.base.get_with_source(def.name))
                    .map(|(v, s)| (v.clone(), s))
                    .unwrap_or_else(|| (def.default.to_string(), PropertySource::RustDefault));
                (def.name, value, source)
            })
            .collect()
    }

    pub fn source_of(&self, name: &str) -> Option<PropertySource> {
        self.session
            .get_with_source(name)
            .or_else(|| self.base.get_with_source(name))
            .map(|(_, source)| source)
    }

    fn effective(&self, name: &str) -> Option<&str> {
        self.session
            .get(name)
            .or_else(|| self.base.get(name))
            .map(String::as_str)
    }

    pub fn extra_float_digits(&self) -> i32 {
        self.effective(EXTRA_FLOAT_DIGITS)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EXTRA_FLOAT_DIGITS)
    }

    pub fn max_text_length(&self) -> usize {
        self.effective(MAX_TEXT_LENGTH)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TEXT_LENGTH)
    }

    pub fn log_statements(&self) -> bool {
        self.effective(LOG_STATEMENTS) == Some("on")
    }

    /// Snapshot of the settings executors read
    pub fn eval_context(&self) -> EvalContext {
        EvalContext {
            extra_float_digits: self.extra_float_digits(),
            max_text_length: self.max_text_length(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
