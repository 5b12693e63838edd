// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Layered Settings
//!
//! Engine settings can come from several places. Each value is stored as a
//! string together with the [`PropertySource`] it came from, and a value only
//! replaces another when its source has equal or higher priority.
//!
//! ## Configuration Sources (Priority: Low to High)
//!
//! 1. **RustDefault** - Built-in defaults
//! 2. **TomlFile** - `[engine]` table of the configuration file
//! 3. **Environment** - `PGSCALAR_<SETTING>` variables
//! 4. **SessionSet** - `SET name = value` in the current session

use std::collections::HashMap;

/// Property source identifier with priority ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySource {
    /// Rust code defaults (priority: 0)
    RustDefault,
    /// TOML `[engine]` table (priority: 1)
    TomlFile,
    /// `PGSCALAR_*` environment variables (priority: 2)
    Environment,
    /// `SET` statement (priority: 3)
    SessionSet,
}

impl PropertySource {
    /// Numeric priority for comparison (higher = more important)
    #[inline]
    pub const fn priority(&self) -> u8 {
        match self {
            PropertySource::RustDefault => 0,
            PropertySource::TomlFile => 1,
            PropertySource::Environment => 2,
            PropertySource::SessionSet => 3,
        }
    }

    /// Value of `pg_settings.source` for this layer
    #[inline]
    pub const fn description(&self) -> &'static str {
        match self {
            PropertySource::RustDefault => "default",
            PropertySource::TomlFile => "configuration file",
            PropertySource::Environment => "environment variable",
            PropertySource::SessionSet => "session",
        }
    }
}

/// Flat key-value configuration with source tracking
#[derive(Debug, Clone)]
pub struct FlatConfig {
    properties: HashMap<String, String>,
    sources: HashMap<String, PropertySource>,
}

impl FlatConfig {
    #[inline]
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            sources: HashMap::new(),
        }
    }

    /// Set a property unless an existing value comes from a higher-priority source
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        source: PropertySource,
    ) {
        let key = key.into();
        if let Some(existing_source) = self.sources.get(&key) {
            if existing_source.priority() > source.priority() {
                return;
            }
        }
        self.properties.insert(key.clone(), value.into());
        self.sources.insert(key, source);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }

    /// Get a property value with its source
    #[inline]
    pub fn get_with_source(&self, key: &str) -> Option<(&String, PropertySource)> {
        self.properties
            .get(key)
            .and_then(|value| self.sources.get(key).map(|source| (value, *source)))
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Remove a property, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.sources.remove(key);
        self.properties.remove(key)
    }

    pub fn clear(&mut self) {
        self.properties.clear();
        self.sources.clear();
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    /// Merge another configuration into this one (respects priorities)
    pub fn merge(&mut self, other: &FlatConfig) {
        for (key, value) in &other.properties {
            if let Some(source) = other.sources.get(key) {
                self.set(key.clone(), value.clone(), *source);
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for FlatConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
