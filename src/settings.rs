//! Feature settings read from the host's settings store.

use std::collections::HashMap;

use thiserror::Error;

/// Key toggling `val`/`var` support.
pub const VAL_ENABLED: &str = "valvar.enabled";

const VAL_ENABLED_DEFAULT: bool = true;

/// Read access to persisted settings.
pub trait SettingsStore {
    fn value(&self, key: &str) -> Option<&str>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("line {line}: expected `key=value` or `key: value`, found '{text}'")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },
}

/// In-memory settings map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Settings { values: HashMap::new() }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Parse `.properties`-style text: `key=value` or `key: value` per line,
    /// `#` and `!` start comments.
    pub fn from_properties(text: &str) -> Result<Settings, SettingsError> {
        let mut settings = Settings::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(sep) = line.find(['=', ':']) else {
                return Err(SettingsError::MalformedLine { line: idx + 1, text: line.to_string() });
            };
            let key = line[..sep].trim();
            if key.is_empty() {
                return Err(SettingsError::EmptyKey { line: idx + 1 });
            }
            settings.set(key, line[sep + 1..].trim());
        }
        Ok(settings)
    }
}

impl SettingsStore for Settings {
    fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Whether `val`/`var` support is switched on. Defaults to enabled.
pub fn is_feature_enabled(store: &dyn SettingsStore) -> bool {
    match store.value(VAL_ENABLED) {
        None => VAL_ENABLED_DEFAULT,
        Some(v) if v.eq_ignore_ascii_case("true") => true,
        Some(v) if v.eq_ignore_ascii_case("false") => false,
        Some(other) => {
            log::warn!("ignoring invalid value '{}' for {}, using {}", other, VAL_ENABLED, VAL_ENABLED_DEFAULT);
            VAL_ENABLED_DEFAULT
        }
    }
}
