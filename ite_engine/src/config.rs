use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Keys the engine itself reads; scattered string literals invite typos.
pub mod keys {
    pub const LANGUAGE: &str = "language";
    pub const SUBTITLES: &str = "subtitles";
    pub const SFX_VOLUME: &str = "sfx_volume";
    pub const MUSIC_VOLUME: &str = "music_volume";
    pub const SPEECH_VOLUME: &str = "speech_volume";
    pub const SAVE_PATH: &str = "savepath";
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSetting {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl From<JsonSetting> for ConfigValue {
    fn from(value: JsonSetting) -> Self {
        match value {
            JsonSetting::String(s) => ConfigValue::String(s),
            JsonSetting::Int(i) => ConfigValue::Int(i),
            JsonSetting::Bool(b) => ConfigValue::Bool(b),
            JsonSetting::Float(f) => ConfigValue::Float(f),
        }
    }
}

/// The engine's settings store, persisted as a flat JSON object.
///
/// Writes only mark the store dirty when a value actually changes, and
/// [`ConfigManager::flush_to_disk`] is a no-op while clean, so callers can
/// flush unconditionally on shutdown paths.
#[derive(Debug, Default, Clone)]
pub struct ConfigManager {
    settings: HashMap<String, ConfigValue>,
    dirty: bool,
    backing_path: Option<PathBuf>,
}

impl ConfigManager {
    pub fn from_json_file(path: Option<&Path>) -> Result<Self> {
        let mut manager = ConfigManager {
            settings: HashMap::new(),
            dirty: false,
            backing_path: path.map(|p| p.to_path_buf()),
        };
        if let Some(p) = path {
            if p.exists() {
                let raw = fs::read_to_string(p)
                    .with_context(|| format!("failed to read config file: {}", p.display()))?;
                let map: HashMap<String, JsonSetting> = serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse config json: {}", p.display()))?;
                manager
                    .settings
                    .extend(map.into_iter().map(|(k, v)| (k, ConfigValue::from(v))));
            }
        }
        Ok(manager)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.settings.get(key) {
            Some(ConfigValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.settings.get(key) {
            Some(ConfigValue::Int(i)) => Some(*i),
            Some(ConfigValue::Float(f)) => Some(*f as i64),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.settings.get(key) {
            Some(ConfigValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.settings.get(key) {
            Some(ConfigValue::Float(f)) => Some(*f),
            Some(ConfigValue::Int(i)) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set_value(key.into(), ConfigValue::String(value.into()));
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.set_value(key.into(), ConfigValue::Int(value));
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set_value(key.into(), ConfigValue::Bool(value));
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f64) {
        self.set_value(key.into(), ConfigValue::Float(value));
    }

    pub fn remove(&mut self, key: &str) {
        if self.settings.remove(key).is_some() {
            self.dirty = true;
        }
    }

    pub fn backing_path(&self) -> Option<&Path> {
        self.backing_path.as_deref()
    }

    pub fn set_backing_path(&mut self, path: PathBuf) {
        self.backing_path = Some(path);
    }

    pub fn flush_to_disk(&mut self) -> Result<()> {
        let Some(path) = self.backing_path.as_ref() else {
            // No configured backing file; treat as successful no-op.
            self.dirty = false;
            return Ok(());
        };

        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create config directory: {}", parent.display())
                })?;
            }
        }

        let serialized = serde_json::to_string_pretty(&self.to_json()?)
            .with_context(|| format!("failed to serialize config to JSON: {}", path.display()))?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        self.dirty = false;
        Ok(())
    }

    /// The settings as one JSON object, the shape the backing file carries.
    pub fn to_json(&self) -> Result<Value> {
        Ok(Value::Object(self.to_json_map()?))
    }

    fn set_value(&mut self, key: String, value: ConfigValue) {
        let changed = match self.settings.get(&key) {
            Some(existing) => existing != &value,
            None => true,
        };
        if changed {
            self.settings.insert(key, value);
            self.dirty = true;
        }
    }

    fn to_json_map(&self) -> Result<Map<String, Value>> {
        let mut map = Map::new();
        for (key, value) in &self.settings {
            map.insert(key.clone(), Self::setting_to_json(value)?);
        }
        Ok(map)
    }

    fn setting_to_json(value: &ConfigValue) -> Result<Value> {
        match value {
            ConfigValue::String(s) => Ok(Value::String(s.clone())),
            ConfigValue::Int(i) => Ok(Value::Number((*i).into())),
            ConfigValue::Bool(b) => Ok(Value::Bool(*b)),
            ConfigValue::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or_else(|| anyhow!("unable to serialize NaN/inf float to JSON")),
        }
    }
}
