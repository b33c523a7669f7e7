pub mod models;
#[cfg(test)]
mod tests;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, MetadataKindConfigItem, UrlPlaceholderConfigItem,
    XpathPlaceholderConfigItem,
};
use crate::core::types::MetadataKind;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    MetadataKind,
    UrlPlaceholder,
    XpathPlaceholder,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub metadata_kind: MetadataKindConfigItem,
    #[serde(default)]
    pub url_placeholder: UrlPlaceholderConfigItem,
    #[serde(default)]
    pub xpath_placeholder: XpathPlaceholderConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    /// Load the config file, writing one with defaults when it does not
    /// exist yet.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            let config = Self {
                path,
                data: ConfigFile::default(),
                last_change: None,
            };
            config.save()?;
            return Ok(config);
        }
        Self::load_from(path)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn metadata_kind(&self) -> MetadataKind {
        *self.data.metadata_kind.get_value()
    }
    pub fn url_placeholder(&self) -> &str {
        self.data.url_placeholder.get_value()
    }
    pub fn xpath_placeholder(&self) -> &str {
        self.data.xpath_placeholder.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    /// Placeholder matching the active metadata kind.
    pub fn placeholder(&self) -> &str {
        match self.metadata_kind() {
            MetadataKind::Url => self.url_placeholder(),
            MetadataKind::Xpath => self.xpath_placeholder(),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        let mut rows = Vec::new();
        for key in ConfigKey::iter() {
            match key {
                ConfigKey::MetadataKind => rows.push((
                    key.to_string(),
                    self.data.metadata_kind.description().to_string(),
                    self.data.metadata_kind.get_value().to_string(),
                )),
                ConfigKey::UrlPlaceholder => rows.push((
                    key.to_string(),
                    self.data.url_placeholder.description().to_string(),
                    self.data.url_placeholder.get_value().to_string(),
                )),
                ConfigKey::XpathPlaceholder => rows.push((
                    key.to_string(),
                    self.data.xpath_placeholder.description().to_string(),
                    self.data.xpath_placeholder.get_value().to_string(),
                )),
                ConfigKey::FileLoggingEnabled => rows.push((
                    key.to_string(),
                    self.data.file_logging_enabled.description().to_string(),
                    self.data.file_logging_enabled.get_value().to_string(),
                )),
            }
        }
        ConfigRows(rows)
    }

    pub fn set_by_index(&mut self, index: usize, new_value: &str) -> Result<()> {
        let key = ConfigKey::iter()
            .nth(index)
            .ok_or_else(|| Error::Parse(format!("Invalid ID: {index}")))?;
        self.set_key(key, new_value)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.current_value(key);
        let res = match key {
            ConfigKey::MetadataKind => self.edit(|cfg| cfg.metadata_kind.set_value(new_value)),
            ConfigKey::UrlPlaceholder => self.edit(|cfg| cfg.url_placeholder.set_value(new_value)),
            ConfigKey::XpathPlaceholder => {
                self.edit(|cfg| cfg.xpath_placeholder.set_value(new_value))
            }
            ConfigKey::FileLoggingEnabled => {
                self.edit(|cfg| cfg.file_logging_enabled.set_value(new_value))
            }
        };

        if res.is_ok() {
            let new_val = self.current_value(key);
            // Stashed for the caller to log.
            self.last_change = Some((key.to_string(), old, new_val));
        }

        res
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        use std::str::FromStr;
        let key = ConfigKey::from_str(key_str).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    fn current_value(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::MetadataKind => self.data.metadata_kind.get_value().to_string(),
            ConfigKey::UrlPlaceholder => self.data.url_placeholder.get_value().to_string(),
            ConfigKey::XpathPlaceholder => self.data.xpath_placeholder.get_value().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        }
    }

    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        f(&mut self.data)?;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
