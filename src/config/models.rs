use crate::core::types::{Bool, MetadataKind, Url};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataKindConfigItem {
    pub value: MetadataKind,
    pub description: String,
}

impl Default for MetadataKindConfigItem {
    fn default() -> Self {
        Self {
            value: MetadataKind::Url,
            description: "Which per-course value the link section collects.".into(),
        }
    }
}

impl ConfigItem<MetadataKind> for MetadataKindConfigItem {
    fn get_value(&self) -> &MetadataKind {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = MetadataKind::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlPlaceholderConfigItem {
    pub value: String,
    pub description: String,
}

impl Default for UrlPlaceholderConfigItem {
    fn default() -> Self {
        Self {
            value: "https://example.com/course".into(),
            description: "URL emitted for courses with no stored link.".into(),
        }
    }
}

impl ConfigItem<String> for UrlPlaceholderConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        // The placeholder lands in exported files, so it must itself be a URL.
        let url = Url::try_from_str(new_value)?;
        self.value = url.into_string();
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XpathPlaceholderConfigItem {
    pub value: String,
    pub description: String,
}

impl Default for XpathPlaceholderConfigItem {
    fn default() -> Self {
        Self {
            value: "/html/body/div[4]/div[2]/div/div/section/div/div/div/aside/section[2]/div/div/div[1]/div[2]/div/div/div[1]/div/div/div[3]/div[1]/div/div[1]/a/span[3]".into(),
            description: "XPath emitted for courses with no stored locator.".into(),
        }
    }
}

impl ConfigItem<String> for XpathPlaceholderConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        if new_value.trim().is_empty() {
            return Err(Error::Validation(
                "XPath placeholder must not be empty.".into(),
            ));
        }
        self.value = new_value.trim().to_string();
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
