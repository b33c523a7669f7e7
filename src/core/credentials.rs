use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// LMS credentials written wholesale to a plaintext `key=value` file.
/// The file format is fixed: `lmsid`, `password`, `webhookurl`, one per
/// line, with `null` standing in for a missing webhook URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub lms_id: String,
    pub password: String,
    pub webhook_url: Option<String>,
}

impl Credentials {
    pub fn new(
        lms_id: impl Into<String>,
        password: impl Into<String>,
        webhook_url: Option<String>,
    ) -> Result<Self> {
        let lms_id = lms_id.into();
        let password = password.into();
        if lms_id.trim().is_empty() || password.trim().is_empty() {
            return Err(Error::Validation(
                "Please fill in all required fields.".to_string(),
            ));
        }
        let webhook_url = webhook_url.filter(|url| !url.trim().is_empty());
        Ok(Self {
            lms_id,
            password,
            webhook_url,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "lmsid={}\npassword={}\nwebhookurl={}",
            self.lms_id,
            self.password,
            self.webhook_url.as_deref().unwrap_or("null")
        )
    }

    /// Write the rendered file, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.render())?;
        Ok(path.to_path_buf())
    }
}
