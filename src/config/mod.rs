#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, UiError};
use crate::utils::validation::{
    validate_absolute_path, validate_char_limits, validate_identifier, validate_server_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// DOM contract and constants for the message page.
///
/// Every field has a default matching the stock Warbler templates, so an
/// empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub like_button_class: String,
    pub primary_class: String,
    pub secondary_class: String,
    pub like_path: String,
    pub like_prevents_default: bool,
    pub modal_id: String,
    pub open_link_id: String,
    pub close_class: String,
    pub input_id: String,
    pub label_id: String,
    pub warn_threshold: usize,
    pub max_chars: usize,
    pub base_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            like_button_class: "btn".to_string(),
            primary_class: "btn-primary".to_string(),
            secondary_class: "btn-secondary".to_string(),
            like_path: "/users/add_like".to_string(),
            like_prevents_default: false,
            modal_id: "myModal".to_string(),
            open_link_id: "newMsgLink".to_string(),
            close_class: "close".to_string(),
            input_id: "new-message".to_string(),
            label_id: "charcount".to_string(),
            warn_threshold: 260,
            max_chars: 280,
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PageConfig = toml::from_str(content)?;
        tracing::debug!("Parsed page config: {:?}", config);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| UiError::ConfigError {
            message: format!("Could not serialize config: {}", e),
        })
    }
}

impl Validate for PageConfig {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("like_button_class", &self.like_button_class),
            ("primary_class", &self.primary_class),
            ("secondary_class", &self.secondary_class),
            ("modal_id", &self.modal_id),
            ("open_link_id", &self.open_link_id),
            ("close_class", &self.close_class),
            ("input_id", &self.input_id),
            ("label_id", &self.label_id),
        ] {
            validate_identifier(field, value)?;
        }

        if self.primary_class == self.secondary_class {
            return Err(UiError::InvalidConfigValueError {
                field: "secondary_class".to_string(),
                value: self.secondary_class.clone(),
                reason: "Must differ from primary_class".to_string(),
            });
        }

        validate_absolute_path("like_path", &self.like_path)?;
        validate_server_url("base_url", &self.base_url)?;
        validate_char_limits(self.warn_threshold, self.max_chars)?;

        Ok(())
    }
}
