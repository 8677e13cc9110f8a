use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Element not found: {selector}")]
    MissingElement { selector: String },

    #[error("Element {selector} is not a {expected}")]
    WrongElementType { selector: String, expected: String },

    #[error("DOM operation failed: {message}")]
    Dom { message: String },

    #[error("Like request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Like request to {url} returned status {status}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("No async runtime available to send the like request")]
    NoRuntime,

    #[error("Message id cannot be empty")]
    InvalidMessageId,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl UiError {
    pub fn dom(message: impl Into<String>) -> Self {
        UiError::Dom {
            message: message.into(),
        }
    }

    pub fn missing(selector: impl Into<String>) -> Self {
        UiError::MissingElement {
            selector: selector.into(),
        }
    }

    /// Short message suitable for printing to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            UiError::MissingElement { selector } => {
                format!("The page has no element matching {}", selector)
            }
            UiError::WrongElementType { selector, expected } => {
                format!("{} should be a {}", selector, expected)
            }
            UiError::Dom { message } => format!("Browser error: {}", message),
            UiError::Http(e) if e.is_timeout() => "The server did not answer in time".to_string(),
            UiError::Http(_) => "The like request could not be sent".to_string(),
            UiError::UnexpectedStatus { status, .. } => {
                format!("The server rejected the like (HTTP {})", status)
            }
            UiError::NoRuntime => "Likes cannot be sent from this context".to_string(),
            UiError::InvalidMessageId => "A message id is required".to_string(),
            UiError::IoError(e) => format!("File error: {}", e),
            UiError::TomlParse(_) => "The configuration file is not valid TOML".to_string(),
            UiError::ConfigError { message } => format!("Configuration problem: {}", message),
            UiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = UiError::missing("#myModal");
        assert_eq!(err.to_string(), "Element not found: #myModal");
        assert!(err.user_friendly_message().contains("#myModal"));
    }

    #[test]
    fn test_status_message() {
        let err = UiError::UnexpectedStatus {
            status: 500,
            url: "http://localhost/users/add_like/1".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "The server rejected the like (HTTP 500)"
        );
    }
}
