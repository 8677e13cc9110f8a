use crate::utils::error::{Result, UiError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Like requests are joined onto this URL, so it must be a bare http(s) origin or path.
pub fn validate_server_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| UiError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    let url = Url::parse(url_str).map_err(|e| invalid(format!("not a server URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "likes are sent over http(s), not {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(invalid("server URL has no host".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            "server URL cannot carry a query or fragment".to_string(),
        ));
    }
    Ok(())
}

/// Element ids and class names: non-empty, no whitespace.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }

    if value.chars().any(char::is_whitespace) {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_absolute_path(field_name: &str, path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must start with '/'".to_string(),
        });
    }

    if path.contains(char::is_whitespace) || path.contains('\0') {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains whitespace or null bytes".to_string(),
        });
    }

    Ok(())
}

/// The counter needs a positive limit and a warning point at or below it.
pub fn validate_char_limits(warn_threshold: usize, max_chars: usize) -> Result<()> {
    if max_chars == 0 {
        return Err(UiError::InvalidConfigValueError {
            field: "max_chars".to_string(),
            value: max_chars.to_string(),
            reason: "messages need room for at least one character".to_string(),
        });
    }
    if warn_threshold > max_chars {
        return Err(UiError::InvalidConfigValueError {
            field: "warn_threshold".to_string(),
            value: warn_threshold.to_string(),
            reason: format!("the counter would appear only past the {} limit", max_chars),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_server_url() {
        assert!(validate_server_url("base_url", "https://warbler.example.com").is_ok());
        assert!(validate_server_url("base_url", "http://localhost:5000").is_ok());
        assert!(validate_server_url("base_url", "").is_err());
        assert!(validate_server_url("base_url", "invalid-url").is_err());
        assert!(validate_server_url("base_url", "ftp://example.com").is_err());
        assert!(validate_server_url("base_url", "http://localhost:5000/?next=1").is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("modal_id", "myModal").is_ok());
        assert!(validate_identifier("modal_id", "").is_err());
        assert!(validate_identifier("primary_class", "btn primary").is_err());
    }

    #[test]
    fn test_validate_absolute_path() {
        assert!(validate_absolute_path("like_path", "/users/add_like").is_ok());
        assert!(validate_absolute_path("like_path", "users/add_like").is_err());
        assert!(validate_absolute_path("like_path", "/users/ add").is_err());
    }

    #[test]
    fn test_validate_char_limits() {
        assert!(validate_char_limits(260, 280).is_ok());
        assert!(validate_char_limits(280, 280).is_ok());
        assert!(matches!(
            validate_char_limits(300, 280),
            Err(UiError::InvalidConfigValueError { ref field, .. }) if field == "warn_threshold"
        ));
        assert!(matches!(
            validate_char_limits(0, 0),
            Err(UiError::InvalidConfigValueError { ref field, .. }) if field == "max_chars"
        ));
    }
}
