use crate::utils::error::{Result, UiError};
use std::fmt;

/// Visual state of a like-button, carried as one of two style classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

impl ButtonStyle {
    pub fn flipped(self) -> Self {
        match self {
            ButtonStyle::Primary => ButtonStyle::Secondary,
            ButtonStyle::Secondary => ButtonStyle::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown,
}

impl ModalState {
    /// Inline `display` value that encodes this state.
    pub fn display_value(self) -> &'static str {
        match self {
            ModalState::Hidden => "none",
            ModalState::Shown => "block",
        }
    }

    pub fn from_display(display: Option<&str>) -> Self {
        match display {
            Some("block") => ModalState::Shown,
            _ => ModalState::Hidden,
        }
    }
}

/// Where a window-level click landed, relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The modal container itself, i.e. the dimmed area around the dialog.
    Backdrop,
    Elsewhere,
}

/// Identifier of a liked message, taken verbatim from the clicked element's id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(UiError::InvalidMessageId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
