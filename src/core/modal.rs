use crate::core::{ClickEvent, ClickTarget, InlineDisplay, ModalState};
use crate::utils::error::Result;

/// Shows and hides the "new message" dialog through its inline `display` style.
pub struct ModalController<E> {
    modal: E,
}

impl<E: InlineDisplay> ModalController<E> {
    pub fn new(modal: E) -> Self {
        Self { modal }
    }

    pub fn element(&self) -> &E {
        &self.modal
    }

    pub fn state(&self) -> ModalState {
        ModalState::from_display(self.modal.display().as_deref())
    }

    pub fn open(&self) -> Result<()> {
        tracing::debug!("Opening new message modal");
        self.modal.set_display(ModalState::Shown.display_value())
    }

    /// Open-link listener body: the link must not navigate.
    pub fn on_open_click<Ev: ClickEvent>(&self, event: &Ev) -> Result<()> {
        event.prevent_default();
        self.open()
    }

    pub fn close(&self) -> Result<()> {
        tracing::debug!("Closing new message modal");
        self.modal.set_display(ModalState::Hidden.display_value())
    }

    /// Window-level click. Only a click on the backdrop itself closes the dialog.
    ///
    /// Returns whether the click closed the modal.
    pub fn on_window_click(&self, target: ClickTarget) -> Result<bool> {
        match target {
            ClickTarget::Backdrop => {
                self.close()?;
                Ok(true)
            }
            ClickTarget::Elsewhere => Ok(false),
        }
    }
}
