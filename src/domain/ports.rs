use crate::domain::model::MessageId;
use crate::utils::error::Result;
use crate::utils::task::MaybeSendSync;
use async_trait::async_trait;

// Element ports take `&self`: like the DOM, handles are shared and mutate in place.

pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
}

/// An element a like click can land on: the button itself or something inside it.
pub trait LikeTarget: ClassList + Clone {
    fn element_id(&self) -> String;
    /// Nearest `<button>` ancestor, the element itself included.
    fn closest_button(&self) -> Option<Self>;
}

pub trait ClickEvent {
    type Target;

    fn target(&self) -> Option<Self::Target>;
    fn prevent_default(&self);
}

pub trait InlineDisplay {
    fn display(&self) -> Option<String>;
    fn set_display(&self, value: &str) -> Result<()>;
}

pub trait TextInput {
    fn value(&self) -> String;
}

pub trait TextLabel {
    fn set_text(&self, text: &str);
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait LikeClient: MaybeSendSync {
    /// Registers (or, server side, toggles) a like for `message_id`.
    async fn add_like(&self, message_id: &MessageId) -> Result<()>;
}
