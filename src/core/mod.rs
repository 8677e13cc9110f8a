pub mod char_counter;
pub mod like_toggle;
pub mod modal;
pub mod page;

pub use crate::domain::model::{ButtonStyle, ClickTarget, MessageId, ModalState};
pub use crate::domain::ports::{
    ClassList, ClickEvent, InlineDisplay, LikeClient, LikeTarget, TextInput, TextLabel,
};
pub use crate::utils::error::Result;
