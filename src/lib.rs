pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

#[cfg(feature = "web")]
pub use adapters::web::{mount, mount_page};

pub use adapters::http::ReqwestLikeClient;
pub use adapters::memory::{ClickOutcome, MemoryDocument, MemoryElement, MemoryEvent, MemoryPage};
pub use config::PageConfig;
pub use crate::core::{char_counter::CharCounter, like_toggle::LikeToggle, modal::ModalController};
pub use utils::error::{Result, UiError};
