// Adapters layer: concrete implementations of the ports (HTTP, in-memory page, browser DOM).

pub mod http;
pub mod memory;

#[cfg(feature = "web")]
pub mod web;
