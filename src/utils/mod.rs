pub mod error;
pub mod logger;
pub mod task;
pub mod validation;
