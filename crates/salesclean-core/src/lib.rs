pub mod config;
pub mod error;
pub mod loader;
pub mod missing;
pub mod normalize;
pub mod pipeline;
pub mod table;
pub mod validate;
pub mod writer;

pub use config::{CleaningConfig, CriticalPolicy};
pub use error::{CleanError, Result};
pub use pipeline::Pipeline;
