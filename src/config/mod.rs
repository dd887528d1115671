// Config layer - startup-time configuration
pub mod settings;

pub use settings::{AppSettings, LoggingSetupError};
