#![warn(clippy::pedantic)]

pub mod document;
pub mod log;
mod service;
mod settings;

pub use document::{Document, Page};
pub use service::Service;
pub use settings::{LogLevel, Settings, SettingsError, SettingsRepository, SettingsService};
