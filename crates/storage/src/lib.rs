#![warn(clippy::pedantic)]

pub mod file;
pub mod json;

pub use file::{
    CatalogSource, FileError, LogFile, SettingsFile, plan_to_string, read_profile, write_plan,
    write_text,
};
