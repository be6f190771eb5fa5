use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use regimen_app::{Settings, SettingsError, SettingsRepository, log as app_log};
use regimen_domain::{self as domain, CatalogRepository, ReadError, StorageError};

use crate::json;

#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid profile: {0}")]
    Profile(#[from] domain::ProfileError),
}

/// Where the exercise catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for CatalogSource {
    fn from(value: Option<PathBuf>) -> Self {
        value.map_or(CatalogSource::Builtin, CatalogSource::File)
    }
}

impl CatalogRepository for CatalogSource {
    fn read_catalog(&self) -> Result<domain::Catalog, ReadError> {
        let path = match self {
            CatalogSource::Builtin => return Ok(domain::Catalog::builtin()),
            CatalogSource::File(path) => path,
        };

        let data = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()),
            _ => StorageError::Io(err),
        })?;
        let exercises = serde_json::from_str::<Vec<json::Exercise>>(&data)
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        debug!("read {} records from {}", exercises.len(), path.display());

        Ok(json::catalog(exercises)?)
    }
}

pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for SettingsFile {
    fn read_settings(&self) -> Result<Settings, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data)
                .map_err(|err| SettingsError::Invalid(format!("{}: {err}", self.path.display()))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), SettingsError> {
        let data = serde_json::to_string_pretty(settings)
            .map_err(|err| SettingsError::Invalid(err.to_string()))?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Keeps the most recent log entries, newest first.
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl app_log::Repository for LogFile {
    fn read_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(VecDeque::new()),
            Err(err) => return Err(app_log::Error::Unknown(err.to_string())),
        }
        .map_err(|err| app_log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(app_log::MAX_ENTRIES);
        let data =
            serde_json::to_string(&entries).map_err(|err| app_log::Error::Unknown(err.to_string()))?;
        fs::write(&self.path, data).map_err(|err| app_log::Error::Unknown(err.to_string()))
    }
}

pub fn read_profile(path: &Path) -> Result<domain::UserProfile, FileError> {
    let data = fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let profile = serde_json::from_str::<json::Profile>(&data).map_err(|source| FileError::Json {
        path: path.display().to_string(),
        source,
    })?;
    Ok(domain::UserProfile::try_from(profile)?)
}

/// Pretty-printed JSON rendition of `plan`.
pub fn plan_to_string(plan: &domain::WorkoutPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json::Plan::from(plan))
}

pub fn write_plan(path: &Path, plan: &domain::WorkoutPlan) -> Result<(), FileError> {
    let data = plan_to_string(plan).map_err(|source| FileError::Json {
        path: path.display().to_string(),
        source,
    })?;
    write_text(path, &data)
}

pub fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
    fs::write(path, text).map_err(|source| FileError::Write {
        path: path.display().to_string(),
        source,
    })
}
