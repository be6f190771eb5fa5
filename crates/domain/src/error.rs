#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Integrity violations in catalog data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("exercise \"{exercise}\" is missing field \"{field}\"")]
    MissingField {
        exercise: String,
        field: &'static str,
    },
    #[error("exercise \"{exercise}\" has invalid {field} \"{value}\"")]
    InvalidValue {
        exercise: String,
        field: &'static str,
        value: String,
    },
    #[error("exercise #{0} has no name")]
    Unnamed(usize),
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("failed to load exercise catalog: {0}")]
    Catalog(#[from] ReadError),
}
