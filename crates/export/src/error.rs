#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Invalid(#[from] serde_json::Error),
}
