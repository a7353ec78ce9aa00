use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read config file {path:?}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in config file {path:?}")]
    ConfigJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("Could not serialize config")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to run native window: {0}")]
    Gui(String),
}

impl From<eframe::Error> for Error {
    fn from(error: eframe::Error) -> Self {
        Self::Gui(error.to_string())
    }
}
