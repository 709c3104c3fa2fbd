//! Simulator errors

use std::path::PathBuf;

use horologe_core::config::ConfigError;
use horologe_core::FaceError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0:?}")]
    Config(ConfigError),
    #[error("unknown tutorial stage {0}, expected 1-6")]
    Stage(u8),
    #[error("watchface error: {0:?}")]
    Face(FaceError),
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}

impl From<FaceError> for SimError {
    fn from(e: FaceError) -> Self {
        SimError::Face(e)
    }
}
