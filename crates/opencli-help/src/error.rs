use std::path::PathBuf;
use thiserror::Error;

/// Conditions raised inside the help engine.
///
/// None of these reach the user as a failure: each one is caught by the
/// layer that knows a less detailed way to answer.
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("Command manifest unavailable at {}: {source}", path.display())]
    ManifestUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Script not found: {}", path.display())]
    ScriptNotFound { path: PathBuf },

    #[error("Could not read script {}: {source}", path.display())]
    ScriptRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, HelpError>;
