//! Error types for scaffolding operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a scaffold run can fail. All of them are fatal to the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Project (or folder) name contains characters outside `[A-Za-z0-9_-]`
    #[error("the project name can contain only alphanumeric characters, _ and - (got {0:?})")]
    InvalidName(String),

    /// Folder plan is inconsistent (bad or duplicate folder names)
    #[error("invalid folder plan: {0}")]
    InvalidPlan(String),

    /// Folder plan file could not be parsed
    #[error("failed to parse folder plan {}", .path.display())]
    PlanFormat {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Target path is already present on disk
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Any other filesystem failure
    #[error("filesystem error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dependency manager binary could not be started
    #[error("{program} not found (is it installed and in PATH?)")]
    ToolNotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The dependency manager refused to create the manifest
    #[error("{0} already exists in this folder?")]
    ManifestExists(String),

    /// Reading an answer from the terminal failed
    #[error("failed to read answer")]
    Prompt(#[source] io::Error),
}

impl ScaffoldError {
    /// Wrap an I/O error for `path`, mapping `AlreadyExists` to its own variant
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::AlreadyExists {
            ScaffoldError::AlreadyExists(path)
        } else {
            ScaffoldError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
