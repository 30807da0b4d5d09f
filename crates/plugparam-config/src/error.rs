//! Layout I/O and parse errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Anything that stops a layout from being read, written or turned into a bank.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout file could not be read.
    #[error("cannot read layout '{}': {source}", path.display())]
    ReadFile {
        /// File that was being read.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The layout file could not be written.
    #[error("cannot write layout '{}': {source}", path.display())]
    WriteFile {
        /// Destination file.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The directory for a saved layout could not be created.
    #[error("cannot create layout directory '{}': {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// Not valid TOML, or missing required keys.
    #[error("malformed layout TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Serializer refused the layout.
    #[error("layout cannot be written as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Well-formed TOML describing unusable parameters.
    #[error("invalid layout: {0}")]
    Validation(#[from] ValidationError),
}

impl LayoutError {
    pub(crate) fn read_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Path involved in a filesystem failure, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ReadFile { path, .. }
            | Self::WriteFile { path, .. }
            | Self::CreateDir { path, .. } => Some(path),
            _ => None,
        }
    }
}
