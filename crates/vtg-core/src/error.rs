//! Unified error type for vid-to-gif.
//!
//! Every failure in the conversion flow ends up as one [`Error`] variant, and
//! each variant renders as a single human-readable line for the CLI.

use std::path::{Path, PathBuf};

/// Unified error type covering all failure modes in vid-to-gif.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external engine executable is missing or does not run.
    #[error("{tool} is not installed or not in PATH")]
    EngineUnavailable {
        /// Name of the missing tool.
        tool: String,
    },

    /// The source video does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The directory the output should be written to does not exist.
    #[error("Output directory does not exist: {}", path.display())]
    OutputDirectoryMissing {
        /// The missing directory.
        path: PathBuf,
    },

    /// A conversion parameter is out of range.
    #[error("{0}")]
    InvalidParameter(String),

    /// An external tool (ffmpeg, ffprobe) failed to start or exited non-zero.
    #[error("Tool error [{tool}]: {message}")]
    Tool {
        /// Name of the tool that failed.
        tool: String,
        /// Human-readable error description.
        message: String,
    },

    /// The configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Convenience constructor for [`Error::EngineUnavailable`].
    pub fn engine_unavailable(tool: impl Into<String>) -> Self {
        Error::EngineUnavailable { tool: tool.into() }
    }

    /// Convenience constructor for [`Error::InputNotFound`].
    pub fn input_not_found(path: impl AsRef<Path>) -> Self {
        Error::InputNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Convenience constructor for [`Error::OutputDirectoryMissing`].
    pub fn output_dir_missing(path: impl AsRef<Path>) -> Self {
        Error::OutputDirectoryMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Convenience constructor for [`Error::InvalidParameter`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter(message.into())
    }

    /// Convenience constructor for [`Error::Tool`].
    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Tool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Follow-up guidance to print alongside the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::EngineUnavailable { tool } => {
                Some(format!("please install {tool} to use this tool"))
            }
            _ => None,
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
