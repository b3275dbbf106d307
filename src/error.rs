//! Error taxonomy for the generation pipeline.
//!
//! Fatality policy:
//! - `UnsupportedVariant`, `Scan`, `Write` and `Config` abort the whole run.
//! - `Parse` and `Render` abort only the (icon, variant) pair they occurred
//!   on; the pipeline logs them and continues with the remaining pairs.

use std::path::PathBuf;

/// Errors produced by the icon generation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A variant tag outside the fixed vocabulary was requested. Raised
    /// before any file I/O for the offending pair.
    #[error("variant `{tag}` is not supported")]
    UnsupportedVariant {
        /// The offending tag.
        tag: String,
    },

    /// An SVG source could not be parsed into an element tree.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// Path of the SVG source.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// A transformed tree could not be serialized into component source.
    #[error("failed to render component `{name}`: {message}")]
    Render {
        /// Component identifier.
        name: String,
        /// Serializer diagnostic.
        message: String,
    },

    /// A generated file or directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path that failed to be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An icon source directory could not be enumerated.
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        /// Directory that failed to be enumerated.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The project configuration file is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Diagnostic describing the problem.
        message: String,
    },
}
