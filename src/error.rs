//! Error types shared by the manual generation pipeline.
//!
//! Style and table errors abort the build of a single document, image errors are
//! recovered from by the flow assembler and language errors are reported per request.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the style registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A style with the same name was registered twice.
    #[error("style `{0}` is already registered")]
    Duplicate(String),
    /// A lookup referenced a style that was never registered.
    #[error("unknown style `{0}`")]
    Unknown(String),
}

/// An image could not be located, read or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("image {} is unavailable: {reason}", path.display())]
pub struct ImageUnavailableError {
    /// Path that was resolved for the image reference.
    pub path: PathBuf,
    /// Human readable reason.
    pub reason: String,
}

impl ImageUnavailableError {
    pub(crate) fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A table grid does not have a uniform shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTableShapeError {
    /// The table has no rows at all, not even a header.
    #[error("table has no header row")]
    Empty,
    /// A row's cell count differs from the header's.
    #[error("table row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        /// Absolute row index (0 is the header).
        row: usize,
        /// Cell count of the header row.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },
    /// Explicit column widths do not match the number of columns.
    #[error("table declares {found} column widths for {expected} columns")]
    ColumnWidths {
        /// Cell count of the header row.
        expected: usize,
        /// Number of explicit widths.
        found: usize,
    },
}

/// A requested language tag is not part of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language `{0}` (expected one of: primary, secondary, it, en)")]
pub struct UnsupportedLanguageError(pub String);

/// Fatal errors for a single document build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The style registry was misconfigured.
    #[error(transparent)]
    Style(#[from] StyleError),
    /// The content model contains a malformed table.
    #[error("invalid table in chapter `{chapter}`")]
    Table {
        /// Identifier of the chapter holding the table.
        chapter: String,
        /// Shape violation.
        #[source]
        source: InvalidTableShapeError,
    },
    /// No usable font family could be loaded.
    #[error("failed to load fonts")]
    FontLoad(#[source] genpdf::error::Error),
    /// The layout engine failed while paginating the document.
    #[error("failed to render document")]
    Render(#[source] genpdf::error::Error),
    /// The finished artifact could not be written.
    #[error("failed to write {}", path.display())]
    Io {
        /// Destination path of the artifact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
