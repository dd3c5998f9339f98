//! Library error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectsError {
    #[error("App '{keyword}' is not a known product")]
    UnknownProduct { keyword: String },

    #[error("No preferences found for {product} in {}", .root.display())]
    NoPreferences { product: String, root: PathBuf },

    #[error("Recent projects file not found in {}", .dir.display())]
    RecordNotFound { dir: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Recent projects record {} is not valid UTF-8", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Malformed recent projects record: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute in recent projects record: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}

impl ProjectsError {
    /// Whether the launcher should fall back to a plain "Open <app>" item
    ///
    /// Everything but an unknown product: a record that can't be found, read
    /// or parsed only costs that product its project list.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::UnknownProduct { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProjectsError>;
