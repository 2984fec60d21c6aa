use std::path::PathBuf;

use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Everything that can go wrong while reading descriptors or configuration
#[derive(Debug, Error)]
pub enum Error {
    // A `Url` element could not be turned into an engine url
    #[error("descriptor parse error: {0}")]
    DescriptorParse(String),

    // The byte stream is not well-formed XML
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),

    // Well-formed tokens that don't add up to one document element
    #[error("malformed document: {0}")]
    Document(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    // One descriptor file failed; wraps the underlying cause
    #[error("failed to load search engine from {path}: {source}")]
    FileLoad {
        path: String,
        #[source]
        source: Box<Error>,
    },

    // Enumerating a directory failed part way (permissions, I/O)
    #[error("failed to scan directory {path}: {source}")]
    DirectoryScan {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.into())
    }
}

// Type alias for results that use `Error` as the error type
pub type Result<T> = std::result::Result<T, Error>;
