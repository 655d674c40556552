//! Error types for building, reading and sourcing the training deck.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, validating or fetching deck material.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open, read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file format is not supported or could not be detected.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// Failed to parse the PPTX file structure.
    #[error("PPTX parsing error: {0}")]
    PptxParseError(String),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML reading or writing error.
    #[error("XML error: {0}")]
    XmlError(String),

    /// A table was added without any rows.
    #[error("Table on slide {slide} has no rows")]
    EmptyTable { slide: usize },

    /// A table row does not have as many cells as the header row.
    #[error("Table on slide {slide}: row {row} has {found} cells, header has {expected}")]
    RaggedTable {
        slide: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request to {url} failed: {message}")]
    HttpError { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// A URL could not be parsed or resolved.
    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    /// A required environment variable is missing or empty.
    #[error("{0} environment variable not set")]
    MissingEnv(String),

    /// An expected section of a fetched page was not found.
    #[error("Could not find {0} section")]
    SectionNotFound(String),
}
