use thiserror::Error;

/// Failure reported by a [`crate::parser::TextExtractor`] implementation when
/// the underlying document cannot be read. Everything downstream of obtaining
/// raw text degrades to defaults instead of failing.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ExtractorError(pub String);

/// The only two ways resume parsing can fail: the file format is not one we
/// accept, or the extractor could not produce text from the document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to extract text from {path}")]
    TextExtraction {
        path: String,
        #[source]
        source: ExtractorError,
    },
}
