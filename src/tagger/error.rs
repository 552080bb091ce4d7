use std::io;

/// Represents the different types of errors that can occur while loading
/// artifacts or constructing a tagger.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    /// Error occurred while loading or validating the classifier artifact
    #[error("Model error: {0}")]
    ModelError(String),
    /// Error occurred while loading or validating the vocabulary table
    #[error("Vocabulary error: {0}")]
    VocabularyError(String),
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
