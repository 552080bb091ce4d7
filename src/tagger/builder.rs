use std::path::Path;
use std::sync::Arc;

use log::info;

use super::error::TaggerError;
use super::model::NaiveBayes;
use super::tagger::Tagger;
use super::vocab::Vocabulary;

/// A builder for constructing a Tagger with a fluent interface.
///
/// Artifacts are deserialized eagerly so that a missing or corrupt file
/// fails construction immediately, before any request is served.
#[derive(Default, Debug)]
pub struct TaggerBuilder {
    model_path: Option<String>,
    vocab_path: Option<String>,
    model: Option<NaiveBayes>,
    vocab: Option<Vocabulary>,
}

impl TaggerBuilder {
    /// Creates a new empty TaggerBuilder instance
    ///
    /// # Example
    /// ```
    /// use wernicke::TaggerBuilder;
    ///
    /// let builder = TaggerBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the classifier artifact from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the classifier artifact
    ///
    /// # Returns
    /// * `Result<Self, TaggerError>` - The builder instance if successful, or an error if:
    ///   - The path is empty or already set
    ///   - The file doesn't exist
    ///   - The artifact fails to parse or validate
    pub fn with_model_file(mut self, path: &str) -> Result<Self, TaggerError> {
        if path.is_empty() {
            return Err(TaggerError::BuildError(
                "Model path cannot be empty".to_string(),
            ));
        }
        if self.model_path.is_some() {
            return Err(TaggerError::BuildError(
                "Model path already set".to_string(),
            ));
        }
        if !Path::new(path).exists() {
            return Err(TaggerError::BuildError(format!(
                "Model file not found: {}",
                path
            )));
        }

        let model = NaiveBayes::from_file(path)?;
        self.model_path = Some(path.to_string());
        self.model = Some(model);
        Ok(self)
    }

    /// Loads the vocabulary table from a CSV file.
    ///
    /// # Arguments
    /// * `path` - Path to the vocabulary artifact
    ///
    /// # Returns
    /// * `Result<Self, TaggerError>` - The builder instance if successful, or an error if:
    ///   - The path is empty or already set
    ///   - The file doesn't exist
    ///   - The table fails to parse or validate
    pub fn with_vocabulary_file(mut self, path: &str) -> Result<Self, TaggerError> {
        if path.is_empty() {
            return Err(TaggerError::BuildError(
                "Vocabulary path cannot be empty".to_string(),
            ));
        }
        if self.vocab_path.is_some() {
            return Err(TaggerError::BuildError(
                "Vocabulary path already set".to_string(),
            ));
        }
        if !Path::new(path).exists() {
            return Err(TaggerError::BuildError(format!(
                "Vocabulary file not found: {}",
                path
            )));
        }

        let vocab = Vocabulary::from_file(path)?;
        self.vocab_path = Some(path.to_string());
        self.vocab = Some(vocab);
        Ok(self)
    }

    /// Builds and returns the final Tagger instance
    ///
    /// # Returns
    /// * `Result<Tagger, TaggerError>` - The constructed Tagger if successful, or an error if:
    ///   - Either artifact is missing
    ///   - The vocabulary dimensionality disagrees with the classifier's
    ///     feature count
    ///
    /// # Example
    /// ```no_run
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use wernicke::TaggerBuilder;
    ///
    /// let tagger = TaggerBuilder::new()
    ///     .with_model_file("nb_ner.json")?
    ///     .with_vocabulary_file("word_vectors.csv")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Tagger, TaggerError> {
        let model = self
            .model
            .ok_or_else(|| TaggerError::BuildError("Model must be loaded".to_string()))?;
        let vocab = self
            .vocab
            .ok_or_else(|| TaggerError::BuildError("Vocabulary must be loaded".to_string()))?;

        // The artifacts are trained together; a mismatch means a wrong or
        // stale file pairing, so refuse to serve with it.
        if !vocab.is_empty() && vocab.dim() != model.num_features() {
            return Err(TaggerError::BuildError(format!(
                "Vocabulary has {}-dimensional vectors but the model expects {} features",
                vocab.dim(),
                model.num_features()
            )));
        }

        info!(
            "Tagger ready: {} classes, {} vocabulary rows",
            model.num_classes(),
            vocab.len()
        );

        Ok(Tagger {
            model_path: self.model_path.unwrap_or_default(),
            vocab_path: self.vocab_path.unwrap_or_default(),
            model: Arc::new(model),
            vocab: Arc::new(vocab),
        })
    }
}
