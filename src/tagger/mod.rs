mod builder;
mod error;
mod model;
mod tagger;
mod utils;
mod vocab;

pub use builder::TaggerBuilder;
pub use error::TaggerError;
pub use model::NaiveBayes;
pub use tagger::{Tagger, OUTSIDE_LABEL};
pub use vocab::Vocabulary;

/// Information about the current state and configuration of a tagger
#[derive(Debug, Clone)]
pub struct TaggerInfo {
    /// Path to the classifier artifact file
    pub model_path: String,
    /// Path to the vocabulary table file
    pub vocab_path: String,
    /// Number of entity classes the classifier is trained on
    pub num_classes: usize,
    /// Labels of the entity classes
    pub class_labels: Vec<String>,
    /// Number of rows in the vocabulary table (duplicates included)
    pub vocab_size: usize,
    /// Dimensionality of the word vectors
    pub feature_dim: usize,
}
