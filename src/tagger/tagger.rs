use std::sync::Arc;

use super::model::NaiveBayes;
use super::vocab::Vocabulary;

/// Sentinel label for tokens outside any recognized entity, including
/// every token absent from the vocabulary.
pub const OUTSIDE_LABEL: &str = "O";

/// A thread-safe word-level NER tagger over immutable, pre-trained
/// artifacts.
///
/// # Thread Safety
///
/// This type is automatically `Send + Sync` because all of its fields are
/// thread-safe: `String` is `Send + Sync`, and the classifier and
/// vocabulary are immutable data wrapped in `Arc`. Tagging is a read-only
/// operation, so arbitrarily many calls may run concurrently without
/// locking.
#[derive(Debug)]
pub struct Tagger {
    pub model_path: String,
    pub vocab_path: String,
    pub model: Arc<NaiveBayes>,
    pub vocab: Arc<Vocabulary>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Tagger>();
    }
};

impl Tagger {
    /// Creates a new TaggerBuilder for fluent construction
    pub fn builder() -> super::builder::TaggerBuilder {
        super::builder::TaggerBuilder::new()
    }

    /// Returns information about the tagger's current state
    pub fn info(&self) -> super::TaggerInfo {
        super::TaggerInfo {
            model_path: self.model_path.clone(),
            vocab_path: self.vocab_path.clone(),
            num_classes: self.model.num_classes(),
            class_labels: self.model.class_labels().to_vec(),
            vocab_size: self.vocab.len(),
            feature_dim: self.vocab.dim(),
        }
    }

    /// Tags a single word token.
    ///
    /// If at least one vocabulary row matches the token exactly
    /// (case-sensitive, no normalization), the matching vectors are
    /// averaged element-wise and the classifier labels the result.
    /// Otherwise the token is outside the known vocabulary and the
    /// sentinel [`OUTSIDE_LABEL`] is returned without consulting the
    /// classifier. There are no other branches.
    ///
    /// # Example
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # use wernicke::Tagger;
    /// # let tagger = Tagger::builder()
    /// #     .with_model_file("nb_ner.json")?
    /// #     .with_vocabulary_file("word_vectors.csv")?
    /// #     .build()?;
    /// let label = tagger.tag_word("London");
    /// println!("London -> {}", label);
    /// # Ok(())
    /// # }
    /// ```
    pub fn tag_word(&self, word: &str) -> String {
        match self.vocab.mean_vector(word) {
            Some(features) => self.model.predict(&features),
            None => OUTSIDE_LABEL.to_string(),
        }
    }

    /// Tags every token of a sentence, preserving token order.
    ///
    /// The sentence is split on literal single spaces with no further
    /// processing, so consecutive spaces produce empty tokens; these miss
    /// the vocabulary and are tagged [`OUTSIDE_LABEL`].
    pub fn tag_sentence(&self, sentence: &str) -> Vec<String> {
        sentence.split(' ').map(|word| self.tag_word(word)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn setup_test_tagger() -> Tagger {
        let model = NaiveBayes::new(
            vec!["B-geo".to_string(), "B-per".to_string()],
            array![0.5_f64.ln(), 0.5_f64.ln()],
            array![[1.0, 1.0], [-1.0, -1.0]],
            array![[0.5, 0.5], [0.5, 0.5]],
        )
        .expect("Failed to build test model");

        let vocab = Vocabulary::from_rows(vec![
            ("London".to_string(), array![0.9_f32, 1.1]),
            ("Jack".to_string(), array![-1.0_f32, -0.9]),
            // Duplicate rows for "Paris" that average near the B-geo mean
            ("Paris".to_string(), array![0.0_f32, 2.0]),
            ("Paris".to_string(), array![2.0_f32, 0.0]),
        ])
        .expect("Failed to build test vocabulary");

        Tagger {
            model_path: "nb_ner.json".to_string(),
            vocab_path: "word_vectors.csv".to_string(),
            model: Arc::new(model),
            vocab: Arc::new(vocab),
        }
    }

    #[test]
    fn test_known_word_uses_classifier() {
        let tagger = setup_test_tagger();
        assert_eq!(tagger.tag_word("London"), "B-geo");
        assert_eq!(tagger.tag_word("Jack"), "B-per");
    }

    #[test]
    fn test_unknown_word_is_outside() {
        let tagger = setup_test_tagger();
        assert_eq!(tagger.tag_word("xylophone"), OUTSIDE_LABEL);
        assert_eq!(tagger.tag_word(""), OUTSIDE_LABEL);
    }

    #[test]
    fn test_duplicate_rows_are_averaged() {
        let tagger = setup_test_tagger();
        // Both "Paris" rows average to (1, 1), the B-geo mean.
        assert_eq!(tagger.tag_word("Paris"), "B-geo");
    }

    #[test]
    fn test_sentence_preserves_token_order() {
        let tagger = setup_test_tagger();
        let labels = tagger.tag_sentence("Jack lives in London");
        assert_eq!(labels, vec!["B-per", "O", "O", "B-geo"]);
    }

    #[test]
    fn test_double_space_produces_empty_token() {
        let tagger = setup_test_tagger();
        let labels = tagger.tag_sentence("Jack  London");
        assert_eq!(labels, vec!["B-per", "O", "B-geo"]);
    }

    #[test]
    fn test_tagger_info() {
        let tagger = setup_test_tagger();
        let info = tagger.info();
        assert_eq!(info.num_classes, 2);
        assert_eq!(info.vocab_size, 4);
        assert_eq!(info.feature_dim, 2);
        assert!(info.class_labels.contains(&"B-geo".to_string()));
    }
}
