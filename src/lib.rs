//! A word-level named entity recognition (NER) service backed by a
//! pre-trained Gaussian naive Bayes classifier and a precomputed
//! word-vector vocabulary.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wernicke::Tagger;
//!
//! let tagger = Tagger::builder()
//!     .with_model_file("nb_ner.json")?
//!     .with_vocabulary_file("word_vectors.csv")?
//!     .build()?;
//!
//! let labels = tagger.tag_sentence("Jack lives in London");
//! println!("Labels: {:?}", labels);
//! # Ok(())
//! # }
//! ```
//!
//! Words absent from the vocabulary are tagged with the outside label
//! `"O"`; words present in the vocabulary are tagged by the classifier.
//!
//! # Thread Safety
//!
//! The tagger is thread-safe and can be shared across threads using `Arc`:
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wernicke::Tagger;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let tagger = Arc::new(Tagger::builder()
//!     .with_model_file("nb_ner.json")?
//!     .with_vocabulary_file("word_vectors.csv")?
//!     .build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let tagger = Arc::clone(&tagger);
//!     handles.push(thread::spawn(move || {
//!         tagger.tag_sentence("test sentence");
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # HTTP API
//!
//! [`server::router`] exposes the tagger over a single route: `GET /`
//! describes the API, `POST /` with a JSON string body returns the
//! sentence and one label per space-separated token.

pub mod server;
pub mod tagger;

pub use server::router;
pub use tagger::{
    NaiveBayes, Tagger, TaggerBuilder, TaggerError, TaggerInfo, Vocabulary, OUTSIDE_LABEL,
};

pub fn init_logger() {
    env_logger::init();
}
