use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use ndarray::Array1;

use super::error::TaggerError;
use super::utils::average_vectors;

/// A precomputed word-vector table produced by the training pipeline.
///
/// Rows are kept in file order and a word may appear more than once
/// (duplicate rows correspond to different occurrences seen during
/// training). Lookup goes through a word -> row-indices index built at
/// load time; [`Vocabulary::mean_vector`] aggregates all matching rows
/// into a single element-wise mean. Immutable after load.
#[derive(Debug)]
pub struct Vocabulary {
    words: Vec<String>,
    vectors: Vec<Array1<f32>>,
    index: HashMap<String, Vec<usize>>,
    dim: usize,
}

impl Vocabulary {
    /// Builds a vocabulary from in-memory (word, vector) rows.
    ///
    /// # Returns
    /// * `Result<Self, TaggerError>` - The vocabulary, or a
    ///   `VocabularyError` if the rows do not share one dimensionality
    pub fn from_rows(rows: Vec<(String, Array1<f32>)>) -> Result<Self, TaggerError> {
        let dim = rows.first().map_or(0, |(_, v)| v.len());
        let mut words = Vec::with_capacity(rows.len());
        let mut vectors = Vec::with_capacity(rows.len());
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, (word, vector)) in rows.into_iter().enumerate() {
            if vector.len() != dim {
                return Err(TaggerError::VocabularyError(format!(
                    "Row {} ('{}') has {} components, expected {}",
                    i,
                    word,
                    vector.len(),
                    dim
                )));
            }
            index.entry(word.clone()).or_default().push(i);
            words.push(word);
            vectors.push(vector);
        }

        Ok(Self {
            words,
            vectors,
            index,
            dim,
        })
    }

    /// Loads a vocabulary from a CSV artifact file.
    ///
    /// The file must carry a header row; the first column is the surface
    /// word and the remaining columns are the float components.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TaggerError> {
        let file = File::open(path.as_ref())?;
        let vocab = Self::from_reader(file)?;
        info!(
            "Vocabulary loaded: {} rows ({} distinct words), {} dimensions",
            vocab.len(),
            vocab.num_words(),
            vocab.dim()
        );
        Ok(vocab)
    }

    /// Loads a vocabulary from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TaggerError> {
        let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let mut rows = Vec::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let mut fields = record.iter();
            let word = fields
                .next()
                .ok_or_else(|| {
                    TaggerError::VocabularyError(format!("Row {} is empty", i))
                })?
                .to_string();
            let components: Vec<f32> = fields
                .map(|field| {
                    field.trim().parse::<f32>().map_err(|e| {
                        TaggerError::VocabularyError(format!(
                            "Row {} ('{}'): invalid component '{}': {}",
                            i, word, field, e
                        ))
                    })
                })
                .collect::<Result<_, _>>()?;
            rows.push((word, Array1::from_vec(components)));
        }

        Self::from_rows(rows)
    }

    /// Number of rows, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words.
    pub fn num_words(&self) -> usize {
        self.index.len()
    }

    /// Dimensionality of the word vectors.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether any row matches `word` exactly (case-sensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Element-wise mean of every row whose word matches `word` exactly,
    /// or `None` if no row matches.
    pub fn mean_vector(&self, word: &str) -> Option<Array1<f32>> {
        let indices = self.index.get(word)?;
        Some(average_vectors(
            indices.iter().map(|&i| &self.vectors[i]),
            self.dim,
        ))
    }
}
