use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use ndarray::{Array1, Array2};
use serde::Deserialize;

use super::error::TaggerError;
use super::tagger::OUTSIDE_LABEL;

/// On-disk representation of the classifier artifact: a JSON object with
/// plain nested arrays, as produced by the training pipeline.
#[derive(Debug, Deserialize)]
struct RawModel {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    theta: Vec<Vec<f64>>,
    var: Vec<Vec<f64>>,
}

/// A pre-trained Gaussian naive Bayes classifier over word vectors.
///
/// The parameters are fixed at load time; `predict` is a pure function of
/// the input vector. For each class the joint log likelihood is the class
/// log prior plus the sum of per-feature Gaussian log densities; the
/// predicted label is the argmax over classes.
#[derive(Debug)]
pub struct NaiveBayes {
    classes: Vec<String>,
    class_log_prior: Array1<f64>,
    theta: Array2<f64>,
    var: Array2<f64>,
}

impl NaiveBayes {
    /// Assembles a classifier from raw parameters.
    ///
    /// # Arguments
    /// * `classes` - Entity class labels, one per row of `theta`/`var`
    /// * `class_log_prior` - Log prior probability per class
    /// * `theta` - Per-class feature means, shape [num_classes, num_features]
    /// * `var` - Per-class feature variances, same shape as `theta`
    ///
    /// # Returns
    /// * `Result<Self, TaggerError>` - The classifier, or a `ModelError` if
    ///   the parameter shapes disagree or no classes are present
    pub fn new(
        classes: Vec<String>,
        class_log_prior: Array1<f64>,
        theta: Array2<f64>,
        var: Array2<f64>,
    ) -> Result<Self, TaggerError> {
        if classes.is_empty() {
            return Err(TaggerError::ModelError(
                "Model must define at least one class".to_string(),
            ));
        }
        if class_log_prior.len() != classes.len() {
            return Err(TaggerError::ModelError(format!(
                "Expected {} class priors, found {}",
                classes.len(),
                class_log_prior.len()
            )));
        }
        if theta.nrows() != classes.len() || var.nrows() != classes.len() {
            return Err(TaggerError::ModelError(format!(
                "Mean/variance tables must have one row per class ({}), found {} and {}",
                classes.len(),
                theta.nrows(),
                var.nrows()
            )));
        }
        if theta.ncols() != var.ncols() {
            return Err(TaggerError::ModelError(format!(
                "Mean table has {} features but variance table has {}",
                theta.ncols(),
                var.ncols()
            )));
        }
        if var.iter().any(|&v| v <= 0.0 || !v.is_finite()) {
            return Err(TaggerError::ModelError(
                "Variances must be finite and strictly positive".to_string(),
            ));
        }
        Ok(Self {
            classes,
            class_log_prior,
            theta,
            var,
        })
    }

    /// Loads a classifier from a JSON artifact file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TaggerError> {
        let file = File::open(path.as_ref())?;
        let model = Self::from_reader(BufReader::new(file))?;
        info!(
            "Classifier loaded: {} classes, {} features",
            model.num_classes(),
            model.num_features()
        );
        Ok(model)
    }

    /// Loads a classifier from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TaggerError> {
        let raw: RawModel = serde_json::from_reader(reader)?;
        let num_classes = raw.classes.len();
        let num_features = raw.theta.first().map_or(0, Vec::len);

        let theta = flatten_rows(raw.theta, num_features, "theta")?;
        let var = flatten_rows(raw.var, num_features, "var")?;
        Self::new(
            raw.classes,
            Array1::from_vec(raw.class_log_prior),
            Array2::from_shape_vec((num_classes, num_features), theta)
                .map_err(|e| TaggerError::ModelError(format!("Invalid theta shape: {}", e)))?,
            Array2::from_shape_vec((num_classes, num_features), var)
                .map_err(|e| TaggerError::ModelError(format!("Invalid var shape: {}", e)))?,
        )
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn num_features(&self) -> usize {
        self.theta.ncols()
    }

    pub fn class_labels(&self) -> &[String] {
        &self.classes
    }

    /// Predicts the entity label for a single feature vector.
    ///
    /// Returns the label of the class with the highest joint log
    /// likelihood. The label set is whatever the training pipeline
    /// produced; it may itself contain the outside label.
    pub fn predict(&self, features: &Array1<f32>) -> String {
        let x = features.mapv(f64::from);

        let best = self
            .joint_log_likelihood(&x)
            .into_iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i);

        best.and_then(|i| self.classes.get(i).cloned())
            .unwrap_or_else(|| OUTSIDE_LABEL.to_string())
    }

    fn joint_log_likelihood(&self, x: &Array1<f64>) -> Vec<f64> {
        self.theta
            .outer_iter()
            .zip(self.var.outer_iter())
            .zip(self.class_log_prior.iter())
            .map(|((mean, var), &log_prior)| {
                let log_density: f64 = x
                    .iter()
                    .zip(mean.iter())
                    .zip(var.iter())
                    .map(|((&xj, &mj), &vj)| {
                        -0.5 * (2.0 * PI * vj).ln() - (xj - mj).powi(2) / (2.0 * vj)
                    })
                    .sum();
                log_prior + log_density
            })
            .collect()
    }
}

fn flatten_rows(
    rows: Vec<Vec<f64>>,
    num_features: usize,
    name: &str,
) -> Result<Vec<f64>, TaggerError> {
    let mut flat = Vec::with_capacity(rows.len() * num_features);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != num_features {
            return Err(TaggerError::ModelError(format!(
                "Row {} of {} has {} features, expected {}",
                i,
                name,
                row.len(),
                num_features
            )));
        }
        flat.extend(row);
    }
    Ok(flat)
}
