use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// Capability mapping a feature vector to a default-risk probability.
///
/// Implemented for any matching closure so decisions can be driven by
/// deterministic fakes in tests.
pub trait ScoringModel: Send + Sync {
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ScoringError>;
}

impl<F> ScoringModel for F
where
    F: Fn(&[f64]) -> Result<f64, ScoringError> + Send + Sync,
{
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ScoringError> {
        self(features)
    }
}

/// Failure raised by a scoring model for a single input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("model expects {expected} features, received {found}")]
    FeatureCount { expected: usize, found: usize },
    #[error("model evaluation failed: {0}")]
    Failed(String),
}

/// Pretrained logistic regression restored from its JSON export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogisticModel {
    features: Vec<String>,
    intercept: f64,
    coefficients: Vec<f64>,
    #[serde(default)]
    scaler: Option<StandardScaler>,
}

/// Per-feature standardization applied before the linear term.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl LogisticModel {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let expected = self.features.len();
        if self.coefficients.len() != expected {
            return Err(ModelError::Shape {
                field: "coefficients",
                expected,
                found: self.coefficients.len(),
            });
        }

        if let Some(scaler) = &self.scaler {
            for (field, values) in [("scaler.mean", &scaler.mean), ("scaler.scale", &scaler.scale)]
            {
                if values.len() != expected {
                    return Err(ModelError::Shape {
                        field,
                        expected,
                        found: values.len(),
                    });
                }
            }
            if let Some(index) = scaler
                .scale
                .iter()
                .position(|scale| *scale == 0.0 || !scale.is_finite())
            {
                return Err(ModelError::ZeroScale {
                    feature: self.features[index].clone(),
                });
            }
        }

        Ok(())
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Rejects a model trained on a different column layout than the store.
    pub fn ensure_schema(&self, schema: &[String]) -> Result<(), ModelError> {
        if self.features.as_slice() == schema {
            Ok(())
        } else {
            Err(ModelError::SchemaMismatch {
                model: self.features.clone(),
                store: schema.to_vec(),
            })
        }
    }

    fn standardized(&self, index: usize, value: f64) -> f64 {
        if value.is_nan() {
            // Missing values sit at the training mean.
            return 0.0;
        }
        match &self.scaler {
            Some(scaler) => (value - scaler.mean[index]) / scaler.scale[index],
            None => value,
        }
    }
}

impl ScoringModel for LogisticModel {
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ScoringError> {
        if features.len() != self.coefficients.len() {
            return Err(ScoringError::FeatureCount {
                expected: self.coefficients.len(),
                found: features.len(),
            });
        }

        let logit = features
            .iter()
            .zip(&self.coefficients)
            .enumerate()
            .fold(self.intercept, |acc, (index, (value, weight))| {
                acc + weight * self.standardized(index, *value)
            });

        if !logit.is_finite() {
            return Err(ScoringError::Failed(format!(
                "non-finite decision value {logit}"
            )));
        }

        Ok(1.0 / (1.0 + (-logit).exp()))
    }
}

/// Failure to restore a [`LogisticModel`].
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model field '{field}' has {found} entries, expected {expected}")]
    Shape {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("scaler for feature '{feature}' has a zero or non-finite scale")]
    ZeroScale { feature: String },
    #[error("model features {model:?} do not match client columns {store:?}")]
    SchemaMismatch {
        model: Vec<String>,
        store: Vec<String>,
    },
}
