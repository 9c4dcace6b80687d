use std::fmt;
use std::sync::Arc;

use super::domain::{ClientRecord, RiskAssessment, Verdict};
use super::model::{ScoringError, ScoringModel};

/// Probability cutoff separating approvals from rejections.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DecisionThreshold(f64);

impl DecisionThreshold {
    pub fn new(value: f64) -> Result<Self, InvalidThresholdError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidThresholdError { value })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Scores at or above the threshold are rejected.
    pub fn verdict_for(&self, probability: f64) -> Verdict {
        if probability >= self.0 {
            Verdict::Rejected
        } else {
            Verdict::Approved
        }
    }
}

impl fmt::Display for DecisionThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("decision threshold {value} must lie within [0, 1]")]
pub struct InvalidThresholdError {
    pub value: f64,
}

/// Applies a scoring model and a fixed threshold to client records.
#[derive(Clone)]
pub struct RiskDecisionEngine {
    model: Arc<dyn ScoringModel>,
    threshold: DecisionThreshold,
}

impl RiskDecisionEngine {
    pub fn new(model: Arc<dyn ScoringModel>, threshold: f64) -> Result<Self, InvalidThresholdError> {
        let threshold = DecisionThreshold::new(threshold)?;
        Ok(Self { model, threshold })
    }

    pub fn threshold(&self) -> DecisionThreshold {
        self.threshold
    }

    pub fn assess(&self, record: &ClientRecord) -> Result<RiskAssessment, DecisionError> {
        let probability = self.model.predict_proba(&record.features)?;
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(DecisionError::OutOfRange { probability });
        }

        Ok(RiskAssessment {
            probability,
            verdict: self.threshold.verdict_for(probability),
        })
    }

    pub fn decide(&self, record: &ClientRecord) -> Result<Verdict, DecisionError> {
        self.assess(record).map(|assessment| assessment.verdict)
    }
}

impl fmt::Debug for RiskDecisionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskDecisionEngine")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// The engine could not turn a record into a verdict.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecisionError {
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
    #[error("scoring model returned {probability}, outside [0, 1]")]
    OutOfRange { probability: f64 },
}
