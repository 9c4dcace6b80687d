use std::fmt;

use serde::{Deserialize, Serialize};

/// Client identifier as found in the identifier column of the source table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClientId(pub i64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the client table. `features` follows the store schema order
/// and never contains the identifier column. Missing cells are `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecord {
    pub id: ClientId,
    pub features: Vec<f64>,
}

/// Categorical outcome of a loan decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Rejected,
    /// The identifier is not part of the loaded population.
    Unknown,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Approved => "Approved",
            Verdict::Rejected => "Rejected",
            Verdict::Unknown => "Unknown client",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Probability and verdict computed for a known client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub probability: f64,
    pub verdict: Verdict,
}

/// Result of a lookup through the query service. `probability` is set
/// exactly when the client was found and scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClientDecision {
    pub client_id: ClientId,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

impl ClientDecision {
    pub(crate) fn unknown(client_id: ClientId) -> Self {
        Self {
            client_id,
            verdict: Verdict::Unknown,
            probability: None,
        }
    }

    pub(crate) fn assessed(client_id: ClientId, assessment: RiskAssessment) -> Self {
        Self {
            client_id,
            verdict: assessment.verdict,
            probability: Some(assessment.probability),
        }
    }
}
