//! Client lookup, probability scoring, and threshold-based loan decisions.

pub mod domain;
pub mod engine;
pub mod model;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{ClientDecision, ClientId, ClientRecord, RiskAssessment, Verdict};
pub use engine::{DecisionError, DecisionThreshold, InvalidThresholdError, RiskDecisionEngine};
pub use model::{LogisticModel, ModelError, ScoringError, ScoringModel};
pub use router::risk_router;
pub use service::{QueryError, QueryService};
pub use store::{ClientRecordStore, ClientStoreError, MalformedSourceError};
