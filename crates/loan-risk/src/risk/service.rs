use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{ClientDecision, ClientId, Verdict};
use super::engine::{DecisionError, DecisionThreshold, RiskDecisionEngine};
use super::store::ClientRecordStore;

/// Service composing the client store and the decision engine.
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<ClientRecordStore>,
    engine: Arc<RiskDecisionEngine>,
}

impl QueryService {
    pub fn new(store: Arc<ClientRecordStore>, engine: Arc<RiskDecisionEngine>) -> Self {
        Self { store, engine }
    }

    /// Resolve a raw identifier to a verdict. An identifier outside the
    /// loaded population yields [`Verdict::Unknown`], not an error.
    pub fn lookup_and_decide(&self, raw_id: &str) -> Result<Verdict, QueryError> {
        self.explain(raw_id).map(|decision| decision.verdict)
    }

    /// Same as [`lookup_and_decide`](Self::lookup_and_decide) but keeps the
    /// computed probability.
    pub fn explain(&self, raw_id: &str) -> Result<ClientDecision, QueryError> {
        let client_id = parse_client_id(raw_id)?;

        let Some(record) = self.store.get(client_id) else {
            debug!(%client_id, "client not listed");
            return Ok(ClientDecision::unknown(client_id));
        };

        let assessment = self.engine.assess(record).map_err(|source| {
            warn!(%client_id, error = %source, "scoring failed");
            QueryError::Scoring { client_id, source }
        })?;

        debug!(
            %client_id,
            probability = assessment.probability,
            verdict = assessment.verdict.label(),
            "client scored"
        );
        Ok(ClientDecision::assessed(client_id, assessment))
    }

    pub fn store(&self) -> &ClientRecordStore {
        &self.store
    }

    pub fn threshold(&self) -> DecisionThreshold {
        self.engine.threshold()
    }
}

pub(crate) fn parse_client_id(raw_id: &str) -> Result<ClientId, QueryError> {
    raw_id
        .trim()
        .parse::<i64>()
        .map(ClientId)
        .map_err(|_| QueryError::Malformed {
            raw: raw_id.to_string(),
        })
}

/// Error raised by the query service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("'{raw}' is not a valid client identifier")]
    Malformed { raw: String },
    #[error("could not score client {client_id}: {source}")]
    Scoring {
        client_id: ClientId,
        source: DecisionError,
    },
}
