use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::risk::engine::RiskDecisionEngine;
use crate::risk::model::{ScoringError, ScoringModel};
use crate::risk::service::QueryService;
use crate::risk::store::ClientRecordStore;

pub(super) const ID_COLUMN: &str = "SK_ID_CURR";

/// The first feature doubles as the probability so tests can pick scores.
pub(super) const CLIENTS_CSV: &str = "\
SK_ID_CURR,SCORE_HINT,AMT_CREDIT,AMT_ANNUITY
100001,0.42,406597.5,24700.5
100028,0.60,1293502.5,35698.5
100066,0.05,,21865.5
456202,0.73,135000,6750
";

pub(super) fn store() -> ClientRecordStore {
    ClientRecordStore::from_reader(CLIENTS_CSV.as_bytes(), ID_COLUMN).expect("fixture loads")
}

pub(super) fn first_feature_model() -> Arc<dyn ScoringModel> {
    Arc::new(|features: &[f64]| -> Result<f64, ScoringError> { Ok(features[0]) })
}

pub(super) fn failing_model() -> Arc<dyn ScoringModel> {
    Arc::new(|_: &[f64]| -> Result<f64, ScoringError> {
        Err(ScoringError::Failed("booster unavailable".to_string()))
    })
}

pub(super) fn fixed_model(probability: f64) -> Arc<dyn ScoringModel> {
    Arc::new(move |_: &[f64]| -> Result<f64, ScoringError> { Ok(probability) })
}

pub(super) fn engine(model: Arc<dyn ScoringModel>, threshold: f64) -> RiskDecisionEngine {
    RiskDecisionEngine::new(model, threshold).expect("valid threshold")
}

pub(super) fn service_with(model: Arc<dyn ScoringModel>, threshold: f64) -> QueryService {
    QueryService::new(Arc::new(store()), Arc::new(engine(model, threshold)))
}

pub(super) fn service() -> QueryService {
    service_with(first_feature_model(), 0.6)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
