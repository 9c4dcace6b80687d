use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{QueryError, QueryService};

/// Number of identifiers suggested on the landing route.
const SAMPLE_IDS: usize = 7;

/// Router builder exposing the landing text and the prediction endpoint.
pub fn risk_router(service: Arc<QueryService>) -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route("/predict", get(predict_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PredictParams {
    #[serde(default)]
    pub(crate) id_client: Option<String>,
}

pub(crate) async fn landing_handler(State(service): State<Arc<QueryService>>) -> String {
    let samples: Vec<String> = service
        .store()
        .records()
        .take(SAMPLE_IDS)
        .map(|record| record.id.to_string())
        .collect();

    format!(
        "Quick loan decision: append /predict?id_client=ID to the URL. Try for example: {}",
        samples.join(",")
    )
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<QueryService>>,
    Query(params): Query<PredictParams>,
) -> Response {
    let raw = params.id_client.unwrap_or_default();
    match service.lookup_and_decide(&raw) {
        Ok(verdict) => {
            let payload = json!({
                "id_client": raw.trim(),
                "verdict": verdict,
                "message": verdict.label(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = match self {
            QueryError::Malformed { .. } => StatusCode::BAD_REQUEST,
            QueryError::Scoring { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
