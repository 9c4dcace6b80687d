use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::registry::PageRegistry;
use super::shell::{DashboardShell, ShellError};
use crate::risk::QueryService;

#[derive(Clone)]
pub(crate) struct DashboardState {
    registry: Arc<PageRegistry>,
    service: Arc<QueryService>,
}

/// Router builder exposing the page menu and page renders as JSON.
pub fn dashboard_router(registry: Arc<PageRegistry>, service: Arc<QueryService>) -> Router {
    Router::new()
        .route("/dashboard/pages", get(menu_handler))
        .route("/dashboard/pages/:name", get(page_handler))
        .with_state(DashboardState { registry, service })
}

pub(crate) async fn menu_handler(State(state): State<DashboardState>) -> Json<serde_json::Value> {
    let pages: Vec<&str> = state.registry.names().collect();
    Json(json!({ "pages": pages }))
}

pub(crate) async fn page_handler(
    State(state): State<DashboardState>,
    Path(name): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let mut shell = DashboardShell::new(state.registry, state.service);
    match shell.open(&name, &params) {
        Ok(canvas) => {
            let payload = json!({ "page": name, "blocks": canvas });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        let status = match self {
            ShellError::UnknownPage { .. } => StatusCode::NOT_FOUND,
            ShellError::NothingSelected => StatusCode::BAD_REQUEST,
            ShellError::Render { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::fixtures;
    use crate::dashboard::pages::standard_pages;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        let registry = standard_pages().expect("pages register");
        dashboard_router(Arc::new(registry), Arc::new(fixtures::service()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn menu_lists_pages_in_order() {
        let (status, payload) = get_json("/dashboard/pages").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload["pages"],
            json!(["Home", "Dataset", "Loan request", "Client information"])
        );
    }

    #[tokio::test]
    async fn page_route_renders_blocks() {
        let (status, payload) =
            get_json("/dashboard/pages/Loan%20request?id_client=100001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["page"], "Loan request");
        let blocks = payload["blocks"].as_array().expect("blocks array");
        assert!(blocks
            .iter()
            .any(|block| block["label"] == "Verdict" && block["value"] == "Approved"));
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let (status, payload) = get_json("/dashboard/pages/Settings").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("Settings"));
    }

    #[tokio::test]
    async fn render_failure_is_unprocessable() {
        let (status, _) = get_json("/dashboard/pages/Client%20information").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
