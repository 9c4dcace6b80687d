use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::RiskConfig;
use crate::dashboard::{dashboard_router, standard_pages, DashboardShell, PageRegistry};
use crate::error::AppError;
use crate::risk::{
    risk_router, ClientRecordStore, LogisticModel, QueryService, RiskDecisionEngine,
};

/// Process-wide state built once at start-up and shared read-only.
#[derive(Clone)]
pub struct Runtime {
    service: Arc<QueryService>,
    pages: Arc<PageRegistry>,
}

impl Runtime {
    /// Loads the client table and the model, then wires the engine, the query
    /// service and the page registry. Any failure here is a broken deployment.
    pub fn init(config: &RiskConfig) -> Result<Self, AppError> {
        let store = ClientRecordStore::from_path(&config.clients_csv, &config.id_column)?;
        let model = LogisticModel::from_path(&config.model_path)?;
        model.ensure_schema(store.schema())?;

        let engine = RiskDecisionEngine::new(Arc::new(model), config.decision_threshold)?;
        let service = QueryService::new(Arc::new(store), Arc::new(engine));

        Ok(Self::from_parts(service, standard_pages()?))
    }

    pub fn from_parts(service: QueryService, pages: PageRegistry) -> Self {
        info!(
            clients = service.store().len(),
            threshold = service.threshold().value(),
            pages = pages.len(),
            "runtime initialized"
        );
        Self {
            service: Arc::new(service),
            pages: Arc::new(pages),
        }
    }

    pub fn service(&self) -> Arc<QueryService> {
        Arc::clone(&self.service)
    }

    pub fn pages(&self) -> Arc<PageRegistry> {
        Arc::clone(&self.pages)
    }

    /// A fresh dashboard session over the shared registry.
    pub fn shell(&self) -> DashboardShell {
        DashboardShell::new(self.pages(), self.service())
    }

    /// Prediction and dashboard routes merged into one router.
    pub fn router(&self) -> Router {
        risk_router(self.service()).merge(dashboard_router(self.pages(), self.service()))
    }
}
