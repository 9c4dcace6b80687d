//! Page registry and host shell for the interactive dashboard.
//!
//! Pages are plain functions registered under a display name. The shell
//! resolves the selected name through the registry and hands the page a
//! [`PageContext`] with the shared query service.

pub mod canvas;
pub mod pages;
pub mod registry;
pub mod router;
pub mod shell;

pub use canvas::{Block, Canvas};
pub use pages::standard_pages;
pub use registry::{PageContext, PageRegistry, RegistryError, RenderError, RenderPage};
pub use router::dashboard_router;
pub use shell::{DashboardShell, ShellError, ShellState};

#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use crate::risk::{
        ClientRecordStore, QueryService, RiskDecisionEngine, ScoringError, ScoringModel,
    };

    const CLIENTS_CSV: &str = "\
SK_ID_CURR,SCORE_HINT,AMT_CREDIT,AMT_ANNUITY
100001,0.42,406597.5,24700.5
100028,0.60,1293502.5,35698.5
100066,0.05,,21865.5
456202,0.73,135000,6750
";

    pub(crate) fn service() -> QueryService {
        let store = ClientRecordStore::from_reader(CLIENTS_CSV.as_bytes(), "SK_ID_CURR")
            .expect("fixture loads");
        let model: Arc<dyn ScoringModel> =
            Arc::new(|features: &[f64]| -> Result<f64, ScoringError> { Ok(features[0]) });
        let engine = RiskDecisionEngine::new(model, 0.6).expect("valid threshold");
        QueryService::new(Arc::new(store), Arc::new(engine))
    }

    pub(crate) fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}
