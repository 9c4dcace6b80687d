use clap::Args;
use loan_risk::config::{AppConfig, RiskConfig};
use loan_risk::dashboard::pages::CLIENT_PARAM;
use loan_risk::dashboard::standard_pages;
use loan_risk::error::AppError;
use loan_risk::runtime::Runtime;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Overrides for the configured data sources.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Client sample CSV (defaults to APP_CLIENTS_CSV)
    #[arg(long)]
    pub(crate) clients_csv: Option<PathBuf>,
    /// Serialized scoring model (defaults to APP_MODEL_PATH)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Decision threshold in [0, 1] (defaults to APP_DECISION_THRESHOLD)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
}

impl SourceArgs {
    fn apply(self, config: &mut RiskConfig) {
        if let Some(path) = self.clients_csv {
            config.clients_csv = path;
        }
        if let Some(path) = self.model {
            config.model_path = path;
        }
        if let Some(threshold) = self.threshold {
            config.decision_threshold = threshold;
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Client identifier to look up
    pub(crate) id_client: String,
    #[command(flatten)]
    pub(crate) sources: SourceArgs,
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// Page name as listed by the `pages` command
    #[arg(long)]
    pub(crate) page: String,
    /// Client identifier for client-specific pages
    #[arg(long)]
    pub(crate) client: Option<String>,
    /// Number of sample rows to preview on the dataset page
    #[arg(long)]
    pub(crate) rows: Option<usize>,
    #[command(flatten)]
    pub(crate) sources: SourceArgs,
}

fn boot(sources: SourceArgs) -> Result<Runtime, AppError> {
    let mut config = AppConfig::load()?;
    sources.apply(&mut config.risk);
    Runtime::init(&config.risk)
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs { id_client, sources } = args;
    let runtime = boot(sources)?;

    let decision = runtime.service().explain(&id_client)?;
    match decision.probability {
        Some(probability) => println!(
            "{}: {} (default probability {:.3})",
            decision.client_id, decision.verdict, probability
        ),
        None => println!("{}: {}", decision.client_id, decision.verdict),
    }
    Ok(())
}

pub(crate) fn list_pages() -> Result<(), AppError> {
    let registry = standard_pages()?;
    for (position, name) in registry.names().enumerate() {
        println!("{}. {}", position + 1, name);
    }
    Ok(())
}

pub(crate) fn render_page(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        page,
        client,
        rows,
        sources,
    } = args;
    let runtime = boot(sources)?;

    let mut params = BTreeMap::new();
    if let Some(client) = client {
        params.insert(CLIENT_PARAM.to_string(), client);
    }
    if let Some(rows) = rows {
        params.insert("rows".to_string(), rows.to_string());
    }

    let mut shell = runtime.shell();
    let canvas = shell.open(&page, &params)?;
    print!("{canvas}");
    Ok(())
}
