use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::canvas::Canvas;
use super::registry::{PageContext, PageRegistry, RenderError};
use crate::risk::QueryService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    PageSelected(String),
    PageRendering(String),
}

/// Host shell that tracks the selected page and dispatches renders through
/// the registry. One shell per front-end session.
pub struct DashboardShell {
    registry: Arc<PageRegistry>,
    service: Arc<QueryService>,
    state: ShellState,
}

impl DashboardShell {
    pub fn new(registry: Arc<PageRegistry>, service: Arc<QueryService>) -> Self {
        Self {
            registry,
            service,
            state: ShellState::Idle,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Page names for building a selector, in registration order.
    pub fn menu(&self) -> Vec<String> {
        self.registry.names().map(str::to_string).collect()
    }

    /// Unknown names leave the current state untouched.
    pub fn select(&mut self, name: &str) -> Result<(), ShellError> {
        if self.registry.resolve(name).is_none() {
            return Err(ShellError::UnknownPage {
                name: name.to_string(),
            });
        }

        debug!(page = name, "page selected");
        self.state = ShellState::PageSelected(name.to_string());
        Ok(())
    }

    pub fn render(&mut self, params: &BTreeMap<String, String>) -> Result<Canvas, ShellError> {
        let name = match &self.state {
            ShellState::PageSelected(name) => name.clone(),
            ShellState::Idle | ShellState::PageRendering(_) => {
                return Err(ShellError::NothingSelected)
            }
        };

        let registry = Arc::clone(&self.registry);
        let page = registry
            .resolve(&name)
            .ok_or_else(|| ShellError::UnknownPage { name: name.clone() })?;

        self.state = ShellState::PageRendering(name.clone());
        let mut canvas = Canvas::new();
        let outcome = page.render(&PageContext::new(&self.service, params), &mut canvas);
        self.state = ShellState::PageSelected(name.clone());

        match outcome {
            Ok(()) => Ok(canvas),
            Err(source) => {
                warn!(page = %name, error = %source, "page render failed");
                Err(ShellError::Render { page: name, source })
            }
        }
    }

    pub fn open(
        &mut self,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<Canvas, ShellError> {
        self.select(name)?;
        self.render(params)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("no page named '{name}'")]
    UnknownPage { name: String },
    #[error("no page selected")]
    NothingSelected,
    #[error("page '{page}' failed to render: {source}")]
    Render { page: String, source: RenderError },
}
