use std::collections::{BTreeMap, HashMap};

use super::canvas::Canvas;
use crate::risk::{ClientRecordStore, QueryError, QueryService};

/// Shared state handed to a page for one render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub service: &'a QueryService,
    pub params: &'a BTreeMap<String, String>,
}

impl<'a> PageContext<'a> {
    pub fn new(service: &'a QueryService, params: &'a BTreeMap<String, String>) -> Self {
        Self { service, params }
    }

    pub fn store(&self) -> &'a ClientRecordStore {
        self.service.store()
    }

    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn require(&self, name: &'static str) -> Result<&'a str, RenderError> {
        self.param(name).ok_or(RenderError::MissingParameter(name))
    }
}

/// Render capability stored in the registry.
pub trait RenderPage: Send + Sync {
    fn render(&self, ctx: &PageContext<'_>, canvas: &mut Canvas) -> Result<(), RenderError>;
}

impl<F> RenderPage for F
where
    F: Fn(&PageContext<'_>, &mut Canvas) -> Result<(), RenderError> + Send + Sync,
{
    fn render(&self, ctx: &PageContext<'_>, canvas: &mut Canvas) -> Result<(), RenderError> {
        self(ctx, canvas)
    }
}

/// Failure raised while a page renders.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },
    #[error(transparent)]
    Query(#[from] QueryError),
}

pub struct PageDescriptor {
    name: String,
    page: Box<dyn RenderPage>,
}

impl PageDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Pages in registration order, indexed by name.
///
/// Registration needs `&mut self`, so once the registry is shared behind an
/// `Arc` it is closed for registration.
#[derive(Default)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
    index: HashMap<String, usize>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<P>(&mut self, name: impl Into<String>, page: P) -> Result<(), RegistryError>
    where
        P: RenderPage + 'static,
    {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }

        self.index.insert(name.clone(), self.pages.len());
        self.pages.push(PageDescriptor {
            name,
            page: Box::new(page),
        });
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<&dyn RenderPage> {
        self.index
            .get(name)
            .map(|position| self.pages[*position].page.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.iter().map(PageDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a page named '{name}' is already registered")]
    DuplicateName { name: String },
}
