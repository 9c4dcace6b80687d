//! Pages shipped with the dashboard.

mod dataset;
mod home;
mod info;
mod loan;

use super::registry::{PageRegistry, RegistryError};

pub const HOME: &str = "Home";
pub const DATASET: &str = "Dataset";
pub const LOAN_REQUEST: &str = "Loan request";
pub const CLIENT_INFORMATION: &str = "Client information";

/// Query parameter carrying the client identifier.
pub const CLIENT_PARAM: &str = "id_client";

/// Registers the standard pages in menu order.
pub fn standard_pages() -> Result<PageRegistry, RegistryError> {
    let mut registry = PageRegistry::new();
    registry.register(HOME, home::render)?;
    registry.register(DATASET, dataset::render)?;
    registry.register(LOAN_REQUEST, loan::render)?;
    registry.register(CLIENT_INFORMATION, info::render)?;
    Ok(registry)
}

pub(crate) fn format_feature(value: f64) -> String {
    if value.is_nan() {
        "missing".to_string()
    } else {
        value.to_string()
    }
}
