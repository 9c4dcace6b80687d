use crate::config::ConfigError;
use crate::dashboard::{RegistryError, ShellError};
use crate::risk::{ClientStoreError, InvalidThresholdError, ModelError, QueryError};
use crate::telemetry::TelemetryError;
use std::fmt;

/// Top-level error for start-up and command-line entry points.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Clients(ClientStoreError),
    Model(ModelError),
    Threshold(InvalidThresholdError),
    Pages(RegistryError),
    Query(QueryError),
    Dashboard(ShellError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Clients(err) => write!(f, "client data error: {}", err),
            AppError::Model(err) => write!(f, "scoring model error: {}", err),
            AppError::Threshold(err) => write!(f, "decision engine error: {}", err),
            AppError::Pages(err) => write!(f, "dashboard registration error: {}", err),
            AppError::Query(err) => write!(f, "query error: {}", err),
            AppError::Dashboard(err) => write!(f, "dashboard error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Clients(err) => Some(err),
            AppError::Model(err) => Some(err),
            AppError::Threshold(err) => Some(err),
            AppError::Pages(err) => Some(err),
            AppError::Query(err) => Some(err),
            AppError::Dashboard(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ClientStoreError> for AppError {
    fn from(value: ClientStoreError) -> Self {
        Self::Clients(value)
    }
}

impl From<ModelError> for AppError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

impl From<InvalidThresholdError> for AppError {
    fn from(value: InvalidThresholdError) -> Self {
        Self::Threshold(value)
    }
}

impl From<RegistryError> for AppError {
    fn from(value: RegistryError) -> Self {
        Self::Pages(value)
    }
}

impl From<QueryError> for AppError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}

impl From<ShellError> for AppError {
    fn from(value: ShellError) -> Self {
        Self::Dashboard(value)
    }
}
