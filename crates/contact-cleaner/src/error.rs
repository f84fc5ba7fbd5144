use crate::config::ConfigError;
use crate::storage::StorageError;
use crate::telemetry::TelemetryError;
use crate::workflows::contacts::ContactTableError;
use crate::workflows::trigger::TriggerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Worker(tokio::task::JoinError),
    Event(serde_json::Error),
    Contacts(ContactTableError),
    Storage(StorageError),
    Trigger(TriggerError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Event(_) | AppError::Contacts(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(err) => storage_status(err),
            AppError::Trigger(TriggerError::MissingRecord)
            | AppError::Trigger(TriggerError::Table(_)) => StatusCode::BAD_REQUEST,
            AppError::Trigger(TriggerError::Storage(err)) => storage_status(err),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn storage_status(err: &StorageError) -> StatusCode {
    match err {
        StorageError::NotFound { .. } => StatusCode::NOT_FOUND,
        StorageError::InvalidKey(_) => StatusCode::BAD_REQUEST,
        StorageError::Io(_) | StorageError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Worker(err) => write!(f, "background task failed: {}", err),
            AppError::Event(err) => write!(f, "invalid trigger event: {}", err),
            AppError::Contacts(err) => write!(f, "contact table error: {}", err),
            AppError::Storage(err) => write!(f, "storage error: {}", err),
            AppError::Trigger(err) => write!(f, "trigger error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Worker(err) => Some(err),
            AppError::Event(err) => Some(err),
            AppError::Contacts(err) => Some(err),
            AppError::Storage(err) => Some(err),
            AppError::Trigger(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
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

impl From<tokio::task::JoinError> for AppError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Worker(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Event(value)
    }
}

impl From<ContactTableError> for AppError {
    fn from(value: ContactTableError) -> Self {
        Self::Contacts(value)
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<TriggerError> for AppError {
    fn from(value: TriggerError) -> Self {
        Self::Trigger(value)
    }
}
