//! Application-level errors and the diagnostic report attached to failed
//! responses for the logging middleware.

use axum::http::StatusCode;
use axum::response::Response;
use thiserror::Error;

use crate::config::LoadError;
use crate::infra::error::InfraError;

/// Structured diagnostics for a failed request. Attached to the response as
/// an extension so the shared logging middleware can emit the cause without
/// it ever reaching the client body.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_message(
        source: &'static str,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            status,
            messages: vec![message.into()],
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

/// Top-level error for process bootstrap and serving.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
}
